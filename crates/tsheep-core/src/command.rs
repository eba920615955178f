//! Mapping of the first positional argument to a command

/// A single invocation's command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`, `-h`, `--help` or nothing at all
    Help,
    /// `add`/`install`, with the skill name when one was given
    Add(Option<String>),
    /// `list`/`ls`
    List,
    Unknown(String),
}

impl Command {
    pub fn from_positionals(positionals: &[String]) -> Self {
        let Some(command) = positionals.first() else {
            return Self::Help;
        };

        match command.as_str() {
            "help" | "-h" | "--help" => Self::Help,
            "add" | "install" => {
                Self::Add(positionals.get(1).filter(|name| !name.is_empty()).cloned())
            }
            "list" | "ls" => Self::List,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_help_variants() {
        assert_eq!(Command::from_positionals(&[]), Command::Help);
        for token in ["help", "-h", "--help"] {
            assert_eq!(Command::from_positionals(&args(&[token])), Command::Help);
        }
    }

    #[test]
    fn test_add_and_install_aliases() {
        assert_eq!(
            Command::from_positionals(&args(&["add", "foo"])),
            Command::Add(Some("foo".into()))
        );
        assert_eq!(
            Command::from_positionals(&args(&["install", "foo", "extra"])),
            Command::Add(Some("foo".into()))
        );
        assert_eq!(Command::from_positionals(&args(&["add"])), Command::Add(None));
    }

    #[test]
    fn test_empty_skill_name_is_missing() {
        assert_eq!(
            Command::from_positionals(&args(&["add", ""])),
            Command::Add(None)
        );
    }

    #[test]
    fn test_list_aliases() {
        assert_eq!(Command::from_positionals(&args(&["list"])), Command::List);
        assert_eq!(Command::from_positionals(&args(&["ls"])), Command::List);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::from_positionals(&args(&["remove", "foo"])),
            Command::Unknown("remove".into())
        );
    }
}
