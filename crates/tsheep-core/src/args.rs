//! Command-line token classification
//!
//! Flags may appear anywhere on the line. Anything that is not a known flag
//! stays a positional argument, so `-h` and `--help` reach the dispatcher as
//! commands.

use crate::scope::{InstallOptions, InstallScope, SkillsRoot};

/// Warning recorded when `--local` and `--global` are both given
pub const SCOPE_CONFLICT_WARNING: &str =
    "⚠ Both --local and --global specified. Using --global.";

/// Result of classifying the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedArgs {
    pub options: InstallOptions,
    pub positionals: Vec<String>,
    pub warnings: Vec<String>,
}

/// Split tokens into install options and positional arguments
pub fn parse_args<I, S>(tokens: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut local = false;
    let mut global = false;
    let mut root = SkillsRoot::Claude;
    let mut positionals = Vec::new();

    for token in tokens {
        let token = token.into();
        match token.as_str() {
            "--local" | "-l" => local = true,
            "--global" | "-g" => global = true,
            "--codex" | "-c" => root = SkillsRoot::Codex,
            _ => positionals.push(token),
        }
    }

    let mut options = InstallOptions {
        scope: if local {
            InstallScope::Local
        } else {
            InstallScope::Global
        },
        root,
        global_explicit: global,
    };

    let mut warnings = Vec::new();
    if options.is_local() && options.global_explicit {
        options.scope = InstallScope::Global;
        warnings.push(SCOPE_CONFLICT_WARNING.to_string());
    }

    ParsedArgs {
        options,
        positionals,
        warnings,
    }
}
