//! CLI command handlers
//!
//! `run` is the single dispatch point: it classifies the arguments, picks a
//! command and hands errors back to `main` for reporting.

pub mod add;
pub mod help;
pub mod list;

use std::io::Write;
use tsheep_core::settings::PACKAGE_NAME;
use tsheep_core::{parse_args, Command, InstallError, Logger};

/// Run one invocation
pub fn run<W: Write>(args: Vec<String>, logger: &mut Logger<W>) -> anyhow::Result<()> {
    logger.hint("\n🐑 TSheep Skills Installer\n");

    let parsed = parse_args(args);
    for warning in &parsed.warnings {
        logger.warn(warning);
    }
    tracing::debug!(options = ?parsed.options, positionals = ?parsed.positionals, "parsed arguments");

    match Command::from_positionals(&parsed.positionals) {
        Command::Help => {
            help::print_usage(logger);
            Ok(())
        }
        Command::Add(None) => Err(InstallError::MissingSkillName.into()),
        Command::Add(Some(name)) => add::execute(&name, &parsed.options, logger),
        Command::List => list::execute(logger),
        Command::Unknown(command) => Err(InstallError::UnknownCommand(command).into()),
    }
}

/// Log a failed invocation and return its exit status
pub fn report_error<W: Write>(err: &anyhow::Error, logger: &mut Logger<W>) -> u8 {
    let Some(install_err) = err.downcast_ref::<InstallError>() else {
        logger.error(format!("✗ {err:#}"));
        return 1;
    };

    logger.error(format!("✗ {install_err}"));
    match install_err {
        InstallError::MissingSkillName => {
            logger.warn(format!("Usage: npx {PACKAGE_NAME} add <skill-name>"));
        }
        InstallError::UnknownCommand(_) => {
            logger.warn(format!(
                "Run \"npx {PACKAGE_NAME} help\" for usage information"
            ));
        }
        InstallError::SkillNotFound { available, .. } => {
            logger.warn(format!("Available skills: {}", available.join(", ")));
        }
        _ => {}
    }
    tracing::debug!(code = install_err.code(), "command failed");

    install_err.exit_code()
}
