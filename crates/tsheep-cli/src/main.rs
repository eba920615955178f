//! TSheep Skills - install skill bundles into Claude or Codex skill folders
//!
//! Provides `tsheep-skills add`, `tsheep-skills list` and `tsheep-skills help`.

mod commands;

use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tsheep_core::Logger;

/// Filter for diagnostic output on stderr
const LOG_ENV: &str = "TSHEEP_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut logger = Logger::stdout();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match commands::run(args, &mut logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = commands::report_error(&e, &mut logger);
            ExitCode::from(code)
        }
    }
}
