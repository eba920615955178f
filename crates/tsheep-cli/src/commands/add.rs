//! `add` / `install`

use anyhow::Context;
use std::io::Write;
use tsheep_core::{InstallOptions, Installer, Logger, PathResolver, Settings};

/// Install one skill from the package
pub fn execute<W: Write>(
    name: &str,
    options: &InstallOptions,
    logger: &mut Logger<W>,
) -> anyhow::Result<()> {
    let settings = Settings::from_env().context("Failed to locate the skills package")?;
    let resolver = PathResolver::from_env();

    Installer::new(settings, resolver).install(name, options, logger)?;
    Ok(())
}
