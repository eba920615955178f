//! `list` / `ls`

use anyhow::Context;
use std::io::Write;
use tsheep_core::{list_skills, Logger, Settings};

pub fn execute<W: Write>(logger: &mut Logger<W>) -> anyhow::Result<()> {
    let settings = Settings::from_env().context("Failed to locate the skills package")?;
    let count = list_skills(&settings, logger)?;
    tracing::debug!(count, "listed skills");
    Ok(())
}
