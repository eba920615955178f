//! Skill installation
//!
//! Installing copies `<package root>/<skill>` to `<skills dir>/<skill>`,
//! replacing any earlier copy wholesale.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::copy::copy_dir_all;
use crate::error::{InstallError, InstallResult};
use crate::log::Logger;
use crate::scope::{HomeProvider, InstallOptions, PathResolver, SystemHome};
use crate::settings::{Settings, KNOWN_SKILLS};
use crate::util::validate_skill_name;

/// Outcome of a successful install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub skill: String,
    pub destination: PathBuf,
    pub files_copied: usize,
    /// An earlier copy was removed first
    pub replaced: bool,
}

/// Installs skills from a package into a resolved skills directory
pub struct Installer<H = SystemHome> {
    settings: Settings,
    resolver: PathResolver<H>,
}

impl<H: HomeProvider> Installer<H> {
    pub fn new(settings: Settings, resolver: PathResolver<H>) -> Self {
        Self { settings, resolver }
    }

    /// Install `name` according to `options`
    ///
    /// The source is checked before anything is written, so a missing skill
    /// leaves the filesystem untouched.
    pub fn install<W: Write>(
        &self,
        name: &str,
        options: &InstallOptions,
        logger: &mut Logger<W>,
    ) -> InstallResult<InstallReport> {
        validate_skill_name(name)?;

        let source = self.settings.skill_source(name);
        if !source.is_dir() {
            return Err(InstallError::SkillNotFound {
                name: name.to_string(),
                available: KNOWN_SKILLS.iter().map(|s| (*s).to_string()).collect(),
            });
        }

        let skills_dir = self.resolver.skills_dir(options)?;
        debug!(scope = %options.scope, dir = %skills_dir.display(), "resolved skills directory");
        if !skills_dir.exists() {
            fs::create_dir_all(&skills_dir).map_err(|e| InstallError::io(&skills_dir, e))?;
            logger.success(format!("✓ Created skills directory: {}", skills_dir.display()));
        }

        // Remove-then-copy: a failed copy leaves the skill partially installed.
        let destination = skills_dir.join(name);
        let replaced = destination.exists();
        if replaced {
            logger.warn(format!("⚠ Skill \"{name}\" already exists. Updating..."));
            let removed = if destination.is_dir() {
                fs::remove_dir_all(&destination)
            } else {
                fs::remove_file(&destination)
            };
            removed.map_err(|e| InstallError::io(&destination, e))?;
        }

        logger.info(format!("Installing skill: {name}..."));
        let stats = copy_dir_all(&source, &destination)?;
        info!(skill = name, files = stats.files, dirs = stats.dirs, "skill installed");

        logger.success(format!(
            "✓ Successfully installed \"{name}\" to {}",
            destination.display()
        ));
        logger.hint(format!("\nYou can now use it with: /{name}"));

        Ok(InstallReport {
            skill: name.to_string(),
            destination,
            files_copied: stats.files,
            replaced,
        })
    }
}
