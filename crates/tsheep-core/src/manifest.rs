//! Package manifest (`skills.json`) and skill listing

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{InstallError, InstallResult};
use crate::log::Logger;
use crate::settings::Settings;

/// One entry of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub description: String,
}

/// Listing of the skills shipped in the package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub skills: Vec<SkillEntry>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> InstallResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InstallError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => InstallError::io(path, e),
        })?;

        let manifest = Self::parse(path, &content)?;
        debug!(path = %path.display(), skills = manifest.skills.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Parse manifest JSON; `path` is only used in the error
    pub fn parse(path: &Path, content: &str) -> InstallResult<Self> {
        serde_json::from_str(content).map_err(|e| InstallError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Print every skill in the package manifest
///
/// Returns the number of skills listed.
pub fn list_skills<W: Write>(settings: &Settings, logger: &mut Logger<W>) -> InstallResult<usize> {
    let manifest = Manifest::load(&settings.manifest_path())?;

    logger.info("Available skills:");
    for skill in &manifest.skills {
        logger.success(format!("\n  {}", skill.name));
        logger.plain(format!("    {}", skill.description));
        logger.hint(format!("    Install: {}", settings.install_hint(&skill.name)));
    }

    Ok(manifest.skills.len())
}
