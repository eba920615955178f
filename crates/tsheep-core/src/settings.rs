//! Package settings
//!
//! The package root is where the skill directories and `skills.json` live.

use std::env;
use std::path::{Path, PathBuf};

/// Name used in usage text and install hints
pub const PACKAGE_NAME: &str = "tsheep-skills";

/// Overrides the package root when set
pub const PACKAGE_ROOT_ENV: &str = "TSHEEP_SKILLS_ROOT";

/// Manifest file name inside the package root
pub const MANIFEST_FILE: &str = "skills.json";

/// Skills shipped with the package, shown when a lookup fails
pub const KNOWN_SKILLS: &[&str] = &["ab-experiment-cleanup"];

/// Where the package lives and what it is called
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub package_root: PathBuf,
    pub package_name: String,
}

impl Settings {
    pub fn new(package_root: impl Into<PathBuf>) -> Self {
        Self {
            package_root: package_root.into(),
            package_name: PACKAGE_NAME.to_string(),
        }
    }

    /// Settings from `TSHEEP_SKILLS_ROOT`, falling back to the directory of
    /// the running executable
    pub fn from_env() -> std::io::Result<Self> {
        if let Some(root) = env::var_os(PACKAGE_ROOT_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(root));
        }

        let exe = env::current_exe()?;
        let root = exe.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Ok(Self::new(root))
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.package_root.join(MANIFEST_FILE)
    }

    #[must_use]
    pub fn skill_source(&self, name: &str) -> PathBuf {
        self.package_root.join(name)
    }

    /// `npx <package> add <skill>`
    #[must_use]
    pub fn install_hint(&self, skill: &str) -> String {
        format!("npx {} add {skill}", self.package_name)
    }
}
