//! Install scope and destination resolution
//!
//! A skill lands in `<base>/<root>/skills`, where `<base>` is the home
//! directory (global) or the working directory (local) and `<root>` is
//! `.claude` or `.codex`.

use std::fmt;
use std::path::PathBuf;

use crate::error::{InstallError, InstallResult};

/// Where a skill is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstallScope {
    /// User-global scope (`~/.claude/skills`)
    #[default]
    Global,
    /// Project scope (`./.claude/skills`)
    Local,
}

/// Top-level directory name under the scope base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillsRoot {
    #[default]
    Claude,
    /// Alternate root, selected with `-c/--codex`
    Codex,
}

impl SkillsRoot {
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Claude => ".claude",
            Self::Codex => ".codex",
        }
    }
}

/// Options for a single install, built once from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallOptions {
    pub scope: InstallScope,
    pub root: SkillsRoot,
    /// `--global` was given explicitly (only used for the conflict warning)
    pub global_explicit: bool,
}

impl InstallOptions {
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.scope == InstallScope::Local
    }
}

/// Source of the user's home directory
pub trait HomeProvider {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Home directory from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeProvider for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        // Try HOME first (Unix), then USERPROFILE (Windows)
        std::env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var_os("USERPROFILE").filter(|v| !v.is_empty()))
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
}

/// Fixed home directory, or none at all
#[derive(Debug, Clone, Default)]
pub struct FixedHome(pub Option<PathBuf>);

impl HomeProvider for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Computes the skills directory for a set of options
#[derive(Debug, Clone)]
pub struct PathResolver<H = SystemHome> {
    home: H,
    /// `None` reads the process working directory on demand
    cwd: Option<PathBuf>,
}

impl PathResolver<SystemHome> {
    /// Resolver over the real environment
    ///
    /// The working directory is only looked up for local installs.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            home: SystemHome,
            cwd: None,
        }
    }
}

impl<H: HomeProvider> PathResolver<H> {
    pub fn new(home: H, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home,
            cwd: Some(cwd.into()),
        }
    }

    /// Base directory for a scope
    pub fn base_dir(&self, scope: InstallScope) -> InstallResult<PathBuf> {
        match scope {
            InstallScope::Local => match &self.cwd {
                Some(cwd) => Ok(cwd.clone()),
                None => std::env::current_dir().map_err(InstallError::CurrentDir),
            },
            InstallScope::Global => self.home.home_dir().ok_or(InstallError::HomeNotFound),
        }
    }

    /// `<base>/<root>/skills`
    pub fn skills_dir(&self, options: &InstallOptions) -> InstallResult<PathBuf> {
        let base = self.base_dir(options.scope)?;
        Ok(base.join(options.root.dir_name()).join("skills"))
    }
}

impl fmt::Display for InstallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}
