//! TSheep Core - Skill bundle installation
//!
//! This crate resolves skill destinations, copies skill directories and
//! reads the package manifest. The `tsheep-skills` binary drives it.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod args;
pub mod command;
pub mod copy;
pub mod error;
pub mod install;
pub mod log;
pub mod manifest;
pub mod scope;
pub mod settings;
pub mod util;

pub use args::{parse_args, ParsedArgs};
pub use command::Command;
pub use error::{InstallError, InstallResult};
pub use install::{InstallReport, Installer};
pub use log::{Logger, Tone};
pub use manifest::{list_skills, Manifest, SkillEntry};
pub use scope::{
    FixedHome, HomeProvider, InstallOptions, InstallScope, PathResolver, SkillsRoot, SystemHome,
};
pub use settings::Settings;
