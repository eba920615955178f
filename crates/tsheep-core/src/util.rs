//! Utility functions for skill names

use crate::error::{InstallError, InstallResult};

/// Validate a skill name for use as a single path component
///
/// Names must not be `.` or `..`, and must not contain path separators or
/// NUL bytes.
///
/// # Errors
/// Returns `InvalidSkillName` if the name is unsafe to join onto a directory
pub fn validate_skill_name(name: &str) -> InstallResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("name contains a path separator")
    } else if name == "." || name == ".." {
        Some("name refers to a directory itself")
    } else if name.contains('\0') {
        Some("name contains a null byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(InstallError::InvalidSkillName(format!("{name} ({reason})"))),
        None => Ok(()),
    }
}
