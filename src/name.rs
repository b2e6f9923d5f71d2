use std::path::Path;

use regex_lite::Regex;

use crate::error::{Result, ScaffoldError};

/// Validate a marketplace/plugin name.
///
/// Accepts `^[A-Za-z0-9][A-Za-z0-9._-]*$` with no `..` and no trailing `.`.
pub fn validate_name(name: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex");

    if !re.is_match(name) || name.contains("..") || name.ends_with('.') {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Fails if `parent/name` already exists (file or directory).
pub fn check_destination_free(parent: &Path, name: &str) -> Result<()> {
    let destination = parent.join(name);
    // Any entry counts, including a symlink whose target is gone.
    if std::fs::symlink_metadata(&destination).is_ok() {
        return Err(ScaffoldError::DirectoryExists { path: destination });
    }
    Ok(())
}
