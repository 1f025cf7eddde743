//! API key loading.

use gridpull_types::GridpullError;
use std::fs;
use std::path::Path;

/// Reads the API key from a plain-text file.
///
/// The entire file contents are used with leading and trailing whitespace
/// stripped; no format validation is applied.
///
/// # Errors
///
/// Returns [`GridpullError::Credential`] if the file is missing or
/// unreadable.
pub fn read_api_key(path: &Path) -> Result<String, GridpullError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GridpullError::Credential(format!("{}: {e}", path.display())))?;
    Ok(contents.trim().to_string())
}
