use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{bail, Context, Result};

use crate::cli::{MINICOVER_BIN, MINICOVER_PATH_ENV};

#[inline]
fn is_valid_tool_binary(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Retrieves the path to the minicover binary
///
/// # Returns
/// * `Result<PathBuf>` - Path to the minicover binary
///
/// # Errors
/// * If an explicit path points to no file
/// * If no binary is found via the environment or `PATH`
pub fn find_tool_binary(custom_path: Option<&Path>) -> Result<PathBuf> {
    // An explicit path that resolves to nothing is a configuration error
    if let Some(path) = custom_path {
        if is_valid_tool_binary(path) {
            return Ok(path.to_path_buf());
        }
        bail!("No minicover binary at {}", path.display());
    }

    // Check MINICOVER_PATH environment variable
    if let Some(path) = std::env::var(MINICOVER_PATH_ENV)
        .map(PathBuf::from)
        .ok()
        .filter(|p: &PathBuf| is_valid_tool_binary(p))
    {
        return Ok(path);
    }

    // Try to find using 'which'
    let path = Command::new("which")
        .arg(MINICOVER_BIN)
        .output()
        .context("Failed to execute 'which'")?;

    if path.status.success() {
        let path_str = String::from_utf8_lossy(&path.stdout).trim().to_string();
        let path_buf = PathBuf::from(path_str);

        if is_valid_tool_binary(&path_buf) {
            return Ok(path_buf);
        }
    }

    bail!("Could not find minicover binary")
}
