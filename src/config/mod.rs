//! JSON configuration for the demo binaries.
//!
//! Each loader reads the file given on the command line and reports failures
//! as plain strings, which the binaries print before exiting.

pub mod sweep;
pub mod synth;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
