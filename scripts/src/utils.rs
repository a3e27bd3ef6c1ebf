//! Utilities for the deploy scripts.

use std::{fs, path::Path, process::Command};

use json::JsonValue;
use tracing::debug;

use crate::errors::ScriptError;

/// Executes a command, returning its stdout or an error with its stderr if it fails
pub fn command_output_or(mut cmd: Command, err_msg: &str) -> Result<String, ScriptError> {
    debug!("Running command: {:?}", cmd);
    let output = cmd
        .output()
        .map_err(|e| ScriptError::ContractCompilation(format!("{}: {}", err_msg, e)))?;

    if !output.status.success() {
        return Err(ScriptError::ContractCompilation(format!(
            "{}: {}",
            err_msg,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| ScriptError::ContractCompilation(format!("{}: {}", err_msg, e)))
}

/// Parses the JSON file at the given path
pub fn read_json_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let file_contents = fs::read_to_string(file_path)
        .map_err(|e| ScriptError::JsonOutputError(format!("{}: {}", file_path.display(), e)))?;

    json::parse(&file_contents)
        .map_err(|e| ScriptError::JsonOutputError(format!("{}: {}", file_path.display(), e)))
}
