//! Recording of the deployed addresses and transactions

use std::{fmt::LowerHex, fs, path::Path};

use json::JsonValue;

use crate::{errors::ScriptError, utils::read_json_file};

/// Where a value is stored in the output file
pub enum OutputKeys {
    /// Key related to a deployment
    Deployment {
        /// Contract key
        key: &'static str,
    },
    /// Key related to a transaction sent for a contract
    Tx {
        /// Contract key
        key: &'static str,
        /// Name of the transaction
        tx_key: String,
    },
}

/// Read a recorded value
pub fn read_output_file(file_path: &Path, key: OutputKeys) -> Result<String, ScriptError> {
    if !file_path.exists() {
        return Err(ScriptError::JsonOutputError(String::from(
            "Deployed addresses file not found",
        )));
    }

    let parsed_json = read_json_file(file_path)?;
    let value = match key {
        OutputKeys::Deployment { key } => &parsed_json[key]["deploy"],
        OutputKeys::Tx { key, ref tx_key } => &parsed_json[key]["txs"][tx_key.as_str()],
    };

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ScriptError::JsonOutputError(String::from("Key not found in output file")))
}

/// Writes the given value under the key, keeping the rest of the file
pub fn write_output_file<T: LowerHex>(
    file_path: &Path,
    key: OutputKeys,
    value: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !file_path.exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    let mut parsed_json = read_json_file(file_path)?;

    match key {
        OutputKeys::Deployment { key } => {
            parsed_json[key]["deploy"] = JsonValue::String(format!("{value:#x}"))
        }
        OutputKeys::Tx { key, tx_key } => {
            parsed_json[key]["txs"][tx_key] = JsonValue::String(format!("{value:#x}"))
        }
    };

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}
