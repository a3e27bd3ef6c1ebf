//! Loading of the compiled contract artifacts

use std::{fs, path::PathBuf};

use alloy::{hex, primitives::Bytes};

use crate::{errors::ScriptError, utils::read_json_file};

/// A compiled contract, ready to be deployed
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Name of the contract
    pub name: String,
    /// Creation bytecode
    pub bytecode: Bytes,
}

/// Directory of compiled artifacts, laid out as `<source>.sol/<Name>.json`
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Directory searched for artifacts
    root: PathBuf,
}

impl ArtifactStore {
    /// Store rooted at `root`, nothing is read until [`Self::load`]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load the artifact of the contract `name`
    pub fn load(&self, name: &str) -> Result<ContractArtifact, ScriptError> {
        let path = self.find(name)?.ok_or_else(|| {
            ScriptError::Artifact(format!(
                "no artifact for {} under {}, compile the contracts first",
                name,
                self.root.display()
            ))
        })?;

        let parsed = read_json_file(&path).map_err(|e| ScriptError::Artifact(e.to_string()))?;
        let bytecode = parsed["bytecode"].as_str().ok_or_else(|| {
            ScriptError::Artifact(format!("{} has no bytecode field", path.display()))
        })?;
        let bytecode = hex::decode(bytecode)
            .map_err(|e| ScriptError::Artifact(format!("{}: {}", path.display(), e)))?;

        // Interfaces and abstract contracts compile to nothing
        if bytecode.is_empty() {
            return Err(ScriptError::Artifact(format!(
                "{} has empty bytecode, it can't be deployed",
                name
            )));
        }

        Ok(ContractArtifact {
            name: name.to_string(),
            bytecode: Bytes::from(bytecode),
        })
    }

    /// Walk the store looking for `<name>.json`
    fn find(&self, name: &str) -> Result<Option<PathBuf>, ScriptError> {
        let file_name = format!("{name}.json");
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir)
                .map_err(|e| ScriptError::Artifact(format!("{}: {}", dir.display(), e)))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| ScriptError::Artifact(e.to_string()))?
                    .path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.file_name().is_some_and(|f| f == file_name.as_str()) {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }
}
