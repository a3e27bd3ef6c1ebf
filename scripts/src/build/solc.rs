//! Solidity compilation with a pinned solc

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use json::JsonValue;
use tracing::info;

use crate::{constants::DEFAULT_LIBRARIES_DIR, errors::ScriptError, utils::command_output_or};

/// Compiles the contracts with a pinned `solc`, writing one artifact per contract
pub struct SolcBuilder {
    /// The solc binary to invoke
    pub solc: PathBuf,
    /// Directory holding the `.sol` sources
    pub contracts_dir: PathBuf,
    /// Directory receiving the artifacts
    pub artifacts_dir: PathBuf,
    /// Installed packages, each top level entry is remapped for imports
    pub libraries_dir: PathBuf,
    /// Required compiler version
    pub version: String,
}

impl SolcBuilder {
    /// Builder invoking `solc` from the `PATH`
    pub fn new(
        contracts_dir: impl Into<PathBuf>,
        artifacts_dir: impl Into<PathBuf>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            solc: PathBuf::from("solc"),
            contracts_dir: contracts_dir.into(),
            artifacts_dir: artifacts_dir.into(),
            libraries_dir: PathBuf::from(DEFAULT_LIBRARIES_DIR),
            version: version.into(),
        }
    }

    /// Full build of every source, returning the written artifact paths
    pub fn build(&self) -> Result<Vec<PathBuf>, ScriptError> {
        self.check_version()?;

        let sources = self.sources()?;
        if sources.is_empty() {
            return Err(ScriptError::ContractCompilation(format!(
                "no solidity sources in {}",
                self.contracts_dir.display()
            )));
        }
        info!("Compiling {} sources with solc {}", sources.len(), self.version);

        let mut build_cmd = Command::new(&self.solc);
        build_cmd.args(["--combined-json", "abi,bin", "--optimize", "--base-path", "."]);
        // solc 0.8.4 has no include path, package imports go through remappings
        let remappings = self.remappings()?;
        if !remappings.is_empty() {
            build_cmd.arg("--allow-paths").arg(&self.libraries_dir);
            build_cmd.args(&remappings);
        }
        build_cmd.args(&sources);
        let output = command_output_or(build_cmd, "Failed to compile contracts")?;

        self.write_artifacts(&output)
    }

    /// Make sure the installed solc is the pinned one
    pub fn check_version(&self) -> Result<(), ScriptError> {
        let mut version_cmd = Command::new(&self.solc);
        version_cmd.arg("--version");
        let output = command_output_or(version_cmd, "Failed to run solc")?;

        let installed = parse_solc_version(&output).ok_or_else(|| {
            ScriptError::ContractCompilation(String::from("Could not read solc version"))
        })?;
        if installed != self.version {
            return Err(ScriptError::ContractCompilation(format!(
                "solc {} is installed but contracts are pinned to {}",
                installed, self.version
            )));
        }

        Ok(())
    }

    /// Every `.sol` file under the contracts dir, sorted for a stable build
    fn sources(&self) -> Result<Vec<PathBuf>, ScriptError> {
        let mut sources = Vec::new();
        let mut pending = vec![self.contracts_dir.clone()];
        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| {
                ScriptError::ContractCompilation(format!("{}: {}", dir.display(), e))
            })?;
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "sol") {
                    sources.push(path);
                }
            }
        }
        sources.sort();

        Ok(sources)
    }

    /// `<package>/=<libraries>/<package>/` for every installed package, none without a libraries dir
    fn remappings(&self) -> Result<Vec<String>, ScriptError> {
        if !self.libraries_dir.is_dir() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.libraries_dir).map_err(|e| {
            ScriptError::ContractCompilation(format!("{}: {}", self.libraries_dir.display(), e))
        })?;
        let mut remappings = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let package = entry.file_name().to_string_lossy().into_owned();
                // .bin and friends are npm bookkeeping
                (!package.starts_with('.')).then(|| {
                    format!(
                        "{package}/={}/",
                        self.libraries_dir.join(&package).display()
                    )
                })
            })
            .collect::<Vec<_>>();
        remappings.sort();

        Ok(remappings)
    }

    /// Split the combined json output into per contract artifacts
    fn write_artifacts(&self, combined_json: &str) -> Result<Vec<PathBuf>, ScriptError> {
        let parsed = json::parse(combined_json)
            .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?;

        let mut written = Vec::new();
        for (id, contract) in parsed["contracts"].entries() {
            let (source, name) = id.rsplit_once(':').ok_or_else(|| {
                ScriptError::ContractCompilation(format!("unexpected contract id {}", id))
            })?;

            // Older solc versions emit the abi as a string
            let abi = match &contract["abi"] {
                JsonValue::String(_) | JsonValue::Short(_) => contract["abi"]
                    .as_str()
                    .map(json::parse)
                    .transpose()
                    .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?
                    .unwrap_or(JsonValue::Null),
                abi => abi.clone(),
            };
            let bin = contract["bin"].as_str().unwrap_or_default();

            let mut artifact = JsonValue::new_object();
            artifact["contractName"] = name.into();
            artifact["sourceName"] = source.into();
            artifact["abi"] = abi;
            artifact["bytecode"] = format!("0x{bin}").into();

            let dir = self.artifacts_dir.join(artifact_subdir(source));
            fs::create_dir_all(&dir)
                .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?;
            let path = dir.join(format!("{name}.json"));
            fs::write(&path, json::stringify_pretty(artifact, 2))
                .map_err(|e| ScriptError::ContractCompilation(e.to_string()))?;

            info!("Wrote artifact {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

/// Strip root and parent components so artifacts stay inside the artifacts dir
fn artifact_subdir(source: &str) -> PathBuf {
    Path::new(source)
        .components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Extract `x.y.z` from the `solc --version` banner
fn parse_solc_version(output: &str) -> Option<String> {
    let line = output.lines().find(|line| line.starts_with("Version:"))?;
    let version = line.trim_start_matches("Version:").trim();
    let end = version
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(version.len());

    (end > 0).then(|| version[..end].to_string())
}
