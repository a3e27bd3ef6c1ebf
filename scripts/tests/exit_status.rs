//! Exit status and console output of the compiled binary

use std::process::{Command, Output};

use tempdir::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_cryptodevs-scripts");

/// First anvil dev account
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const NFT_CONTRACT: &str = "0x8464135c8F25Da09e49BC8782676a84730C318bC";

/// Runs the binary from an empty dir, away from any `.env` or inherited config
fn run_scripts(args: &[&str]) -> Output {
    let tmp = TempDir::new("exit-status").unwrap();

    Command::new(BIN)
        .current_dir(tmp.path())
        .env_remove("QUICKNODE_HTTP_URL")
        .env_remove("PRIVATE_KEY")
        .env_remove("CRYPTODEVS_NFT_CONTRACT_ADDRESS")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn unreachable_rpc_exits_with_one() {
    let output = run_scripts(&[
        "--goerli-url",
        "http://127.0.0.1:1",
        "--priv-key",
        DEV_KEY,
        "deploy",
        "--nft-contract",
        NFT_CONTRACT,
        "--artifacts",
        "/nonexistent",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: error during client init"), "{stderr}");
}

#[test]
fn missing_nft_address_exits_with_one() {
    let output = run_scripts(&[
        "--goerli-url",
        "http://127.0.0.1:1",
        "--priv-key",
        DEV_KEY,
        "deploy",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--nft-contract"), "{stderr}");
}

#[test]
fn missing_goerli_url_exits_with_one() {
    let output = run_scripts(&[
        "--priv-key",
        DEV_KEY,
        "deploy",
        "--nft-contract",
        NFT_CONTRACT,
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "{stderr}");
}

#[test]
fn help_is_not_a_failure() {
    let output = run_scripts(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("deploy"));
}
