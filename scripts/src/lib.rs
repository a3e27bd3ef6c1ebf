//! Scripts for compiling and deploying the CryptoDevs DAO and its NFT marketplace.

#![cfg_attr(not(test), deny(clippy::missing_docs_in_private_items))]

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod utils;

/// Our build utils
pub mod build;

/// Our deploy utils
pub mod deploy;

/// Our output utils
pub mod output_writer;

/// Our network utils
pub mod tx;
