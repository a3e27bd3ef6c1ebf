//! Talking to the network: provider setup and contract creation

pub mod client;
pub mod deployer;
