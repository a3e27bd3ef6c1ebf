//! Compilation of the solidity contracts into deployable artifacts

mod solc;

pub use solc::SolcBuilder;
