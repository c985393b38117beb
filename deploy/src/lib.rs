//! Deploys a compiled contract artifact to an EVM JSON-RPC node.
//!
//! The artifact is loaded by [`artifact::Artifact`], configuration comes from
//! the environment through [`shared::Config`] and [`deployer::Deployer`]
//! performs the creation transaction. [`runner::execute`] ties them together
//! for the `deploy` binary.

pub mod artifact;
pub mod deployer;
pub mod error;
pub mod logging;
pub mod runner;
pub mod shared;
