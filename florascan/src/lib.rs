//! State layer for the Flora block explorer. Normalizes heterogeneous chain
//! descriptors (locally bundled files and the remote chain directory) into one
//! [`ChainConfig`](chain::config::ChainConfig) shape, and tracks bank supply
//! and IBC denom traces for the active chain.
pub use error::ChainRegistryError;

pub mod bank;
pub mod chain;
pub mod error;
pub mod registry;
pub mod rest;
