//! Common - Shared Types and Utilities for the Asset Controller Contracts
//!
//! This package holds storage-free code shared between the controller
//! contract and off-chain tooling, most importantly the fixed-width
//! cross-chain bridge payload codec.

pub mod bridge_payload;

pub use bridge_payload::{validate_version, BridgePayload, PayloadError};
