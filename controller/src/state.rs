//! State definitions for the asset controller contract
//!
//! Balances and total supply live in the cw20-base storage layout and are
//! owned by [`crate::ledger`]. Ownership items are declared in
//! [`crate::ownership`]. Everything else the controller persists is here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Denom of the controlled asset
    pub denom: String,
    /// Bech32 prefix used to render channel escrow addresses
    pub bech32_prefix: String,
    /// Version string stamped into outbound bridge payloads
    pub bridge_version: String,
    /// Whether transfers are currently halted
    pub paused: bool,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:asset-controller";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page size for blocklist enumeration
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for blocklist enumeration
pub const MAX_LIMIT: u32 = 100;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Next outbound bridge nonce
pub const BRIDGE_NONCE: Item<u64> = Item::new("bridge_nonce");

// ============================================================================
// Role Registry
// ============================================================================

/// Registered issuers and their remaining mint allowance.
/// Presence (even with a zero allowance) is what makes an address an issuer.
pub const ISSUERS: Map<&Addr, Uint128> = Map::new("issuers");

/// Registered redeemers and their remaining burn allowance
pub const REDEEMERS: Map<&Addr, Uint128> = Map::new("redeemers");

/// Circuit-breaker operators allowed to pause
pub const OPERATORS: Map<&Addr, bool> = Map::new("operators");

// ============================================================================
// Transfer Restrictions
// ============================================================================

/// Addresses blocked from sending and receiving
pub const BLOCKED_ADDRESSES: Map<&Addr, bool> = Map::new("blocked_addresses");

/// Channels whose escrow address may not receive the asset
pub const BLOCKED_CHANNELS: Map<&str, bool> = Map::new("blocked_channels");
