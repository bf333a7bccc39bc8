//! Message types for the asset controller contract
//!
//! This module defines all messages for instantiation, execution, and queries.
//! Balance and token info queries answer with the standard cw20 response shapes.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};
use cw20::Cw20Coin;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Module owner (role management, channel gate, unpause)
    pub owner: String,
    /// Blocklist owner. `None` leaves the blocklist without an owner.
    pub blocklist_owner: Option<String>,
    /// Denom identifier of the controlled asset
    pub denom: String,
    /// Token name reported by the cw20 token info query
    pub name: String,
    /// Token symbol reported by the cw20 token info query
    pub symbol: String,
    pub decimals: u8,
    /// Bech32 prefix used to derive channel escrow addresses
    pub bech32_prefix: String,
    /// Version stamped into outbound bridge payloads (at most 32 bytes)
    pub bridge_version: String,
    /// Initial circuit-breaker operators
    pub operators: Vec<String>,
    /// Genesis balances, credited without passing the transfer guard
    pub initial_balances: Vec<Cw20Coin>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Issuance
    // ========================================================================
    /// Mint new supply to `to`, spending the signer's issuer allowance
    Mint { to: String, amount: Uint128 },

    /// Burn funds held by `from`, spending the signer's redeemer allowance
    Burn { from: String, amount: Uint128 },

    // ========================================================================
    // Holder Operations
    // ========================================================================
    /// Send funds to another account
    Transfer { recipient: String, amount: Uint128 },

    /// Burn the signer's funds and emit a bridge payload for `chain_id`
    BridgeOut { chain_id: u64, amount: Uint128 },

    // ========================================================================
    // Circuit Breaker
    // ========================================================================
    /// Halt transfers (operators only)
    Pause {},

    /// Resume transfers (owner only)
    Unpause {},

    // ========================================================================
    // Ownership
    // ========================================================================
    TransferOwnership { new_owner: String },
    AcceptOwnership {},
    TransferBlocklistOwnership { new_owner: String },
    AcceptBlocklistOwnership {},

    // ========================================================================
    // Role Management (owner only)
    // ========================================================================
    AddIssuer { address: String, allowance: Uint128 },
    RemoveIssuer { address: String },
    SetIssuerAllowance { address: String, allowance: Uint128 },
    AddRedeemer { address: String, allowance: Uint128 },
    RemoveRedeemer { address: String },
    SetRedeemerAllowance { address: String, allowance: Uint128 },
    AddOperator { address: String },
    RemoveOperator { address: String },

    // ========================================================================
    // Transfer Restrictions
    // ========================================================================
    /// Block transfers into the escrow account of `channel` (module owner)
    AddBlockedChannel { channel: String },
    RemoveBlockedChannel { channel: String },

    /// Block a batch of addresses (blocklist owner)
    AddToBlocklist { addresses: Vec<String> },
    /// Unblock a batch of addresses (blocklist owner)
    RemoveFromBlocklist { addresses: Vec<String> },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Core Queries
    // ========================================================================
    /// Returns the denom of the controlled asset
    #[returns(DenomResponse)]
    Denom {},

    #[returns(PausedResponse)]
    Paused {},

    /// Returns the module owner and any pending owner
    #[returns(OwnershipResponse)]
    Owner {},

    /// Returns the blocklist owner and any pending owner
    #[returns(OwnershipResponse)]
    BlocklistOwner {},

    // ========================================================================
    // Roles
    // ========================================================================
    #[returns(AllowancesResponse)]
    Issuers {},

    /// Returns a single issuer entry, `None` when not registered
    #[returns(AllowanceResponse)]
    Issuer { address: String },

    #[returns(AllowancesResponse)]
    Redeemers {},

    #[returns(AllowanceResponse)]
    Redeemer { address: String },

    #[returns(OperatorsResponse)]
    Operators {},

    // ========================================================================
    // Transfer Restrictions
    // ========================================================================
    #[returns(BlockedChannelsResponse)]
    BlockedChannels {},

    /// Returns blocked addresses, paginated
    #[returns(BlockedAddressesResponse)]
    BlockedAddresses {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(IsBlockedResponse)]
    IsBlocked { address: String },

    /// Dry-run the transfer guard for a hypothetical transfer
    #[returns(SimulateTransferResponse)]
    SimulateTransfer {
        from: String,
        to: String,
        amount: Uint128,
    },

    /// Returns the escrow address derived for `channel`
    #[returns(EscrowAddressResponse)]
    EscrowAddress { channel: String },

    // ========================================================================
    // Ledger
    // ========================================================================
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    // ========================================================================
    // Bridge
    // ========================================================================
    /// Returns the nonce the next outbound bridge payload will carry
    #[returns(BridgeNonceResponse)]
    BridgeNonce {},

    /// Decode a 160-byte bridge payload
    #[returns(BridgePayloadResponse)]
    DecodeBridgePayload { payload: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct DenomResponse {
    pub denom: String,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Option<Addr>,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct AllowanceEntry {
    pub address: Addr,
    pub allowance: Uint128,
}

#[cw_serde]
pub struct AllowancesResponse {
    pub entries: Vec<AllowanceEntry>,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub address: Addr,
    /// `None` when the address does not hold the role
    pub allowance: Option<Uint128>,
}

#[cw_serde]
pub struct OperatorsResponse {
    pub operators: Vec<Addr>,
}

#[cw_serde]
pub struct BlockedChannelsResponse {
    pub channels: Vec<String>,
}

#[cw_serde]
pub struct BlockedAddressesResponse {
    pub addresses: Vec<Addr>,
}

#[cw_serde]
pub struct IsBlockedResponse {
    pub address: Addr,
    pub blocked: bool,
}

#[cw_serde]
pub struct SimulateTransferResponse {
    pub allowed: bool,
    /// Denial message when `allowed` is false
    pub reason: Option<String>,
}

#[cw_serde]
pub struct EscrowAddressResponse {
    pub channel: String,
    pub address: Addr,
}

#[cw_serde]
pub struct BridgeNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct BridgePayloadResponse {
    pub version: String,
    pub chain_id: u64,
    /// Sender as 20 raw bytes
    pub sender: Binary,
    pub amount: Uint256,
    pub nonce: u64,
}
