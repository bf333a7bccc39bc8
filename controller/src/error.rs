//! Error types for the asset controller contract
//!
//! Variants are grouped by the kind of failure so callers can tell an
//! authorization problem from a precondition, validation or resource problem.

use common::PayloadError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::guard::DenyReason;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: signer is not the owner")]
    InvalidOwner,

    #[error("Unauthorized: signer is not the pending owner")]
    InvalidPendingOwner,

    #[error("Unauthorized: signer is not an issuer")]
    InvalidIssuer,

    #[error("Unauthorized: signer is not a redeemer")]
    InvalidRedeemer,

    #[error("Unauthorized: signer is not an operator")]
    InvalidOperator,

    // ========================================================================
    // State Precondition Errors
    // ========================================================================

    #[error("there is no owner")]
    NoOwner,

    #[error("there is no pending owner")]
    NoPendingOwner,

    #[error("provided owner is the current owner")]
    SameOwner,

    #[error("module is already paused")]
    AlreadyPaused,

    #[error("module is already unpaused")]
    AlreadyUnpaused,

    #[error("{address} is already an issuer")]
    AlreadyIssuer { address: String },

    #[error("{address} is not an issuer")]
    NotIssuer { address: String },

    #[error("{address} is already a redeemer")]
    AlreadyRedeemer { address: String },

    #[error("{address} is not a redeemer")]
    NotRedeemer { address: String },

    #[error("{address} is already an operator")]
    AlreadyOperator { address: String },

    #[error("{address} is not an operator")]
    NotOperator { address: String },

    #[error("channel {channel} is already blocked")]
    ChannelAlreadyBlocked { channel: String },

    #[error("channel {channel} is not blocked")]
    ChannelNotBlocked { channel: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid channel: {reason}")]
    InvalidChannel { reason: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("address list must not be empty")]
    EmptyAddressList,

    #[error("Invalid bridge payload: {0}")]
    Payload(#[from] PayloadError),

    // ========================================================================
    // Resource Errors
    // ========================================================================

    #[error("insufficient allowance: allowance {allowance}, requested {requested}")]
    InsufficientAllowance {
        allowance: Uint128,
        requested: Uint128,
    },

    #[error("insufficient balance: balance {balance}, requested {requested}")]
    InsufficientBalance {
        balance: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Transfer Restrictions
    // ========================================================================

    #[error(transparent)]
    TransferDenied(#[from] DenyReason),
}

impl ContractError {
    /// Wrap an address decoding failure, keeping the host's explanation.
    pub fn invalid_address(address: &str, err: StdError) -> Self {
        ContractError::InvalidAddress {
            reason: format!("{}: {}", address, err),
        }
    }
}
