//! Transfer restriction hook.
//!
//! [`evaluate`] is consulted by the ledger before every balance change of the
//! controlled asset. The checks run in a fixed order and the first match wins:
//!
//! 1. zero amounts are allowed
//! 2. deposits into the module account (redemptions) are allowed
//! 3. nothing moves while paused
//! 4. blocked senders cannot send, except the module account when issuing
//! 5. blocked recipients cannot receive, including during issuance
//! 6. blocked channel escrow accounts cannot receive
//!
//! Evaluation never writes. A storage read failure is returned as an error,
//! not folded into a denial.

use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use thiserror::Error;

use crate::escrow::{decode_bech32_address, escrow_bytes};
use crate::state::{BLOCKED_ADDRESSES, BLOCKED_CHANNELS, CONFIG};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    #[error("transfers paused")]
    Paused,

    #[error("{address} blocked from sending")]
    BlockedSender { address: String },

    #[error("{address} blocked from receiving")]
    BlockedRecipient { address: String },

    #[error("transfers blocked on channel {channel}")]
    BlockedChannel { channel: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    /// Turn a denial into an error so callers can use `?`.
    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

/// Decide whether `amount` may move from `from` to `to`.
pub fn evaluate(
    storage: &dyn Storage,
    module: &Addr,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> StdResult<Decision> {
    if amount.is_zero() {
        return Ok(Decision::Allow);
    }

    // Redemption deposits were already authorized by the redeemer allowance
    if from != module && to == module {
        return Ok(Decision::Allow);
    }

    if CONFIG.load(storage)?.paused {
        return Ok(Decision::Deny(DenyReason::Paused));
    }

    let is_issuance = from == module && to != module;
    if !is_issuance && is_blocked(storage, from)? {
        return Ok(Decision::Deny(DenyReason::BlockedSender {
            address: from.to_string(),
        }));
    }

    if is_blocked(storage, to)? {
        return Ok(Decision::Deny(DenyReason::BlockedRecipient {
            address: to.to_string(),
        }));
    }

    // Escrow accounts are plain 20-byte accounts; anything else cannot be one
    if let Ok(to_bytes) = decode_bech32_address(to.as_str()) {
        for channel in BLOCKED_CHANNELS.keys(storage, None, None, Order::Ascending) {
            let channel = channel?;
            if escrow_bytes(&channel) == to_bytes {
                return Ok(Decision::Deny(DenyReason::BlockedChannel { channel }));
            }
        }
    }

    Ok(Decision::Allow)
}

/// Checks applied to an account moving funds off-chain through the bridge.
///
/// The bridge path deposits into the module account, which [`evaluate`]
/// always allows, so the pause switch and the sender blocklist are enforced
/// here instead.
pub fn evaluate_outbound(storage: &dyn Storage, from: &Addr) -> StdResult<Decision> {
    if CONFIG.load(storage)?.paused {
        return Ok(Decision::Deny(DenyReason::Paused));
    }
    if is_blocked(storage, from)? {
        return Ok(Decision::Deny(DenyReason::BlockedSender {
            address: from.to_string(),
        }));
    }
    Ok(Decision::Allow)
}

pub fn is_blocked(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(BLOCKED_ADDRESSES.may_load(storage, address)?.unwrap_or(false))
}
