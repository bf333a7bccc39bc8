//! Channel escrow addresses and bech32 helpers
//!
//! Every ICS-20 channel custodies outbound funds in a deterministic escrow
//! account. Blocking a channel means refusing transfers into that account,
//! so the controller needs to derive it without asking the chain.
//!
//! ## Derivation
//!
//! ```text
//! sha256("ics20-1" || 0x00 || "transfer/" || channel)[0..20]
//! ```
//!
//! rendered as bech32 with the chain's account prefix. The rendering is for
//! display only; the transfer guard matches escrow accounts by raw bytes.

use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::{Addr, StdError, StdResult};
use sha2::{Digest, Sha256};

use crate::error::ContractError;

/// ICS-20 application version used as the escrow preimage domain
pub const ICS20_VERSION: &str = "ics20-1";

/// Port the transfer application is bound to
pub const TRANSFER_PORT: &str = "transfer";

/// Longest channel identifier accepted (IBC host identifier limit)
pub const MAX_CHANNEL_LEN: usize = 64;

/// Check that a channel identifier can be embedded in the escrow preimage.
pub fn validate_channel(channel: &str) -> Result<(), ContractError> {
    if channel.is_empty() {
        return Err(ContractError::InvalidChannel {
            reason: "channel must not be empty".to_string(),
        });
    }
    if channel.len() > MAX_CHANNEL_LEN {
        return Err(ContractError::InvalidChannel {
            reason: format!("channel longer than {} characters", MAX_CHANNEL_LEN),
        });
    }
    if !channel.is_ascii() || channel.contains('/') {
        return Err(ContractError::InvalidChannel {
            reason: format!("{} contains invalid characters", channel),
        });
    }
    Ok(())
}

/// Raw 20-byte escrow account for `channel` on the transfer port
pub fn escrow_bytes(channel: &str) -> [u8; 20] {
    let mut hasher = Sha256::new();
    hasher.update(ICS20_VERSION.as_bytes());
    hasher.update([0u8]);
    hasher.update(TRANSFER_PORT.as_bytes());
    hasher.update(b"/");
    hasher.update(channel.as_bytes());
    let digest = hasher.finalize();

    let mut result = [0u8; 20];
    result.copy_from_slice(&digest[..20]);
    result
}

/// Escrow address for `channel`, rendered with `hrp`
pub fn escrow_address(hrp: &str, channel: &str) -> StdResult<Addr> {
    let encoded = encode_bech32_address(&escrow_bytes(channel), hrp)?;
    Ok(Addr::unchecked(encoded))
}

// ============================================================================
// Bech32
// ============================================================================

/// Decode a bech32 account address to its raw 20 bytes.
///
/// The checksum is verified. Any prefix is accepted: accounts are compared by
/// their bytes, never by how they are rendered.
pub(crate) fn decode_bech32_address(addr: &str) -> StdResult<[u8; 20]> {
    let (_hrp, data, variant) = bech32::decode(addr)
        .map_err(|e| StdError::generic_err(format!("Invalid bech32 address: {}", e)))?;
    if variant != Variant::Bech32 {
        return Err(StdError::generic_err("Invalid bech32 variant: expected bech32"));
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| StdError::generic_err(format!("Invalid base32 data: {}", e)))?;

    bytes.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        ))
    })
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    // Addresses are stored normalized, so an upper-case rendering would never match
    if hrp.bytes().any(|c| c.is_ascii_uppercase()) {
        return Err(StdError::generic_err(format!(
            "Invalid bech32 prefix: {:?}",
            hrp
        )));
    }
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| StdError::generic_err(format!("Failed to encode bech32: {}", e)))
}
