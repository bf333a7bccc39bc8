//! Query handlers for the asset controller contract.
//!
//! Every query is a read-only snapshot of contract state.

use common::BridgePayload;
use cosmwasm_std::{Addr, Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::escrow::{escrow_address, validate_channel};
use crate::guard::{self, Decision};
use crate::msg::{
    AllowanceEntry, AllowanceResponse, AllowancesResponse, BlockedAddressesResponse,
    BlockedChannelsResponse, BridgeNonceResponse, BridgePayloadResponse, DenomResponse,
    EscrowAddressResponse, IsBlockedResponse, OperatorsResponse, OwnershipResponse,
    PausedResponse, SimulateTransferResponse,
};
use crate::ownership::Ownership;
use crate::roles::{self, AllowanceRole};
use crate::state::{
    BLOCKED_ADDRESSES, BLOCKED_CHANNELS, BRIDGE_NONCE, CONFIG, DEFAULT_LIMIT, MAX_LIMIT,
};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_denom(deps: Deps) -> StdResult<DenomResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(DenomResponse {
        denom: config.denom,
    })
}

pub fn query_paused(deps: Deps) -> StdResult<PausedResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PausedResponse {
        paused: config.paused,
    })
}

pub fn query_ownership(deps: Deps, ownership: &Ownership) -> StdResult<OwnershipResponse> {
    Ok(OwnershipResponse {
        owner: ownership.owner(deps.storage)?,
        pending_owner: ownership.pending_owner(deps.storage)?,
    })
}

// ============================================================================
// Role Queries
// ============================================================================

pub fn query_allowances(deps: Deps, role: AllowanceRole) -> StdResult<AllowancesResponse> {
    let entries = role
        .list(deps.storage)?
        .into_iter()
        .map(|(address, allowance)| AllowanceEntry { address, allowance })
        .collect();
    Ok(AllowancesResponse { entries })
}

pub fn query_allowance(
    deps: Deps,
    role: AllowanceRole,
    address: String,
) -> StdResult<AllowanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let allowance = role.allowance(deps.storage, &address)?;
    Ok(AllowanceResponse { address, allowance })
}

pub fn query_operators(deps: Deps) -> StdResult<OperatorsResponse> {
    Ok(OperatorsResponse {
        operators: roles::list_operators(deps.storage)?,
    })
}

// ============================================================================
// Transfer Restriction Queries
// ============================================================================

pub fn query_blocked_channels(deps: Deps) -> StdResult<BlockedChannelsResponse> {
    let channels = BLOCKED_CHANNELS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(BlockedChannelsResponse { channels })
}

/// Blocked addresses in ascending order, starting after `start_after`.
pub fn query_blocked_addresses(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BlockedAddressesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Addr::unchecked);
    let start = start.as_ref().map(Bound::exclusive);

    let addresses = BLOCKED_ADDRESSES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BlockedAddressesResponse { addresses })
}

pub fn query_is_blocked(deps: Deps, address: String) -> StdResult<IsBlockedResponse> {
    let address = deps.api.addr_validate(&address)?;
    let blocked = guard::is_blocked(deps.storage, &address)?;
    Ok(IsBlockedResponse { address, blocked })
}

/// Run the transfer guard for a hypothetical transfer without touching balances.
pub fn query_simulate_transfer(
    deps: Deps,
    env: Env,
    from: String,
    to: String,
    amount: Uint128,
) -> StdResult<SimulateTransferResponse> {
    let from = deps.api.addr_validate(&from)?;
    let to = deps.api.addr_validate(&to)?;

    let decision = guard::evaluate(deps.storage, &env.contract.address, &from, &to, amount)?;
    Ok(match decision {
        Decision::Allow => SimulateTransferResponse {
            allowed: true,
            reason: None,
        },
        Decision::Deny(reason) => SimulateTransferResponse {
            allowed: false,
            reason: Some(reason.to_string()),
        },
    })
}

pub fn query_escrow_address(deps: Deps, channel: String) -> StdResult<EscrowAddressResponse> {
    validate_channel(&channel).map_err(|e| StdError::generic_err(e.to_string()))?;
    let config = CONFIG.load(deps.storage)?;
    let address = escrow_address(&config.bech32_prefix, &channel)?;
    Ok(EscrowAddressResponse { channel, address })
}

// ============================================================================
// Bridge Queries
// ============================================================================

pub fn query_bridge_nonce(deps: Deps) -> StdResult<BridgeNonceResponse> {
    let nonce = BRIDGE_NONCE.may_load(deps.storage)?.unwrap_or_default();
    Ok(BridgeNonceResponse { nonce })
}

pub fn query_decode_bridge_payload(payload: Binary) -> StdResult<BridgePayloadResponse> {
    let decoded = BridgePayload::decode(payload.as_slice())
        .map_err(|e| StdError::generic_err(format!("Invalid bridge payload: {}", e)))?;
    Ok(BridgePayloadResponse {
        version: decoded.version,
        chain_id: decoded.chain_id,
        sender: Binary::from(decoded.sender.to_vec()),
        amount: decoded.amount,
        nonce: decoded.nonce,
    })
}
