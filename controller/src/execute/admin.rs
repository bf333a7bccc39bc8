//! Admin operations handlers.
//!
//! This module handles:
//! - Pause (operators) and unpause (owner only)
//! - Two-phase ownership transfer for the module and the blocklist
//! - Channel blocking

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::escrow::{escrow_address, validate_channel};
use crate::ownership::{Ownership, BLOCKLIST_OWNERSHIP, MODULE_OWNERSHIP};
use crate::roles;
use crate::state::{BLOCKED_CHANNELS, CONFIG};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Halt transfers. Any operator may pause.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    if !roles::is_operator(deps.storage, &info.sender)? {
        return Err(ContractError::InvalidOperator);
    }

    let mut config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::AlreadyPaused);
    }
    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(Event::new("paused").add_attribute("account", info.sender.as_str()))
        .add_attribute("method", "pause")
        .add_attribute("account", info.sender))
}

/// Resume transfers. Only the module owner may unpause, operators may not.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::AlreadyUnpaused);
    }
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(Event::new("unpaused").add_attribute("account", info.sender.as_str()))
        .add_attribute("method", "unpause")
        .add_attribute("account", info.sender))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

fn transfer_ownership(
    ownership: &Ownership,
    method: &str,
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps
        .api
        .addr_validate(&new_owner)
        .map_err(|e| ContractError::invalid_address(&new_owner, e))?;

    let event = ownership.transfer_ownership(deps.storage, &info.sender, new_owner.clone())?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", method)
        .add_attribute("new_owner", new_owner))
}

fn accept_ownership(
    ownership: &Ownership,
    method: &str,
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let event = ownership.accept_ownership(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", method)
        .add_attribute("new_owner", info.sender))
}

/// Nominate a new module owner, replacing any pending nomination.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    transfer_ownership(&MODULE_OWNERSHIP, "transfer_ownership", deps, info, new_owner)
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    accept_ownership(&MODULE_OWNERSHIP, "accept_ownership", deps, info)
}

/// Nominate a new blocklist owner, replacing any pending nomination.
pub fn execute_transfer_blocklist_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    transfer_ownership(
        &BLOCKLIST_OWNERSHIP,
        "transfer_blocklist_ownership",
        deps,
        info,
        new_owner,
    )
}

pub fn execute_accept_blocklist_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    accept_ownership(&BLOCKLIST_OWNERSHIP, "accept_blocklist_ownership", deps, info)
}

// ============================================================================
// Channel Blocking
// ============================================================================

/// Deny transfers into the escrow account of `channel`.
pub fn execute_add_blocked_channel(
    deps: DepsMut,
    info: MessageInfo,
    channel: String,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    validate_channel(&channel)?;

    if BLOCKED_CHANNELS.has(deps.storage, &channel) {
        return Err(ContractError::ChannelAlreadyBlocked { channel });
    }
    BLOCKED_CHANNELS.save(deps.storage, &channel, &true)?;

    let config = CONFIG.load(deps.storage)?;
    let escrow = escrow_address(&config.bech32_prefix, &channel)?;

    Ok(Response::new()
        .add_event(
            Event::new("channel_blocked")
                .add_attribute("channel", channel.as_str())
                .add_attribute("escrow", escrow.as_str()),
        )
        .add_attribute("method", "add_blocked_channel")
        .add_attribute("channel", channel)
        .add_attribute("escrow", escrow))
}

pub fn execute_remove_blocked_channel(
    deps: DepsMut,
    info: MessageInfo,
    channel: String,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;

    if !BLOCKED_CHANNELS.has(deps.storage, &channel) {
        return Err(ContractError::ChannelNotBlocked { channel });
    }
    BLOCKED_CHANNELS.remove(deps.storage, &channel);

    Ok(Response::new()
        .add_event(Event::new("channel_unblocked").add_attribute("channel", channel.as_str()))
        .add_attribute("method", "remove_blocked_channel")
        .add_attribute("channel", channel))
}
