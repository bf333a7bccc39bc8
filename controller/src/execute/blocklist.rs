//! Blocklist handlers, gated by the blocklist owner.
//!
//! A batch is decoded in full before any entry is written, so one bad
//! address leaves the blocklist untouched. Blocking an address that is
//! already blocked (or unblocking one that is not) is a no-op.

use cosmwasm_std::{Addr, DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::ownership::BLOCKLIST_OWNERSHIP;
use crate::state::BLOCKED_ADDRESSES;

fn validate_batch(deps: &DepsMut, addresses: &[String]) -> Result<Vec<Addr>, ContractError> {
    if addresses.is_empty() {
        return Err(ContractError::EmptyAddressList);
    }
    addresses
        .iter()
        .map(|address| {
            deps.api
                .addr_validate(address)
                .map_err(|e| ContractError::invalid_address(address, e))
        })
        .collect()
}

pub fn execute_add_to_blocklist(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    BLOCKLIST_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addrs = validate_batch(&deps, &addresses)?;

    let mut events = Vec::with_capacity(addrs.len());
    for addr in &addrs {
        BLOCKED_ADDRESSES.save(deps.storage, addr, &true)?;
        events.push(Event::new("blocked").add_attribute("address", addr.as_str()));
    }

    Ok(Response::new()
        .add_events(events)
        .add_attribute("method", "add_to_blocklist")
        .add_attribute("count", addrs.len().to_string()))
}

pub fn execute_remove_from_blocklist(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    BLOCKLIST_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addrs = validate_batch(&deps, &addresses)?;

    let mut events = Vec::with_capacity(addrs.len());
    for addr in &addrs {
        BLOCKED_ADDRESSES.remove(deps.storage, addr);
        events.push(Event::new("unblocked").add_attribute("address", addr.as_str()));
    }

    Ok(Response::new()
        .add_events(events)
        .add_attribute("method", "remove_from_blocklist")
        .add_attribute("count", addrs.len().to_string()))
}
