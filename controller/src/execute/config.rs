//! Issuer, redeemer and operator management.
//!
//! Every handler here requires the signer to be the module owner.

use cosmwasm_std::{Addr, DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ownership::MODULE_OWNERSHIP;
use crate::roles::{self, AllowanceRole};

fn validate(deps: &DepsMut, address: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(address)
        .map_err(|e| ContractError::invalid_address(address, e))
}

// ============================================================================
// Issuers / Redeemers
// ============================================================================

pub fn execute_add_role(
    deps: DepsMut,
    info: MessageInfo,
    role: AllowanceRole,
    address: String,
    allowance: Uint128,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addr = validate(&deps, &address)?;

    role.add(deps.storage, &addr, allowance)?;

    Ok(Response::new()
        .add_event(
            Event::new(format!("{}_added", role.as_str()))
                .add_attribute("address", addr.as_str())
                .add_attribute("allowance", allowance.to_string()),
        )
        .add_attribute("method", format!("add_{}", role.as_str()))
        .add_attribute("address", addr)
        .add_attribute("allowance", allowance.to_string()))
}

pub fn execute_remove_role(
    deps: DepsMut,
    info: MessageInfo,
    role: AllowanceRole,
    address: String,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addr = validate(&deps, &address)?;

    role.remove(deps.storage, &addr)?;

    Ok(Response::new()
        .add_event(
            Event::new(format!("{}_removed", role.as_str())).add_attribute("address", addr.as_str()),
        )
        .add_attribute("method", format!("remove_{}", role.as_str()))
        .add_attribute("address", addr))
}

pub fn execute_set_role_allowance(
    deps: DepsMut,
    info: MessageInfo,
    role: AllowanceRole,
    address: String,
    allowance: Uint128,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addr = validate(&deps, &address)?;

    role.set_allowance(deps.storage, &addr, allowance)?;

    Ok(Response::new()
        .add_event(
            Event::new(format!("{}_allowance_set", role.as_str()))
                .add_attribute("address", addr.as_str())
                .add_attribute("allowance", allowance.to_string()),
        )
        .add_attribute("method", format!("set_{}_allowance", role.as_str()))
        .add_attribute("address", addr)
        .add_attribute("allowance", allowance.to_string()))
}

// ============================================================================
// Operators
// ============================================================================

pub fn execute_add_operator(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addr = validate(&deps, &address)?;

    roles::add_operator(deps.storage, &addr)?;

    Ok(Response::new()
        .add_event(Event::new("operator_added").add_attribute("address", addr.as_str()))
        .add_attribute("method", "add_operator")
        .add_attribute("address", addr))
}

pub fn execute_remove_operator(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    MODULE_OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    let addr = validate(&deps, &address)?;

    roles::remove_operator(deps.storage, &addr)?;

    Ok(Response::new()
        .add_event(Event::new("operator_removed").add_attribute("address", addr.as_str()))
        .add_attribute("method", "remove_operator")
        .add_attribute("address", addr))
}
