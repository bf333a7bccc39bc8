//! Mint and Burn handlers.
//!
//! Both consume the signer's allowance. The allowance is checked before any
//! funds move and written only after the ledger has accepted the change.
//! Each call spends allowance, so a resubmitted message spends it again.

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ledger::{Ledger, TokenLedger};
use crate::roles::AllowanceRole;

/// Mint `amount` to `to`, spending the issuer allowance of the signer.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let role = AllowanceRole::Issuer;
    role.assert_member(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::NonPositiveAmount);
    }

    let recipient = deps
        .api
        .addr_validate(&to)
        .map_err(|e| ContractError::invalid_address(&to, e))?;

    let remaining = role.remaining_after(deps.storage, &info.sender, amount)?;

    let module = env.contract.address;
    {
        let mut ledger = TokenLedger::new(deps.storage, module.clone());
        ledger.mint_supply(amount)?;
        ledger.transfer(&module, &recipient, amount)?;
    }

    role.store_allowance(deps.storage, &info.sender, remaining)?;

    Ok(Response::new()
        .add_event(
            Event::new("minted")
                .add_attribute("issuer", info.sender.as_str())
                .add_attribute("recipient", recipient.as_str())
                .add_attribute("amount", amount.to_string()),
        )
        .add_attribute("method", "mint")
        .add_attribute("issuer", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("remaining_allowance", remaining.to_string()))
}

/// Burn `amount` held by `from`, spending the redeemer allowance of the signer.
///
/// The funds are first moved into the module account, which the transfer
/// guard always allows, and then destroyed.
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let role = AllowanceRole::Redeemer;
    role.assert_member(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::NonPositiveAmount);
    }

    let holder = deps
        .api
        .addr_validate(&from)
        .map_err(|e| ContractError::invalid_address(&from, e))?;

    let remaining = role.remaining_after(deps.storage, &info.sender, amount)?;

    let module = env.contract.address;
    {
        let mut ledger = TokenLedger::new(deps.storage, module.clone());
        ledger.transfer(&holder, &module, amount)?;
        ledger.burn_supply(amount)?;
    }

    role.store_allowance(deps.storage, &info.sender, remaining)?;

    Ok(Response::new()
        .add_event(
            Event::new("burned")
                .add_attribute("redeemer", info.sender.as_str())
                .add_attribute("holder", holder.as_str())
                .add_attribute("amount", amount.to_string()),
        )
        .add_attribute("method", "burn")
        .add_attribute("redeemer", info.sender)
        .add_attribute("holder", holder)
        .add_attribute("amount", amount.to_string())
        .add_attribute("remaining_allowance", remaining.to_string()))
}
