//! Holder transfers and outbound bridge intents.

use common::BridgePayload;
use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, Uint256};

use crate::error::ContractError;
use crate::escrow::decode_bech32_address;
use crate::guard;
use crate::ledger::{Ledger, TokenLedger};
use crate::state::{BRIDGE_NONCE, CONFIG};

/// Move `amount` from the signer to `recipient` through the transfer guard.
pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::NonPositiveAmount);
    }

    let recipient_addr = deps
        .api
        .addr_validate(&recipient)
        .map_err(|e| ContractError::invalid_address(&recipient, e))?;

    let mut ledger = TokenLedger::new(deps.storage, env.contract.address);
    ledger.transfer(&info.sender, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}

/// Burn the signer's funds and emit an encoded bridge payload for the relayer.
///
/// The 160-byte payload is returned as response data; the `payload`
/// attribute carries the same bytes hex encoded.
pub fn execute_bridge_out(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::NonPositiveAmount);
    }

    guard::evaluate_outbound(deps.storage, &info.sender)?.into_result()?;

    let sender = decode_bech32_address(info.sender.as_str())
        .map_err(|e| ContractError::invalid_address(info.sender.as_str(), e))?;

    let config = CONFIG.load(deps.storage)?;
    let nonce = BRIDGE_NONCE.may_load(deps.storage)?.unwrap_or_default();

    let payload = BridgePayload {
        version: config.bridge_version,
        chain_id,
        sender,
        amount: Uint256::from(amount),
        nonce,
    };
    let encoded = payload.encode()?;

    let module = env.contract.address;
    {
        let mut ledger = TokenLedger::new(deps.storage, module.clone());
        ledger.transfer(&info.sender, &module, amount)?;
        ledger.burn_supply(amount)?;
    }

    let next_nonce = nonce
        .checked_add(1)
        .ok_or_else(|| ContractError::InvalidConfig {
            reason: "bridge nonce exhausted".to_string(),
        })?;
    BRIDGE_NONCE.save(deps.storage, &next_nonce)?;

    let payload_hex = hex::encode(encoded);

    Ok(Response::new()
        .set_data(Binary::from(encoded.to_vec()))
        .add_event(
            Event::new("bridge_out")
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("chain_id", chain_id.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("nonce", nonce.to_string()),
        )
        .add_attribute("method", "bridge_out")
        .add_attribute("sender", info.sender)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("payload", payload_hex))
}
