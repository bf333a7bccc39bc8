//! Asset Controller Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `guard` - The transfer restriction hook consulted by the ledger

use common::validate_version;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20_base::state::{TokenInfo, BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::escrow::encode_bech32_address;
use crate::execute::{
    execute_accept_blocklist_ownership, execute_accept_ownership, execute_add_blocked_channel,
    execute_add_operator, execute_add_role, execute_add_to_blocklist, execute_bridge_out,
    execute_burn, execute_mint, execute_pause, execute_remove_blocked_channel,
    execute_remove_from_blocklist, execute_remove_operator, execute_remove_role,
    execute_set_role_allowance, execute_transfer, execute_transfer_blocklist_ownership,
    execute_transfer_ownership, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::ownership::{BLOCKLIST_OWNERSHIP, MODULE_OWNERSHIP};
use crate::query::{
    query_allowance, query_allowances, query_blocked_addresses, query_blocked_channels,
    query_bridge_nonce, query_decode_bridge_payload, query_denom, query_escrow_address,
    query_is_blocked, query_operators, query_ownership, query_paused, query_simulate_transfer,
};
use crate::roles::{self, AllowanceRole};
use crate::state::{Config, BRIDGE_NONCE, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps
        .api
        .addr_validate(&msg.owner)
        .map_err(|e| ContractError::invalid_address(&msg.owner, e))?;
    let blocklist_owner = msg
        .blocklist_owner
        .as_deref()
        .map(|addr| {
            deps.api
                .addr_validate(addr)
                .map_err(|e| ContractError::invalid_address(addr, e))
        })
        .transpose()?;

    if msg.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "denom must not be empty".to_string(),
        });
    }
    validate_version(&msg.bridge_version)?;
    // Escrow addresses are rendered with this prefix, so it has to encode
    encode_bech32_address(&[0u8; 20], &msg.bech32_prefix).map_err(|e| {
        ContractError::InvalidConfig {
            reason: e.to_string(),
        }
    })?;

    let config = Config {
        denom: msg.denom,
        bech32_prefix: msg.bech32_prefix,
        bridge_version: msg.bridge_version,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    BRIDGE_NONCE.save(deps.storage, &0u64)?;

    MODULE_OWNERSHIP.initialize(deps.storage, Some(&owner))?;
    BLOCKLIST_OWNERSHIP.initialize(deps.storage, blocklist_owner.as_ref())?;

    for operator in &msg.operators {
        let operator_addr = deps
            .api
            .addr_validate(operator)
            .map_err(|e| ContractError::invalid_address(operator, e))?;
        roles::add_operator(deps.storage, &operator_addr)?;
    }

    // Genesis balances are credited directly, the transfer guard does not apply
    let mut total_supply = Uint128::zero();
    for coin in &msg.initial_balances {
        let holder = deps
            .api
            .addr_validate(&coin.address)
            .map_err(|e| ContractError::invalid_address(&coin.address, e))?;
        BALANCES.update(deps.storage, &holder, |balance| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(coin.amount)?)
        })?;
        total_supply = total_supply
            .checked_add(coin.amount)
            .map_err(StdError::from)?;
    }

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            total_supply,
            mint: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute(
            "blocklist_owner",
            blocklist_owner.map(String::from).unwrap_or_default(),
        )
        .add_attribute("denom", config.denom)
        .add_attribute("operators", msg.operators.len().to_string())
        .add_attribute("total_supply", total_supply.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Issuance
        ExecuteMsg::Mint { to, amount } => execute_mint(deps, env, info, to, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, env, info, from, amount),

        // Holder operations
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::BridgeOut { chain_id, amount } => {
            execute_bridge_out(deps, env, info, chain_id, amount)
        }

        // Circuit breaker
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),

        // Ownership
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::TransferBlocklistOwnership { new_owner } => {
            execute_transfer_blocklist_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptBlocklistOwnership {} => execute_accept_blocklist_ownership(deps, info),

        // Roles
        ExecuteMsg::AddIssuer { address, allowance } => {
            execute_add_role(deps, info, AllowanceRole::Issuer, address, allowance)
        }
        ExecuteMsg::RemoveIssuer { address } => {
            execute_remove_role(deps, info, AllowanceRole::Issuer, address)
        }
        ExecuteMsg::SetIssuerAllowance { address, allowance } => {
            execute_set_role_allowance(deps, info, AllowanceRole::Issuer, address, allowance)
        }
        ExecuteMsg::AddRedeemer { address, allowance } => {
            execute_add_role(deps, info, AllowanceRole::Redeemer, address, allowance)
        }
        ExecuteMsg::RemoveRedeemer { address } => {
            execute_remove_role(deps, info, AllowanceRole::Redeemer, address)
        }
        ExecuteMsg::SetRedeemerAllowance { address, allowance } => {
            execute_set_role_allowance(deps, info, AllowanceRole::Redeemer, address, allowance)
        }
        ExecuteMsg::AddOperator { address } => execute_add_operator(deps, info, address),
        ExecuteMsg::RemoveOperator { address } => execute_remove_operator(deps, info, address),

        // Transfer restrictions
        ExecuteMsg::AddBlockedChannel { channel } => {
            execute_add_blocked_channel(deps, info, channel)
        }
        ExecuteMsg::RemoveBlockedChannel { channel } => {
            execute_remove_blocked_channel(deps, info, channel)
        }
        ExecuteMsg::AddToBlocklist { addresses } => {
            execute_add_to_blocklist(deps, info, addresses)
        }
        ExecuteMsg::RemoveFromBlocklist { addresses } => {
            execute_remove_from_blocklist(deps, info, addresses)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Denom {} => to_json_binary(&query_denom(deps)?),
        QueryMsg::Paused {} => to_json_binary(&query_paused(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_ownership(deps, &MODULE_OWNERSHIP)?),
        QueryMsg::BlocklistOwner {} => {
            to_json_binary(&query_ownership(deps, &BLOCKLIST_OWNERSHIP)?)
        }

        // Roles
        QueryMsg::Issuers {} => to_json_binary(&query_allowances(deps, AllowanceRole::Issuer)?),
        QueryMsg::Issuer { address } => {
            to_json_binary(&query_allowance(deps, AllowanceRole::Issuer, address)?)
        }
        QueryMsg::Redeemers {} => {
            to_json_binary(&query_allowances(deps, AllowanceRole::Redeemer)?)
        }
        QueryMsg::Redeemer { address } => {
            to_json_binary(&query_allowance(deps, AllowanceRole::Redeemer, address)?)
        }
        QueryMsg::Operators {} => to_json_binary(&query_operators(deps)?),

        // Transfer restrictions
        QueryMsg::BlockedChannels {} => to_json_binary(&query_blocked_channels(deps)?),
        QueryMsg::BlockedAddresses { start_after, limit } => {
            to_json_binary(&query_blocked_addresses(deps, start_after, limit)?)
        }
        QueryMsg::IsBlocked { address } => to_json_binary(&query_is_blocked(deps, address)?),
        QueryMsg::SimulateTransfer { from, to, amount } => {
            to_json_binary(&query_simulate_transfer(deps, env, from, to, amount)?)
        }
        QueryMsg::EscrowAddress { channel } => {
            to_json_binary(&query_escrow_address(deps, channel)?)
        }

        // Ledger
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),

        // Bridge
        QueryMsg::BridgeNonce {} => to_json_binary(&query_bridge_nonce(deps)?),
        QueryMsg::DecodeBridgePayload { payload } => {
            to_json_binary(&query_decode_bridge_payload(payload)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
