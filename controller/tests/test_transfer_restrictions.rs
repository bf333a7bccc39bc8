//! Transfer restriction and bridge tests.
//!
//! Covers the address blocklist, channel blocking through escrow addresses,
//! transfer simulation and outbound bridge payloads.

use common::BridgePayload;
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};
use cw20::{BalanceResponse, Cw20Coin, TokenInfoResponse};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use controller::escrow::encode_bech32_address;
use controller::msg::{
    BlockedAddressesResponse, BlockedChannelsResponse, BridgeNonceResponse,
    BridgePayloadResponse, EscrowAddressResponse, ExecuteMsg, InstantiateMsg, IsBlockedResponse,
    QueryMsg, SimulateTransferResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_controller() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        controller::contract::execute,
        controller::contract::instantiate,
        controller::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    contract: Addr,
    owner: Addr,
    compliance: Addr,
    operator: Addr,
    issuer: Addr,
    redeemer: Addr,
    alice: Addr,
    bob: Addr,
    /// Holder with a real bech32 address, needed for bridge payloads
    bridger: Addr,
}

const BRIDGER_BYTES: [u8; 20] = [0x42; 20];

fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let compliance = Addr::unchecked("terra1compliance");
    let operator = Addr::unchecked("terra1operator");
    let issuer = Addr::unchecked("terra1issuer");
    let redeemer = Addr::unchecked("terra1redeemer");
    let alice = Addr::unchecked("terra1alice");
    let bob = Addr::unchecked("terra1bob");
    let bridger = Addr::unchecked(encode_bech32_address(&BRIDGER_BYTES, "terra").unwrap());

    let code_id = app.store_code(contract_controller());

    let contract = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                blocklist_owner: Some(compliance.to_string()),
                denom: "ueure".to_string(),
                name: "Monerium EUR emoney".to_string(),
                symbol: "EURE".to_string(),
                decimals: 6,
                bech32_prefix: "terra".to_string(),
                bridge_version: "eure-v1".to_string(),
                operators: vec![operator.to_string()],
                initial_balances: vec![
                    Cw20Coin {
                        address: alice.to_string(),
                        amount: Uint128::from(1_000u128),
                    },
                    Cw20Coin {
                        address: bob.to_string(),
                        amount: Uint128::from(1_000u128),
                    },
                    Cw20Coin {
                        address: bridger.to_string(),
                        amount: Uint128::from(1_000u128),
                    },
                ],
            },
            &[],
            "asset-controller",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        contract.clone(),
        &ExecuteMsg::AddIssuer {
            address: issuer.to_string(),
            allowance: Uint128::from(1_000u128),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        contract.clone(),
        &ExecuteMsg::AddRedeemer {
            address: redeemer.to_string(),
            allowance: Uint128::from(1_000u128),
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        contract,
        owner,
        compliance,
        operator,
        issuer,
        redeemer,
        alice,
        bob,
        bridger,
    }
}

fn exec(suite: &mut Suite, sender: &Addr, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
    suite
        .app
        .execute_contract(sender.clone(), suite.contract.clone(), msg, &[])
}

fn transfer(suite: &mut Suite, from: &Addr, to: &Addr, amount: u128) -> AnyResult<AppResponse> {
    exec(
        suite,
        from,
        &ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount: Uint128::from(amount),
        },
    )
}

fn block(suite: &mut Suite, addresses: &[&Addr]) -> AnyResult<AppResponse> {
    let compliance = suite.compliance.clone();
    exec(
        suite,
        &compliance,
        &ExecuteMsg::AddToBlocklist {
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
        },
    )
}

fn balance(suite: &Suite, address: &Addr) -> Uint128 {
    let res: BalanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn is_blocked(suite: &Suite, address: &Addr) -> bool {
    let res: IsBlockedResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::IsBlocked {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.blocked
}

fn escrow_of(suite: &Suite, channel: &str) -> Addr {
    let res: EscrowAddressResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::EscrowAddress {
                channel: channel.to_string(),
            },
        )
        .unwrap();
    res.address
}

// ============================================================================
// Blocklist Tests
// ============================================================================

#[test]
fn test_transfer_between_holders() {
    let mut suite = setup();
    let (alice, bob) = (suite.alice.clone(), suite.bob.clone());

    transfer(&mut suite, &alice, &bob, 250).unwrap();
    assert_eq!(balance(&suite, &alice), Uint128::from(750u128));
    assert_eq!(balance(&suite, &bob), Uint128::from(1_250u128));

    let res = transfer(&mut suite, &alice, &bob, 751);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("insufficient balance"));
}

#[test]
fn test_blocked_recipient() {
    let mut suite = setup();
    let (alice, bob, issuer) = (suite.alice.clone(), suite.bob.clone(), suite.issuer.clone());

    block(&mut suite, &[&bob]).unwrap();
    assert!(is_blocked(&suite, &bob));

    let res = transfer(&mut suite, &alice, &bob, 10);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("blocked from receiving"));

    // Issuance does not get around a recipient block
    let res = exec(
        &mut suite,
        &issuer,
        &ExecuteMsg::Mint {
            to: bob.to_string(),
            amount: Uint128::from(10u128),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("blocked from receiving"));
    assert_eq!(balance(&suite, &bob), Uint128::from(1_000u128));
}

#[test]
fn test_blocked_sender_can_still_be_redeemed() {
    let mut suite = setup();
    let (alice, bob, redeemer) = (suite.alice.clone(), suite.bob.clone(), suite.redeemer.clone());

    block(&mut suite, &[&bob]).unwrap();

    let res = transfer(&mut suite, &bob, &alice, 10);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("blocked from sending"));

    exec(
        &mut suite,
        &redeemer,
        &ExecuteMsg::Burn {
            from: bob.to_string(),
            amount: Uint128::from(400u128),
        },
    )
    .unwrap();
    assert_eq!(balance(&suite, &bob), Uint128::from(600u128));

    let info: TokenInfoResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::from(2_600u128));
}

#[test]
fn test_unblock_restores_transfers() {
    let mut suite = setup();
    let (alice, bob, compliance) = (suite.alice.clone(), suite.bob.clone(), suite.compliance.clone());

    block(&mut suite, &[&bob]).unwrap();
    // Blocking twice is a no-op
    block(&mut suite, &[&bob]).unwrap();

    exec(
        &mut suite,
        &compliance,
        &ExecuteMsg::RemoveFromBlocklist {
            addresses: vec![bob.to_string()],
        },
    )
    .unwrap();
    assert!(!is_blocked(&suite, &bob));
    transfer(&mut suite, &alice, &bob, 10).unwrap();
}

#[test]
fn test_blocklist_batch_is_all_or_nothing() {
    let mut suite = setup();
    let (alice, bob, compliance) = (suite.alice.clone(), suite.bob.clone(), suite.compliance.clone());

    // "x" is too short to be a valid address
    let res = exec(
        &mut suite,
        &compliance,
        &ExecuteMsg::AddToBlocklist {
            addresses: vec![alice.to_string(), "x".to_string(), bob.to_string()],
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid address"));
    assert!(!is_blocked(&suite, &alice));
    assert!(!is_blocked(&suite, &bob));

    let res = exec(
        &mut suite,
        &compliance,
        &ExecuteMsg::AddToBlocklist { addresses: vec![] },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("must not be empty"));
}

#[test]
fn test_blocklist_requires_blocklist_owner() {
    let mut suite = setup();
    let (owner, bob) = (suite.owner.clone(), suite.bob.clone());

    // The module owner has no say over the blocklist
    let res = exec(
        &mut suite,
        &owner,
        &ExecuteMsg::AddToBlocklist {
            addresses: vec![bob.to_string()],
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("not the owner"));
}

#[test]
fn test_blocked_addresses_pagination() {
    let mut suite = setup();
    let a = Addr::unchecked("terra1aaa");
    let b = Addr::unchecked("terra1bbb");
    let c = Addr::unchecked("terra1ccc");

    block(&mut suite, &[&c, &a, &b]).unwrap();

    let page: BlockedAddressesResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::BlockedAddresses {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(page.addresses, vec![a.clone(), b.clone()]);

    let page: BlockedAddressesResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::BlockedAddresses {
                start_after: Some(b.to_string()),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(page.addresses, vec![c]);
}

// ============================================================================
// Channel Tests
// ============================================================================

#[test]
fn test_blocked_channel_escrow() {
    let mut suite = setup();
    let (owner, alice) = (suite.owner.clone(), suite.alice.clone());
    let escrow = escrow_of(&suite, "channel-7");

    exec(
        &mut suite,
        &owner,
        &ExecuteMsg::AddBlockedChannel {
            channel: "channel-7".to_string(),
        },
    )
    .unwrap();

    let channels: BlockedChannelsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::BlockedChannels {})
        .unwrap();
    assert_eq!(channels.channels, vec!["channel-7".to_string()]);

    let res = transfer(&mut suite, &alice, &escrow, 10);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("transfers blocked on channel"));

    // Other channels are unaffected
    let other = escrow_of(&suite, "channel-8");
    transfer(&mut suite, &alice, &other, 10).unwrap();

    exec(
        &mut suite,
        &owner,
        &ExecuteMsg::RemoveBlockedChannel {
            channel: "channel-7".to_string(),
        },
    )
    .unwrap();
    transfer(&mut suite, &alice, &escrow, 10).unwrap();
    assert_eq!(balance(&suite, &escrow), Uint128::from(10u128));
}

#[test]
fn test_channel_preconditions() {
    let mut suite = setup();
    let (owner, compliance) = (suite.owner.clone(), suite.compliance.clone());

    // Channel blocking belongs to the module owner
    let res = exec(
        &mut suite,
        &compliance,
        &ExecuteMsg::AddBlockedChannel {
            channel: "channel-0".to_string(),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("not the owner"));

    let res = exec(
        &mut suite,
        &owner,
        &ExecuteMsg::RemoveBlockedChannel {
            channel: "channel-0".to_string(),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("is not blocked"));

    exec(
        &mut suite,
        &owner,
        &ExecuteMsg::AddBlockedChannel {
            channel: "channel-0".to_string(),
        },
    )
    .unwrap();
    let res = exec(
        &mut suite,
        &owner,
        &ExecuteMsg::AddBlockedChannel {
            channel: "channel-0".to_string(),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("is already blocked"));

    let res = exec(
        &mut suite,
        &owner,
        &ExecuteMsg::AddBlockedChannel {
            channel: "transfer/channel-1".to_string(),
        },
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid channel"));
}

#[test]
fn test_simulate_transfer() {
    let mut suite = setup();
    let (alice, bob, operator) = (suite.alice.clone(), suite.bob.clone(), suite.operator.clone());

    let simulate = |suite: &Suite, from: &Addr, to: &Addr| -> SimulateTransferResponse {
        suite
            .app
            .wrap()
            .query_wasm_smart(
                &suite.contract,
                &QueryMsg::SimulateTransfer {
                    from: from.to_string(),
                    to: to.to_string(),
                    amount: Uint128::from(1u128),
                },
            )
            .unwrap()
    };

    let res = simulate(&suite, &alice, &bob);
    assert!(res.allowed);
    assert_eq!(res.reason, None);

    exec(&mut suite, &operator, &ExecuteMsg::Pause {}).unwrap();
    let res = simulate(&suite, &alice, &bob);
    assert!(!res.allowed);
    assert_eq!(res.reason, Some("transfers paused".to_string()));

    // Deposits into the module account pass even while paused
    let module = suite.contract.clone();
    assert!(simulate(&suite, &alice, &module).allowed);
}

// ============================================================================
// Bridge Tests
// ============================================================================

fn bridge_out(suite: &mut Suite, chain_id: u64, amount: u128) -> AnyResult<AppResponse> {
    let bridger = suite.bridger.clone();
    exec(
        suite,
        &bridger,
        &ExecuteMsg::BridgeOut {
            chain_id,
            amount: Uint128::from(amount),
        },
    )
}

#[test]
fn test_bridge_out_emits_payload() {
    let mut suite = setup();
    let bridger = suite.bridger.clone();

    let res = bridge_out(&mut suite, 56, 300).unwrap();
    let payload = BridgePayload::decode(res.data.unwrap().as_slice()).unwrap();
    assert_eq!(
        payload,
        BridgePayload {
            version: "eure-v1".to_string(),
            chain_id: 56,
            sender: BRIDGER_BYTES,
            amount: Uint256::from(300u128),
            nonce: 0,
        }
    );
    assert_eq!(balance(&suite, &bridger), Uint128::from(700u128));

    let res = bridge_out(&mut suite, 56, 100).unwrap();
    let payload = BridgePayload::decode(res.data.unwrap().as_slice()).unwrap();
    assert_eq!(payload.nonce, 1);

    let nonce: BridgeNonceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::BridgeNonce {})
        .unwrap();
    assert_eq!(nonce.nonce, 2);

    let info: TokenInfoResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::from(2_600u128));
}

#[test]
fn test_bridge_out_respects_pause_and_blocklist() {
    let mut suite = setup();
    let (owner, operator, bridger) = (
        suite.owner.clone(),
        suite.operator.clone(),
        suite.bridger.clone(),
    );

    exec(&mut suite, &operator, &ExecuteMsg::Pause {}).unwrap();
    let res = bridge_out(&mut suite, 56, 10);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("transfers paused"));
    exec(&mut suite, &owner, &ExecuteMsg::Unpause {}).unwrap();

    block(&mut suite, &[&bridger]).unwrap();
    let res = bridge_out(&mut suite, 56, 10);
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("blocked from sending"));

    // Failed attempts do not consume nonces
    let nonce: BridgeNonceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.contract, &QueryMsg::BridgeNonce {})
        .unwrap();
    assert_eq!(nonce.nonce, 0);
}

#[test]
fn test_decode_bridge_payload_query() {
    let suite = setup();
    let payload = BridgePayload {
        version: "eure-v1".to_string(),
        chain_id: 1,
        sender: BRIDGER_BYTES,
        amount: Uint256::from(5u128),
        nonce: 9,
    };
    let encoded = payload.encode().unwrap();

    let res: BridgePayloadResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.contract,
            &QueryMsg::DecodeBridgePayload {
                payload: Binary::from(encoded.to_vec()),
            },
        )
        .unwrap();
    assert_eq!(res.version, "eure-v1");
    assert_eq!(res.sender, Binary::from(BRIDGER_BYTES.to_vec()));
    assert_eq!(res.nonce, 9);

    let err = suite
        .app
        .wrap()
        .query_wasm_smart::<BridgePayloadResponse>(
            &suite.contract,
            &QueryMsg::DecodeBridgePayload {
                payload: Binary::from(encoded[..100].to_vec()),
            },
        )
        .unwrap_err();
    assert!(err.to_string().contains("invalid payload length"));
}
