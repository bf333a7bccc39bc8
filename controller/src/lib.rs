//! Asset Controller Contract - Issuance and Transfer Restrictions for TerraClassic
//!
//! This contract controls a single fungible asset: who may mint and burn it,
//! and whether any given transfer of it may go through.
//!
//! # Issuance
//! 1. The owner registers issuers and redeemers with an allowance each
//! 2. An issuer calls `Mint`, spending allowance; new supply lands with the recipient
//! 3. A redeemer calls `Burn`, spending allowance; the holder's funds are destroyed
//!
//! # Transfer Restrictions
//! Every balance change passes the transfer guard, which enforces, in order:
//! - Redemption deposits into the module account always pass
//! - The pause switch (operators pause, only the owner unpauses)
//! - The address blocklist, owned separately from the module
//! - Blocked IBC channels, matched by their escrow address
//!
//! # Bridge
//! `BridgeOut` burns the caller's funds and returns a fixed 160-byte payload
//! carrying a monotonically increasing nonce for relayers.

pub mod contract;
pub mod error;
pub mod escrow;
mod execute;
pub mod guard;
pub mod ledger;
pub mod msg;
pub mod ownership;
mod query;
pub mod roles;
pub mod state;

pub use crate::error::ContractError;
pub use crate::guard::{Decision, DenyReason};
pub use crate::ledger::{Ledger, TokenLedger};
pub use crate::ownership::{Ownership, BLOCKLIST_OWNERSHIP, MODULE_OWNERSHIP};
