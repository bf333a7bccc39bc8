//! Execute handlers for the asset controller contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `issuance` - Mint and Burn against issuer/redeemer allowances
//! - `transfer` - Holder transfers and outbound bridge intents
//! - `config` - Issuer, redeemer and operator management
//! - `blocklist` - Batch blocklist updates under the blocklist owner
//! - `admin` - Pause, unpause, ownership transfer and channel blocking

mod admin;
mod blocklist;
mod config;
mod issuance;
mod transfer;

pub use admin::*;
pub use blocklist::*;
pub use config::*;
pub use issuance::*;
pub use transfer::*;
