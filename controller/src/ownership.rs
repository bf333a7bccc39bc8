//! Two-phase ownership transfer.
//!
//! The current owner nominates a successor with `transfer_ownership`; the
//! nomination only takes effect once the successor calls `accept_ownership`.
//! A new nomination overwrites any pending one. The same state machine backs
//! two independent instances: module administration and blocklist
//! administration. They use disjoint storage keys and never share state.

use cosmwasm_std::{Addr, Event, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Ownership of the module (roles, pause/unpause, blocked channels)
pub const MODULE_OWNERSHIP: Ownership = Ownership::new("module", "owner", "pending_owner");

/// Ownership of the address blocklist
pub const BLOCKLIST_OWNERSHIP: Ownership =
    Ownership::new("blocklist", "blocklist_owner", "blocklist_pending_owner");

pub struct Ownership<'a> {
    scope: &'a str,
    owner: Item<'a, Addr>,
    pending_owner: Item<'a, Addr>,
}

impl<'a> Ownership<'a> {
    pub const fn new(scope: &'a str, owner_key: &'a str, pending_key: &'a str) -> Self {
        Self {
            scope,
            owner: Item::new(owner_key),
            pending_owner: Item::new(pending_key),
        }
    }

    /// Set the initial owner. `None` leaves the instance unowned.
    pub fn initialize(&self, storage: &mut dyn Storage, owner: Option<&Addr>) -> StdResult<()> {
        match owner {
            Some(owner) => self.owner.save(storage, owner),
            None => {
                self.owner.remove(storage);
                Ok(())
            }
        }
    }

    pub fn owner(&self, storage: &dyn Storage) -> StdResult<Option<Addr>> {
        self.owner.may_load(storage)
    }

    pub fn pending_owner(&self, storage: &dyn Storage) -> StdResult<Option<Addr>> {
        self.pending_owner.may_load(storage)
    }

    /// Fail unless `signer` is the current owner.
    pub fn assert_owner(&self, storage: &dyn Storage, signer: &Addr) -> Result<(), ContractError> {
        let owner = self.owner(storage)?.ok_or(ContractError::NoOwner)?;
        if *signer != owner {
            return Err(ContractError::InvalidOwner);
        }
        Ok(())
    }

    /// Nominate `new_owner`, replacing any pending nomination.
    pub fn transfer_ownership(
        &self,
        storage: &mut dyn Storage,
        signer: &Addr,
        new_owner: Addr,
    ) -> Result<Event, ContractError> {
        let owner = self.owner(storage)?.ok_or(ContractError::NoOwner)?;
        if *signer != owner {
            return Err(ContractError::InvalidOwner);
        }
        if new_owner == owner {
            return Err(ContractError::SameOwner);
        }

        self.pending_owner.save(storage, &new_owner)?;

        Ok(Event::new("ownership_transfer_started")
            .add_attribute("scope", self.scope)
            .add_attribute("previous_owner", owner)
            .add_attribute("new_owner", new_owner))
    }

    /// Complete a pending transfer. Only the nominated address may accept.
    pub fn accept_ownership(
        &self,
        storage: &mut dyn Storage,
        signer: &Addr,
    ) -> Result<Event, ContractError> {
        let pending = self
            .pending_owner(storage)?
            .ok_or(ContractError::NoPendingOwner)?;
        if *signer != pending {
            return Err(ContractError::InvalidPendingOwner);
        }

        let previous = self.owner(storage)?;
        self.owner.save(storage, &pending)?;
        self.pending_owner.remove(storage);

        Ok(Event::new("ownership_transferred")
            .add_attribute("scope", self.scope)
            .add_attribute(
                "previous_owner",
                previous.map(String::from).unwrap_or_default(),
            )
            .add_attribute("new_owner", pending))
    }
}
