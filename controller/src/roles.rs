//! Role registry: issuers, redeemers and operators.
//!
//! Issuers and redeemers carry an allowance that minting and burning
//! consume. Membership is presence in the map, so a zero-allowance issuer is
//! still an issuer. Operators are a plain set.

use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use cw_storage_plus::Map;

use crate::error::ContractError;
use crate::state::{ISSUERS, OPERATORS, REDEEMERS};

/// A role that carries an allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceRole {
    Issuer,
    Redeemer,
}

impl AllowanceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowanceRole::Issuer => "issuer",
            AllowanceRole::Redeemer => "redeemer",
        }
    }

    fn store(&self) -> Map<'static, &'static Addr, Uint128> {
        match self {
            AllowanceRole::Issuer => ISSUERS,
            AllowanceRole::Redeemer => REDEEMERS,
        }
    }

    fn already(&self, address: &Addr) -> ContractError {
        let address = address.to_string();
        match self {
            AllowanceRole::Issuer => ContractError::AlreadyIssuer { address },
            AllowanceRole::Redeemer => ContractError::AlreadyRedeemer { address },
        }
    }

    fn missing(&self, address: &Addr) -> ContractError {
        let address = address.to_string();
        match self {
            AllowanceRole::Issuer => ContractError::NotIssuer { address },
            AllowanceRole::Redeemer => ContractError::NotRedeemer { address },
        }
    }

    fn unauthorized(&self) -> ContractError {
        match self {
            AllowanceRole::Issuer => ContractError::InvalidIssuer,
            AllowanceRole::Redeemer => ContractError::InvalidRedeemer,
        }
    }

    /// Remaining allowance, or `None` when the address does not hold the role
    pub fn allowance(&self, storage: &dyn Storage, address: &Addr) -> StdResult<Option<Uint128>> {
        self.store().may_load(storage, address)
    }

    pub fn add(
        &self,
        storage: &mut dyn Storage,
        address: &Addr,
        allowance: Uint128,
    ) -> Result<(), ContractError> {
        if self.store().has(storage, address) {
            return Err(self.already(address));
        }
        self.store().save(storage, address, &allowance)?;
        Ok(())
    }

    /// Delete the entry entirely; this is not the same as a zero allowance.
    pub fn remove(&self, storage: &mut dyn Storage, address: &Addr) -> Result<(), ContractError> {
        if !self.store().has(storage, address) {
            return Err(self.missing(address));
        }
        self.store().remove(storage, address);
        Ok(())
    }

    pub fn set_allowance(
        &self,
        storage: &mut dyn Storage,
        address: &Addr,
        allowance: Uint128,
    ) -> Result<(), ContractError> {
        if !self.store().has(storage, address) {
            return Err(self.missing(address));
        }
        self.store().save(storage, address, &allowance)?;
        Ok(())
    }

    /// Allowance left after spending `amount`, without writing it.
    ///
    /// Fails when `signer` does not hold the role or the allowance is short,
    /// so callers can check before moving any funds.
    pub fn remaining_after(
        &self,
        storage: &dyn Storage,
        signer: &Addr,
        amount: Uint128,
    ) -> Result<Uint128, ContractError> {
        let allowance = self
            .allowance(storage, signer)?
            .ok_or_else(|| self.unauthorized())?;
        allowance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientAllowance {
                allowance,
                requested: amount,
            })
    }

    /// Ensure `signer` holds the role.
    pub fn assert_member(&self, storage: &dyn Storage, signer: &Addr) -> Result<(), ContractError> {
        if self.store().has(storage, signer) {
            Ok(())
        } else {
            Err(self.unauthorized())
        }
    }

    /// Persist a value previously computed by [`AllowanceRole::remaining_after`].
    pub fn store_allowance(
        &self,
        storage: &mut dyn Storage,
        signer: &Addr,
        remaining: Uint128,
    ) -> StdResult<()> {
        self.store().save(storage, signer, &remaining)
    }

    pub fn list(&self, storage: &dyn Storage) -> StdResult<Vec<(Addr, Uint128)>> {
        self.store()
            .range(storage, None, None, Order::Ascending)
            .collect()
    }
}

// ============================================================================
// Operators
// ============================================================================

pub fn is_operator(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(OPERATORS.may_load(storage, address)?.unwrap_or(false))
}

pub fn add_operator(storage: &mut dyn Storage, address: &Addr) -> Result<(), ContractError> {
    if is_operator(storage, address)? {
        return Err(ContractError::AlreadyOperator {
            address: address.to_string(),
        });
    }
    OPERATORS.save(storage, address, &true)?;
    Ok(())
}

pub fn remove_operator(storage: &mut dyn Storage, address: &Addr) -> Result<(), ContractError> {
    if !is_operator(storage, address)? {
        return Err(ContractError::NotOperator {
            address: address.to_string(),
        });
    }
    OPERATORS.remove(storage, address);
    Ok(())
}

pub fn list_operators(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    OPERATORS
        .keys(storage, None, None, Order::Ascending)
        .collect()
}
