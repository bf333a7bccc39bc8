//! Balance ledger for the controlled asset.
//!
//! The controller only needs four things from a ledger: move funds, create
//! supply in the module account, destroy supply held by the module account,
//! and read a balance. [`TokenLedger`] provides them on top of the cw20-base
//! storage layout so the standard cw20 balance and token-info queries keep
//! working. Every transfer is checked by [`crate::guard::evaluate`] before
//! any balance is written.

use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::guard;

pub trait Ledger {
    /// Move `amount` from `from` to `to`, subject to the transfer guard.
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: Uint128) -> Result<(), ContractError>;

    /// Create `amount` of new supply in the module account.
    fn mint_supply(&mut self, amount: Uint128) -> Result<(), ContractError>;

    /// Destroy `amount` of supply held by the module account.
    fn burn_supply(&mut self, amount: Uint128) -> Result<(), ContractError>;

    fn balance_of(&self, account: &Addr) -> StdResult<Uint128>;
}

pub struct TokenLedger<'a> {
    storage: &'a mut dyn Storage,
    module: Addr,
}

impl<'a> TokenLedger<'a> {
    pub fn new(storage: &'a mut dyn Storage, module: Addr) -> Self {
        Self { storage, module }
    }

    fn debit(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
        let balance = self.balance_of(account)?;
        let remaining = balance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                balance,
                requested: amount,
            })?;
        BALANCES.save(self.storage, account, &remaining)?;
        Ok(())
    }

    fn credit(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
        BALANCES.update(self.storage, account, |balance| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        })?;
        Ok(())
    }
}

impl<'a> Ledger for TokenLedger<'a> {
    fn transfer(&mut self, from: &Addr, to: &Addr, amount: Uint128) -> Result<(), ContractError> {
        guard::evaluate(&*self.storage, &self.module, from, to, amount)?.into_result()?;

        if amount.is_zero() {
            return Ok(());
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    fn mint_supply(&mut self, amount: Uint128) -> Result<(), ContractError> {
        let mut info = TOKEN_INFO.load(self.storage)?;
        info.total_supply = info
            .total_supply
            .checked_add(amount)
            .map_err(StdError::from)?;
        TOKEN_INFO.save(self.storage, &info)?;

        let module = self.module.clone();
        self.credit(&module, amount)
    }

    fn burn_supply(&mut self, amount: Uint128) -> Result<(), ContractError> {
        let module = self.module.clone();
        self.debit(&module, amount)?;

        let mut info = TOKEN_INFO.load(self.storage)?;
        info.total_supply = info
            .total_supply
            .checked_sub(amount)
            .map_err(StdError::from)?;
        TOKEN_INFO.save(self.storage, &info)?;
        Ok(())
    }

    fn balance_of(&self, account: &Addr) -> StdResult<Uint128> {
        Ok(BALANCES
            .may_load(&*self.storage, account)?
            .unwrap_or_default())
    }
}
