//! Collateral ledger. Stake is denominated in the configured reward asset and
//! custodied by the contract; locks reserve part of a position while it backs
//! a standing bid or an unvested reward.

use soroban_sdk::{token, Address, Env};

use crate::{
    config,
    errors::Error,
    events::{StakeDepositedEventData, StakeWithdrawnEventData},
    storage,
    types::StakePosition,
};

impl StakePosition {
    pub fn empty(owner: Address) -> Self {
        Self {
            owner,
            amount: 0,
            locked: 0,
            locked_until: None,
        }
    }

    pub fn unlocked(&self) -> u64 {
        self.amount.saturating_sub(self.locked)
    }

    fn reserve(&mut self, amount: u64, until: u64) -> Result<(), Error> {
        if self.unlocked() < amount {
            return Err(Error::InsufficientStake);
        }
        self.locked = self.locked.checked_add(amount).ok_or(Error::Overflow)?;
        self.extend_until(until);
        Ok(())
    }

    fn release(&mut self, amount: u64) -> Result<(), Error> {
        self.locked = self.locked.checked_sub(amount).ok_or(Error::Overflow)?;
        if self.locked == 0 {
            self.locked_until = None;
        }
        Ok(())
    }

    fn extend_until(&mut self, until: u64) {
        self.locked_until = Some(match self.locked_until {
            Some(current) if current > until => current,
            _ => until,
        });
    }
}

pub fn position(e: &Env, owner: &Address) -> StakePosition {
    storage::get_stake(e, owner).unwrap_or_else(|| StakePosition::empty(owner.clone()))
}

pub fn deposit(e: &Env, owner: Address, amount: u64) -> Result<u64, Error> {
    owner.require_auth();
    let config = config::load(e)?;
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }

    let mut position = position(e, &owner);
    position.amount = position.amount.checked_add(amount).ok_or(Error::Overflow)?;

    token::TokenClient::new(e, &config.reward_asset).transfer(
        &owner,
        &e.current_contract_address(),
        &i128::from(amount),
    );
    storage::save_stake(e, &position);
    storage::extend_instance_ttl(e);

    StakeDepositedEventData {
        owner,
        amount,
        total: position.amount,
    }
    .publish(e);

    Ok(position.amount)
}

pub fn withdraw(e: &Env, owner: Address, amount: u64) -> Result<u64, Error> {
    owner.require_auth();
    let config = config::load(e)?;
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }

    let mut position = position(e, &owner);
    if amount > position.unlocked() {
        return Err(Error::InsufficientUnlockedStake);
    }
    position.amount -= amount;

    token::TokenClient::new(e, &config.reward_asset).transfer(
        &e.current_contract_address(),
        &owner,
        &i128::from(amount),
    );
    storage::save_stake(e, &position);
    storage::extend_instance_ttl(e);

    StakeWithdrawnEventData {
        owner,
        amount,
        total: position.amount,
    }
    .publish(e);

    Ok(position.amount)
}

/// Reserve `amount` of `owner`'s unlocked stake until at least `until`.
pub fn lock(e: &Env, owner: &Address, amount: u64, until: u64) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let mut position = position(e, owner);
    position.reserve(amount, until)?;
    storage::save_stake(e, &position);
    Ok(())
}

/// Release a reservation previously taken with [`lock`].
pub fn unlock(e: &Env, owner: &Address, amount: u64) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let mut position = position(e, owner);
    position.release(amount)?;
    storage::save_stake(e, &position);
    Ok(())
}

/// Push the expiry of an existing reservation out to `until`. No-op when
/// nothing is locked.
pub fn extend_lock(e: &Env, owner: &Address, until: u64) {
    let mut position = position(e, owner);
    if position.locked == 0 {
        return;
    }
    position.extend_until(until);
    storage::save_stake(e, &position);
}
