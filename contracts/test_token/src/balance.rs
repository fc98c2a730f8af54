//! Per-holder balances and the total supply counter.

use common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const BALANCE: Symbol = symbol_short!("BAL");
const SUPPLY: Symbol = symbol_short!("SUPPLY");

/// Reasons a balance movement can be refused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BalanceError {
    InsufficientBalance,
    Overflow,
}

fn balance_key(holder: &Address) -> (Symbol, Address) {
    (BALANCE, holder.clone())
}

/// Return the balance of `holder` (0 if they never held tokens).
pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    let key = balance_key(holder);
    let bal: Option<i128> = env.storage().persistent().get(&key);
    if bal.is_some() {
        ttl::extend_persistent(env, &key);
    }
    bal.unwrap_or(0)
}

fn write_balance(env: &Env, holder: &Address, amount: i128) {
    let key = balance_key(holder);
    env.storage().persistent().set(&key, &amount);
    ttl::extend_persistent(env, &key);
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&SUPPLY).unwrap_or(0)
}

/// Credit `amount` to `holder`, growing the total supply.
pub fn mint(env: &Env, holder: &Address, amount: i128) -> Result<(), BalanceError> {
    let supply = total_supply(env)
        .checked_add(amount)
        .ok_or(BalanceError::Overflow)?;
    receive(env, holder, amount)?;
    env.storage().instance().set(&SUPPLY, &supply);
    Ok(())
}

/// Debit `amount` from `holder`, shrinking the total supply.
pub fn burn(env: &Env, holder: &Address, amount: i128) -> Result<(), BalanceError> {
    spend(env, holder, amount)?;
    let supply = total_supply(env).saturating_sub(amount);
    env.storage().instance().set(&SUPPLY, &supply);
    Ok(())
}

/// Move `amount` from `from` to `to`. Self-transfers only check the balance.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), BalanceError> {
    if from == to {
        if read_balance(env, from) < amount {
            return Err(BalanceError::InsufficientBalance);
        }
        return Ok(());
    }
    spend(env, from, amount)?;
    receive(env, to, amount)
}

fn spend(env: &Env, holder: &Address, amount: i128) -> Result<(), BalanceError> {
    let current = read_balance(env, holder);
    if current < amount {
        return Err(BalanceError::InsufficientBalance);
    }
    write_balance(env, holder, current - amount);
    Ok(())
}

fn receive(env: &Env, holder: &Address, amount: i128) -> Result<(), BalanceError> {
    let current = read_balance(env, holder);
    let updated = current.checked_add(amount).ok_or(BalanceError::Overflow)?;
    write_balance(env, holder, updated);
    Ok(())
}
