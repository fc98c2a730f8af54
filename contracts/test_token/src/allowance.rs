//! Spender allowances with a ledger-sequence expiry.
//!
//! Allowances live in temporary storage and are kept alive until their
//! expiration ledger; an expired allowance reads as zero.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const ALLOWANCE: Symbol = symbol_short!("ALLOW");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AllowanceError {
    /// Expiry is in the past, or beyond the longest TTL the ledger allows,
    /// for a non-zero allowance.
    InvalidExpiration,
    InsufficientAllowance,
}

fn allowance_key(from: &Address, spender: &Address) -> (Symbol, Address, Address) {
    (ALLOWANCE, from.clone(), spender.clone())
}

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let stored: Option<AllowanceValue> = env
        .storage()
        .temporary()
        .get(&allowance_key(from, spender));
    match stored {
        Some(value) if value.expiration_ledger >= env.ledger().sequence() => value,
        Some(value) => AllowanceValue {
            amount: 0,
            expiration_ledger: value.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), AllowanceError> {
    let current = env.ledger().sequence();
    if amount > 0 && expiration_ledger < current {
        return Err(AllowanceError::InvalidExpiration);
    }
    let live_for = expiration_ledger.saturating_sub(current);
    if amount > 0 && live_for > env.storage().max_ttl() {
        return Err(AllowanceError::InvalidExpiration);
    }

    let key = allowance_key(from, spender);
    let value = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &value);

    if amount > 0 {
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

/// Consume `amount` of the allowance `from` granted to `spender`.
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), AllowanceError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(AllowanceError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
