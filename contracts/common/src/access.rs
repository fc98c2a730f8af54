//! Admin bookkeeping shared by the ballot and token contracts.
//!
//! Both contracts store a single administrator in instance storage at
//! initialisation time and gate privileged entry points on it. The helpers
//! here do **not** call `require_auth`; the contract decides which address
//! must sign before asking whether that address is the admin.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{ttl, CommonError};

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// Returns `true` once [`initialize`] has succeeded.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

/// Record `admin` and mark the contract as initialised.
///
/// Fails with `AlreadyInitialized` on any call after the first.
pub fn initialize(env: &Env, admin: &Address) -> Result<(), CommonError> {
    if is_initialized(env) {
        return Err(CommonError::AlreadyInitialized);
    }
    env.storage().instance().set(&ADMIN, admin);
    env.storage().instance().set(&INITIALIZED, &true);
    ttl::extend_instance(env);
    Ok(())
}

/// Guard for entry points that need a configured contract.
pub fn require_initialized(env: &Env) -> Result<(), CommonError> {
    if !is_initialized(env) {
        return Err(CommonError::NotInitialized);
    }
    ttl::extend_instance(env);
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, CommonError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(CommonError::NotInitialized)
}

/// Returns `AccessDenied` unless `caller` is the stored admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), CommonError> {
    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(CommonError::AccessDenied);
    }
    Ok(())
}
