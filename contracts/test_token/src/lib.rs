#![no_std]

//! # Test Token
//!
//! A fixed-supply fungible token used to exercise deployments: the whole
//! supply is minted to the admin at initialisation and afterwards only moves
//! between holders or is burned.
//!
//! Supports balances, transfers, expiring allowances (`approve` /
//! `transfer_from`) and burns. `total_supply` always equals the sum of all
//! balances.

pub mod allowance;
pub mod balance;
pub mod events;
pub mod metadata;

use allowance::AllowanceError;
use balance::BalanceError;
use common::{access, CommonError};
use metadata::{TokenMetadata, MAX_DECIMALS};
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

/// Decimals used by the deployment helper.
pub const DEPLOY_DECIMALS: u32 = 18;
/// One whole token at [`DEPLOY_DECIMALS`].
pub const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;
/// Supply minted by the deployment helper: one million whole tokens.
pub const DEPLOY_INITIAL_SUPPLY: i128 = 1_000_000 * ONE_TOKEN;

// ── Error codes ───────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    InvalidExpiration = 7,
    InvalidInput = 8,
}

impl From<CommonError> for TokenError {
    fn from(e: CommonError) -> Self {
        match e {
            CommonError::NotInitialized => TokenError::NotInitialized,
            CommonError::AlreadyInitialized => TokenError::AlreadyInitialized,
            CommonError::AccessDenied => TokenError::Unauthorized,
            CommonError::InvalidInput => TokenError::InvalidInput,
        }
    }
}

fn map_balance_error(e: BalanceError) -> TokenError {
    match e {
        BalanceError::InsufficientBalance => TokenError::InsufficientBalance,
        BalanceError::Overflow => TokenError::InvalidAmount,
    }
}

fn map_allowance_error(e: AllowanceError) -> TokenError {
    match e {
        AllowanceError::InvalidExpiration => TokenError::InvalidExpiration,
        AllowanceError::InsufficientAllowance => TokenError::InsufficientAllowance,
    }
}

fn require_non_negative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct TestTokenContract;

#[contractimpl]
impl TestTokenContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Configure the token and mint `initial_supply` to `admin`.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: i128,
    ) -> Result<(), TokenError> {
        admin.require_auth();

        if access::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        if decimals > MAX_DECIMALS || name.is_empty() || symbol.is_empty() {
            return Err(TokenError::InvalidInput);
        }
        require_non_negative(initial_supply)?;

        access::initialize(&env, &admin)?;
        metadata::write_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        balance::mint(&env, &admin, initial_supply).map_err(map_balance_error)?;

        events::publish_mint(&env, &admin, initial_supply);
        Ok(())
    }

    // ── Transfers ─────────────────────────────────────────────────────────────

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        access::require_initialized(&env)?;
        from.require_auth();
        require_non_negative(amount)?;

        balance::transfer(&env, &from, &to, amount).map_err(map_balance_error)?;

        events::publish_transfer(&env, &from, &to, amount);
        Ok(())
    }

    /// Allow `spender` to move up to `amount` of `from`'s tokens until
    /// `expiration_ledger` (inclusive). Replaces any previous allowance.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        access::require_initialized(&env)?;
        from.require_auth();
        require_non_negative(amount)?;

        allowance::write_allowance(&env, &from, &spender, amount, expiration_ledger)
            .map_err(map_allowance_error)?;

        events::publish_approve(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        access::require_initialized(&env)?;
        spender.require_auth();
        require_non_negative(amount)?;

        // A failed move must leave the allowance untouched.
        if balance::read_balance(&env, &from) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        allowance::spend_allowance(&env, &from, &spender, amount).map_err(map_allowance_error)?;
        balance::transfer(&env, &from, &to, amount).map_err(map_balance_error)?;

        events::publish_transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        access::require_initialized(&env)?;
        from.require_auth();
        require_non_negative(amount)?;

        balance::burn(&env, &from, amount).map_err(map_balance_error)?;

        events::publish_burn(&env, &from, amount);
        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        balance::read_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        allowance::read_allowance(&env, &from, &spender).amount
    }

    pub fn total_supply(env: Env) -> i128 {
        balance::total_supply(&env)
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        Ok(access::get_admin(&env)?)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Self::metadata(&env).map(|m| m.decimals)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        metadata::read_metadata(env).ok_or(TokenError::NotInitialized)
    }
}
