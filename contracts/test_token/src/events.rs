//! Events emitted by the test token.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

fn emit<T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, action: Symbol, data: T) {
    #[allow(deprecated)]
    env.events().publish((symbol_short!("TOKEN"), action), data);
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnEvent {
    pub from: Address,
    pub amount: i128,
}

pub fn publish_mint(env: &Env, to: &Address, amount: i128) {
    emit(
        env,
        symbol_short!("mint"),
        MintEvent {
            to: to.clone(),
            amount,
        },
    );
}

pub fn publish_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    emit(
        env,
        symbol_short!("transfer"),
        TransferEvent {
            from: from.clone(),
            to: to.clone(),
            amount,
        },
    );
}

pub fn publish_approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    emit(
        env,
        symbol_short!("approve"),
        ApproveEvent {
            from: from.clone(),
            spender: spender.clone(),
            amount,
            expiration_ledger,
        },
    );
}

pub fn publish_burn(env: &Env, from: &Address, amount: i128) {
    emit(
        env,
        symbol_short!("burn"),
        BurnEvent {
            from: from.clone(),
            amount,
        },
    );
}
