use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

const METADATA: Symbol = symbol_short!("META");

/// Largest `decimals` value accepted at initialisation.
pub const MAX_DECIMALS: u32 = 18;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

pub fn write_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&METADATA, metadata);
}

pub fn read_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&METADATA)
}
