//! Storage time-to-live policy.
//!
//! Ledger counts assume ~5s per ledger.

use soroban_sdk::{Env, IntoVal, Val};

/// ~30 days.
pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
/// ~60 days.
pub const INSTANCE_TTL_EXTEND_TO: u32 = 1_036_800;

/// ~60 days.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 1_036_800;
/// ~120 days.
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 2_073_600;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

/// Bump a persistent entry. The entry must exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}
