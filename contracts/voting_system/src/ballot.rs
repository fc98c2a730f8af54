//! Proposal and voter records for the ballot, and their storage helpers.
//!
//! Scalar state (voting flag, counters) lives in instance storage next to the
//! admin. Per-voter flags and proposals are persistent entries so the
//! instance footprint stays constant as the ballot grows.

use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const VOTING_ACTIVE: Symbol = symbol_short!("V_ACTIVE");
const PROPOSAL_COUNT: Symbol = symbol_short!("PROP_CNT");
const VOTER_COUNT: Symbol = symbol_short!("VOTR_CNT");
const VOTE_COUNT: Symbol = symbol_short!("VOTE_CNT");

const PROPOSAL: Symbol = symbol_short!("PROP");
const VOTER: Symbol = symbol_short!("VOTER");
const VOTED: Symbol = symbol_short!("VOTED");

// ── Types ────────────────────────────────────────────────────────────────────

/// A named ballot option and its running tally.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: String,
    pub vote_count: u32,
}

fn proposal_key(index: u32) -> (Symbol, u32) {
    (PROPOSAL, index)
}

fn voter_key(voter: &Address) -> (Symbol, Address) {
    (VOTER, voter.clone())
}

fn voted_key(voter: &Address) -> (Symbol, Address) {
    (VOTED, voter.clone())
}

// ── Voting flag ──────────────────────────────────────────────────────────────

pub(crate) fn is_voting_active(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&VOTING_ACTIVE)
        .unwrap_or(false)
}

pub(crate) fn set_voting_active(env: &Env, active: bool) {
    env.storage().instance().set(&VOTING_ACTIVE, &active);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub(crate) fn proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&PROPOSAL_COUNT)
        .unwrap_or(0u32)
}

/// Append `proposal` and return its index, or `None` if the index space is
/// exhausted.
pub(crate) fn push_proposal(env: &Env, proposal: &Proposal) -> Option<u32> {
    let index = proposal_count(env);
    let next = index.checked_add(1)?;
    store_proposal(env, index, proposal);
    env.storage().instance().set(&PROPOSAL_COUNT, &next);
    Some(index)
}

pub(crate) fn store_proposal(env: &Env, index: u32, proposal: &Proposal) {
    let key = proposal_key(index);
    env.storage().persistent().set(&key, proposal);
    ttl::extend_persistent(env, &key);
}

pub(crate) fn load_proposal(env: &Env, index: u32) -> Option<Proposal> {
    if index >= proposal_count(env) {
        return None;
    }
    let key = proposal_key(index);
    let proposal: Option<Proposal> = env.storage().persistent().get(&key);
    if proposal.is_some() {
        ttl::extend_persistent(env, &key);
    }
    proposal
}

/// Index of the proposal with the greatest tally.
///
/// Scans in creation order and only replaces the leader on a strictly
/// greater count, so ties resolve to the lowest index.
pub(crate) fn leading_index(env: &Env) -> Option<u32> {
    let count = proposal_count(env);
    let mut leader: Option<(u32, u32)> = None;
    for index in 0..count {
        let Some(proposal) = load_proposal(env, index) else {
            continue;
        };
        match leader {
            Some((_, best)) if proposal.vote_count <= best => {}
            _ => leader = Some((index, proposal.vote_count)),
        }
    }
    leader.map(|(index, _)| index)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub(crate) fn is_registered(env: &Env, voter: &Address) -> bool {
    let key = voter_key(voter);
    let registered: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if registered {
        ttl::extend_persistent(env, &key);
    }
    registered
}

/// Register `voter`. Returns `false` when the voter was already present.
pub(crate) fn register(env: &Env, voter: &Address) -> bool {
    if is_registered(env, voter) {
        return false;
    }
    let key = voter_key(voter);
    env.storage().persistent().set(&key, &true);
    ttl::extend_persistent(env, &key);

    let count = voter_count(env).saturating_add(1);
    env.storage().instance().set(&VOTER_COUNT, &count);
    true
}

pub(crate) fn voter_count(env: &Env) -> u32 {
    env.storage().instance().get(&VOTER_COUNT).unwrap_or(0u32)
}

pub(crate) fn has_voted(env: &Env, voter: &Address) -> bool {
    let key = voted_key(voter);
    let voted: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if voted {
        ttl::extend_persistent(env, &key);
    }
    voted
}

/// Mark `voter` as having voted and bump the ballot-wide vote counter.
pub(crate) fn record_vote(env: &Env, voter: &Address) {
    let key = voted_key(voter);
    env.storage().persistent().set(&key, &true);
    ttl::extend_persistent(env, &key);

    let total = total_votes(env).saturating_add(1);
    env.storage().instance().set(&VOTE_COUNT, &total);
}

pub(crate) fn total_votes(env: &Env) -> u32 {
    env.storage().instance().get(&VOTE_COUNT).unwrap_or(0u32)
}
