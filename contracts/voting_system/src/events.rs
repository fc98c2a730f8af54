//! Events emitted by the ballot contract.
//!
//! Every successful state change publishes exactly one event under the
//! `("BALLOT", <action>)` topic pair.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

fn emit<T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, action: Symbol, data: T) {
    #[allow(deprecated)]
    env.events().publish((symbol_short!("BALLOT"), action), data);
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingToggledEvent {
    pub admin: Address,
    pub active: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterAddedEvent {
    pub voter: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreatedEvent {
    pub index: u32,
    pub name: String,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub proposal_index: u32,
    /// Tally of the proposal after this vote.
    pub vote_count: u32,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: &Address) {
    emit(
        env,
        symbol_short!("init"),
        InitializedEvent {
            admin: admin.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_voting_toggled(env: &Env, admin: &Address, active: bool) {
    emit(
        env,
        symbol_short!("toggled"),
        VotingToggledEvent {
            admin: admin.clone(),
            active,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_voter_added(env: &Env, voter: &Address) {
    emit(
        env,
        symbol_short!("voter_add"),
        VoterAddedEvent {
            voter: voter.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_proposal_created(env: &Env, index: u32, name: &String) {
    emit(
        env,
        symbol_short!("prop_new"),
        ProposalCreatedEvent {
            index,
            name: name.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_vote_cast(env: &Env, voter: &Address, proposal_index: u32, vote_count: u32) {
    emit(
        env,
        symbol_short!("voted"),
        VoteCastEvent {
            voter: voter.clone(),
            proposal_index,
            vote_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}
