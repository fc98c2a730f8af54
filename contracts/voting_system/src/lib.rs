#![no_std]

//! # Voting System
//!
//! A single-ballot registry administered by one address:
//!
//! - The **admin** is fixed at initialisation and is the only address that
//!   may open/close voting, register voters and create proposals.
//! - **Voters** are registered explicitly and may cast exactly one vote over
//!   the lifetime of the ballot.
//! - **Proposals** are append-only and indexed from 0 in creation order.
//! - The **winning proposal** is the one with the greatest tally; ties go to
//!   the lowest index.
//!
//! ## Vote checks
//! A vote is accepted only when every check below passes, evaluated in this
//! order:
//!
//! | Check                        | Error                |
//! |------------------------------|----------------------|
//! | voting is active             | `VotingNotActive`    |
//! | caller is a registered voter | `NotRegisteredVoter` |
//! | caller has not voted before  | `AlreadyVoted`       |
//! | proposal index exists        | `InvalidProposal`    |

pub mod ballot;
pub mod events;

use common::{access, CommonError};
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub use ballot::Proposal;

// ── Error codes ───────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VotingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    VotingNotActive = 4,
    NotRegisteredVoter = 5,
    AlreadyVoted = 6,
    InvalidProposal = 7,
    NoProposals = 8,
    InvalidInput = 9,
}

impl From<CommonError> for VotingError {
    fn from(e: CommonError) -> Self {
        match e {
            CommonError::NotInitialized => VotingError::NotInitialized,
            CommonError::AlreadyInitialized => VotingError::AlreadyInitialized,
            CommonError::AccessDenied => VotingError::Unauthorized,
            CommonError::InvalidInput => VotingError::InvalidInput,
        }
    }
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct VotingSystemContract;

#[contractimpl]
impl VotingSystemContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Bootstrap the ballot with `admin` as its permanent administrator.
    ///
    /// Voting starts closed and there are no voters or proposals.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        admin.require_auth();
        access::initialize(&env, &admin)?;
        ballot::set_voting_active(&env, false);

        events::publish_initialized(&env, &admin);
        Ok(())
    }

    // ── Admin operations ──────────────────────────────────────────────────────

    /// Flip the voting-active flag and return the new state.
    pub fn toggle_voting(env: Env, caller: Address) -> Result<bool, VotingError> {
        Self::require_admin(&env, &caller)?;

        let active = !ballot::is_voting_active(&env);
        ballot::set_voting_active(&env, active);

        events::publish_voting_toggled(&env, &caller, active);
        Ok(active)
    }

    /// Register `voter`.
    ///
    /// Registering an address twice is a no-op: it neither fails nor clears a
    /// vote that address has already cast.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;

        if ballot::register(&env, &voter) {
            events::publish_voter_added(&env, &voter);
        }
        Ok(())
    }

    /// Append a proposal with a zero tally and return its index.
    pub fn create_proposal(env: Env, caller: Address, name: String) -> Result<u32, VotingError> {
        Self::require_admin(&env, &caller)?;

        if name.is_empty() {
            return Err(VotingError::InvalidInput);
        }

        let proposal = Proposal {
            name: name.clone(),
            vote_count: 0,
        };
        let index = ballot::push_proposal(&env, &proposal).ok_or(VotingError::InvalidInput)?;

        events::publish_proposal_created(&env, index, &name);
        Ok(index)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast `voter`'s single vote for the proposal at `proposal_index`.
    pub fn vote(env: Env, voter: Address, proposal_index: u32) -> Result<(), VotingError> {
        access::require_initialized(&env)?;
        voter.require_auth();

        if !ballot::is_voting_active(&env) {
            return Err(VotingError::VotingNotActive);
        }
        if !ballot::is_registered(&env, &voter) {
            return Err(VotingError::NotRegisteredVoter);
        }
        if ballot::has_voted(&env, &voter) {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            ballot::load_proposal(&env, proposal_index).ok_or(VotingError::InvalidProposal)?;
        proposal.vote_count = proposal
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::InvalidInput)?;

        ballot::store_proposal(&env, proposal_index, &proposal);
        ballot::record_vote(&env, &voter);

        events::publish_vote_cast(&env, &voter, proposal_index, proposal.vote_count);
        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Result<Address, VotingError> {
        Ok(access::get_admin(&env)?)
    }

    pub fn is_initialized(env: Env) -> bool {
        access::is_initialized(&env)
    }

    pub fn voting_active(env: Env) -> bool {
        ballot::is_voting_active(&env)
    }

    /// Whether `voter` has been registered by the admin.
    pub fn voters(env: Env, voter: Address) -> bool {
        ballot::is_registered(&env, &voter)
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        ballot::has_voted(&env, &voter)
    }

    pub fn proposals(env: Env, index: u32) -> Result<Proposal, VotingError> {
        ballot::load_proposal(&env, index).ok_or(VotingError::InvalidProposal)
    }

    pub fn proposal_count(env: Env) -> u32 {
        ballot::proposal_count(&env)
    }

    /// Number of distinct registered voters.
    pub fn voter_count(env: Env) -> u32 {
        ballot::voter_count(&env)
    }

    /// Number of votes successfully cast so far.
    pub fn total_votes(env: Env) -> u32 {
        ballot::total_votes(&env)
    }

    /// Name of the leading proposal. See [`Self::winning_proposal_index`].
    pub fn winning_proposal(env: Env) -> Result<String, VotingError> {
        let index = ballot::leading_index(&env).ok_or(VotingError::NoProposals)?;
        let proposal = ballot::load_proposal(&env, index).ok_or(VotingError::InvalidProposal)?;
        Ok(proposal.name)
    }

    /// Index of the proposal with the greatest tally, lowest index on ties.
    ///
    /// With no votes cast the first proposal leads.
    pub fn winning_proposal_index(env: Env) -> Result<u32, VotingError> {
        ballot::leading_index(&env).ok_or(VotingError::NoProposals)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
        access::require_initialized(env)?;
        caller.require_auth();
        access::require_admin(env, caller)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
