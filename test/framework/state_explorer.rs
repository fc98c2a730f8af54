//! # State Space Explorer
//!
//! Systematically explores reachable ballot states by executing action
//! sequences and verifying invariants after every transition.
//!
//! ## Design
//!
//! Each explored state is a `BallotSnapshot`; edges are `BallotAction`s.
//! Snapshot invariants run on every state and transition invariants on every
//! edge. Alongside the invariants the explorer keeps a reference model of
//! who has voted and which proposals exist, and flags any action whose
//! outcome disagrees with it.
//!
//! ## Complexity
//!
//! - Time: O(S × (I + P + U)) for S steps, I invariants, P proposals and
//!   U tracked users, since each snapshot reads every proposal and user.
//! - Space: O(S × (P + U)) when snapshots are recorded.

extern crate std;

use soroban_sdk::{Address, String as SorobanString};
use std::string::String;
use std::vec::Vec;
use voting_system::VotingError;

use super::generators::BallotAction;
use super::invariants::{InvariantSet, TransitionInvariantSet};
use super::{ActionOutcome, BallotSnapshot, BallotTestHarness, TestRunSummary};

// ── Explorer Configuration ───────────────────────────────────────────────────

/// Configuration for state-space exploration.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Maximum number of actions to execute in a single exploration run.
    pub max_steps: usize,
    /// Whether to halt on the first invariant violation (fail-fast).
    pub fail_fast: bool,
    /// Whether to record snapshots for later analysis.
    pub record_snapshots: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            fail_fast: true,
            record_snapshots: false,
        }
    }
}

// ── Exploration Result ───────────────────────────────────────────────────────

/// Full result of an exploration run.
#[derive(Debug)]
pub struct ExplorationResult {
    pub summary: TestRunSummary,
    pub snapshots: Vec<BallotSnapshot>,
    pub action_log: Vec<(BallotAction, ActionOutcome)>,
}

impl ExplorationResult {
    pub fn passed(&self) -> bool {
        self.summary.passed()
    }

    /// Number of actions that completed successfully.
    pub fn successes(&self) -> usize {
        self.action_log.iter().filter(|(_, o)| o.is_ok()).count()
    }
}

// ── Reference Model ──────────────────────────────────────────────────────────

/// Minimal model of the ballot used to predict each action's outcome.
#[derive(Debug, Clone, Default)]
struct BallotModel {
    active: bool,
    proposals: u32,
    registered: Vec<bool>,
    voted: Vec<bool>,
}

impl BallotModel {
    fn new(users: usize) -> Self {
        Self {
            active: false,
            proposals: 0,
            registered: std::vec![false; users],
            voted: std::vec![false; users],
        }
    }

    /// Expected result of `action`, mirroring the contract's check order.
    fn expect(&self, action: &BallotAction, users: usize) -> Result<(), VotingError> {
        match action {
            BallotAction::ToggleVoting
            | BallotAction::AddVoter { .. } => Ok(()),
            BallotAction::CreateProposal { name } => {
                if name.is_empty() {
                    Err(VotingError::InvalidInput)
                } else {
                    Ok(())
                }
            }
            BallotAction::Vote { user_index, proposal_index } => {
                let u = user_index % users;
                if !self.active {
                    Err(VotingError::VotingNotActive)
                } else if !self.registered[u] {
                    Err(VotingError::NotRegisteredVoter)
                } else if self.voted[u] {
                    Err(VotingError::AlreadyVoted)
                } else if *proposal_index >= self.proposals {
                    Err(VotingError::InvalidProposal)
                } else {
                    Ok(())
                }
            }
            BallotAction::StrangerToggle { .. }
            | BallotAction::StrangerAddVoter { .. }
            | BallotAction::StrangerCreateProposal { .. } => Err(VotingError::Unauthorized),
        }
    }

    fn apply(&mut self, action: &BallotAction, users: usize) {
        match action {
            BallotAction::ToggleVoting => self.active = !self.active,
            BallotAction::AddVoter { user_index } => self.registered[user_index % users] = true,
            BallotAction::CreateProposal { .. } => self.proposals += 1,
            BallotAction::Vote { user_index, .. } => self.voted[user_index % users] = true,
            _ => {}
        }
    }
}

// ── State Space Explorer ─────────────────────────────────────────────────────

/// Executes action sequences against a ballot contract, checking invariants
/// after every transition.
///
/// Tracks coverage metrics including entry points hit, error codes observed
/// and transitions observed.
pub struct StateExplorer<'a> {
    harness: &'a BallotTestHarness,
    invariants: InvariantSet,
    transitions: TransitionInvariantSet,
    config: ExplorerConfig,
    users: Vec<Address>,
    model: BallotModel,
}

impl<'a> StateExplorer<'a> {
    /// Create an explorer for the given harness and user pool.
    ///
    /// The harness must be freshly deployed so the reference model starts in
    /// sync with the contract.
    ///
    /// # Panics
    /// If `users` is empty, since user-indexed actions pick from the pool.
    pub fn new(
        harness: &'a BallotTestHarness,
        invariants: InvariantSet,
        transitions: TransitionInvariantSet,
        config: ExplorerConfig,
        users: Vec<Address>,
    ) -> Self {
        assert!(!users.is_empty(), "StateExplorer needs at least one pool user");
        let model = BallotModel::new(users.len());
        Self {
            harness,
            invariants,
            transitions,
            config,
            users,
            model,
        }
    }

    /// Create an explorer with default configuration and built-in invariants.
    pub fn with_defaults(harness: &'a BallotTestHarness, users: Vec<Address>) -> Self {
        Self::new(
            harness,
            InvariantSet::ballot_defaults(),
            TransitionInvariantSet::ballot_defaults(),
            ExplorerConfig::default(),
            users,
        )
    }

    /// Execute a sequence of actions, checking invariants after each.
    pub fn explore(&mut self, actions: &[BallotAction]) -> ExplorationResult {
        let mut summary = TestRunSummary::new();
        let mut snapshots = Vec::new();
        let mut action_log = Vec::new();

        let mut previous = self.harness.snapshot(&self.users);
        if self.config.record_snapshots {
            snapshots.push(previous.clone());
        }

        let steps = actions.len().min(self.config.max_steps);

        for action in actions.iter().take(steps) {
            let expected = self.model.expect(action, self.users.len());
            let outcome = self.execute_action(action);

            summary.entry_points_hit.insert(action_entry_point(action));
            summary.actions_executed += 1;
            summary.transitions_observed += 1;
            if let ActionOutcome::ExpectedError(code) = &outcome {
                summary.errors_observed.insert(*code);
            }

            let mut violations: Vec<(String, String)> = Vec::new();
            if let Some(msg) = outcome_mismatch(&expected, &outcome) {
                violations.push(("outcome matches reference model".into(), msg));
            }
            if outcome.is_ok() {
                self.model.apply(action, self.users.len());
            }

            let snapshot = self.harness.snapshot(&self.users);
            violations.extend(self.invariants.check_all(&snapshot));
            violations.extend(self.transitions.check_all(&previous, &snapshot));
            summary.invariant_checks += 1;

            action_log.push((action.clone(), outcome));

            let failed = !violations.is_empty();
            for (name, msg) in violations {
                summary.invariant_violations.push(std::format!(
                    "After action #{} ({:?}): [{}] {}",
                    summary.actions_executed,
                    action,
                    name,
                    msg
                ));
            }

            if self.config.record_snapshots {
                snapshots.push(snapshot.clone());
            }
            if failed && self.config.fail_fast {
                break;
            }
            previous = snapshot;
        }

        ExplorationResult {
            summary,
            snapshots,
            action_log,
        }
    }

    fn user(&self, index: usize) -> &Address {
        &self.users[index % self.users.len()]
    }

    /// Execute a single action against the harness, returning the outcome.
    fn execute_action(&self, action: &BallotAction) -> ActionOutcome {
        let client = &self.harness.client;
        let admin = &self.harness.admin;
        let env = &self.harness.env.env;

        match action {
            BallotAction::ToggleVoting => to_outcome(client.try_toggle_voting(admin)),
            BallotAction::AddVoter { user_index } => {
                to_outcome(client.try_add_voter(admin, self.user(*user_index)))
            }
            BallotAction::CreateProposal { name } => to_outcome(
                client.try_create_proposal(admin, &SorobanString::from_str(env, name)),
            ),
            BallotAction::Vote {
                user_index,
                proposal_index,
            } => to_outcome(client.try_vote(self.user(*user_index), proposal_index)),
            BallotAction::StrangerToggle { user_index } => {
                to_outcome(client.try_toggle_voting(self.user(*user_index)))
            }
            BallotAction::StrangerAddVoter { user_index } => {
                let user = self.user(*user_index);
                to_outcome(client.try_add_voter(user, user))
            }
            BallotAction::StrangerCreateProposal { user_index } => to_outcome(
                client.try_create_proposal(
                    self.user(*user_index),
                    &SorobanString::from_str(env, "Hijack"),
                ),
            ),
        }
    }
}

/// Collapse a `try_*` client result into an `ActionOutcome`.
fn to_outcome<T, C, I>(result: Result<Result<T, C>, Result<VotingError, I>>) -> ActionOutcome
where
    I: core::fmt::Debug,
{
    match result {
        Ok(_) => ActionOutcome::Ok,
        Err(Ok(e)) => ActionOutcome::ExpectedError(e as u32),
        Err(Err(e)) => ActionOutcome::UnexpectedError(std::format!("{:?}", e)),
    }
}

fn outcome_mismatch(expected: &Result<(), VotingError>, actual: &ActionOutcome) -> Option<String> {
    match (expected, actual) {
        (Ok(()), ActionOutcome::Ok) => None,
        (Err(e), ActionOutcome::ExpectedError(code)) if *e as u32 == *code => None,
        (exp, act) => Some(std::format!("expected {:?}, got {:?}", exp, act)),
    }
}

/// Map a ballot action to its entry point name for coverage tracking.
fn action_entry_point(action: &BallotAction) -> String {
    match action {
        BallotAction::ToggleVoting | BallotAction::StrangerToggle { .. } => "toggle_voting".into(),
        BallotAction::AddVoter { .. } | BallotAction::StrangerAddVoter { .. } => {
            "add_voter".into()
        }
        BallotAction::CreateProposal { .. } | BallotAction::StrangerCreateProposal { .. } => {
            "create_proposal".into()
        }
        BallotAction::Vote { .. } => "vote".into(),
    }
}

/// The complete set of mutating ballot entry points, for coverage calculation.
pub const BALLOT_ENTRY_POINTS: &[&str] = &["toggle_voting", "add_voter", "create_proposal", "vote"];
