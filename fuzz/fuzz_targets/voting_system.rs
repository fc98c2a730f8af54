#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};
use voting_system::{VotingError, VotingSystemContract, VotingSystemContractClient};

/// Actions covering every mutating ballot entry point.
///
/// `caller` picks from a small pool where slot 0 is the admin, so privileged
/// calls are exercised from both sides of the access check.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    ToggleVoting { caller: u8 },
    AddVoter { caller: u8, voter: u8 },
    CreateProposal { caller: u8, name_len: u8 },
    Vote { voter: u8, proposal: u8 },
}

const POOL: usize = 5;
const NAME: &str = "abcdefghijklmnopqrstuvwxyz";

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(VotingSystemContract, ());
    let client = VotingSystemContractClient::new(&env, &contract_id);

    if client.try_initialize(&admin).is_err() {
        return;
    }

    let mut users = vec![admin.clone()];
    for _ in 1..POOL {
        users.push(Address::generate(&env));
    }
    let pick = |i: u8| &users[i as usize % POOL];

    for action in actions {
        let votes_before = client.total_votes();
        let proposals_before = client.proposal_count();

        match action {
            FuzzAction::ToggleVoting { caller } => {
                let was = client.voting_active();
                let res = client.try_toggle_voting(pick(caller));
                if res.is_ok() {
                    assert_ne!(was, client.voting_active(), "toggle did not flip");
                }
            }
            FuzzAction::AddVoter { caller, voter } => {
                let res = client.try_add_voter(pick(caller), pick(voter));
                if pick(caller) != &admin {
                    assert_eq!(res, Err(Ok(VotingError::Unauthorized)));
                }
            }
            FuzzAction::CreateProposal { caller, name_len } => {
                let len = name_len as usize % (NAME.len() + 1);
                let name = String::from_str(&env, &NAME[..len]);
                let res = client.try_create_proposal(pick(caller), &name);
                if let Ok(Ok(index)) = res {
                    assert_eq!(index, proposals_before, "proposal index out of order");
                }
            }
            FuzzAction::Vote { voter, proposal } => {
                let v = pick(voter);
                let had_voted = client.has_voted(v);
                let res = client.try_vote(v, &(proposal as u32));
                if had_voted {
                    assert!(res.is_err(), "INVARIANT VIOLATION: double vote accepted");
                }
                if res.is_ok() {
                    assert!(client.voters(v), "INVARIANT VIOLATION: unregistered vote");
                    assert!(client.has_voted(v));
                }
            }
        }

        // ── Post-action invariant checks ──
        let total = client.total_votes();
        assert!(
            total == votes_before || total == votes_before + 1,
            "INVARIANT VIOLATION: total_votes jumped {} -> {}",
            votes_before,
            total
        );

        let count = client.proposal_count();
        assert!(count >= proposals_before, "INVARIANT VIOLATION: proposals shrank");

        let mut sum = 0u32;
        for i in 0..count {
            sum += client.proposals(&i).vote_count;
        }
        assert_eq!(sum, total, "INVARIANT VIOLATION: tallies != total_votes");

        let voted = users.iter().filter(|u| client.has_voted(u)).count() as u32;
        assert_eq!(voted, total, "INVARIANT VIOLATION: voted flags != total_votes");
        assert!(total <= client.voter_count());

        if count == 0 {
            assert_eq!(
                client.try_winning_proposal_index(),
                Err(Ok(VotingError::NoProposals))
            );
        } else {
            let w = client.winning_proposal_index();
            let best = client.proposals(&w).vote_count;
            for i in 0..count {
                let c = client.proposals(&i).vote_count;
                assert!(c < best || (c == best && i >= w), "winner is not maximal");
            }
        }
    }
});
