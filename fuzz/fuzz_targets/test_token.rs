#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::Address as _,
    Address, Env, String,
};
use test_token::{TestTokenContract, TestTokenContractClient};

/// Actions covering the token's balance-moving entry points.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Transfer { from: u8, to: u8, amount: u32 },
    Approve { from: u8, spender: u8, amount: u32, ttl: u8 },
    TransferFrom { spender: u8, from: u8, to: u8, amount: u32 },
    Burn { from: u8, amount: u32 },
}

const POOL: usize = 4;
const SUPPLY: i128 = 1_000_000;

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(TestTokenContract, ());
    let client = TestTokenContractClient::new(&env, &contract_id);

    if client
        .try_initialize(
            &admin,
            &String::from_str(&env, "TestToken"),
            &String::from_str(&env, "TST"),
            &7u32,
            &SUPPLY,
        )
        .is_err()
    {
        return;
    }

    let mut users = vec![admin.clone()];
    for _ in 1..POOL {
        users.push(Address::generate(&env));
    }
    let pick = |i: u8| &users[i as usize % POOL];

    let mut burned: i128 = 0;

    for action in actions {
        match action {
            FuzzAction::Transfer { from, to, amount } => {
                let _ = client.try_transfer(pick(from), pick(to), &(amount as i128));
            }
            FuzzAction::Approve { from, spender, amount, ttl } => {
                let exp = env.ledger().sequence().saturating_add(ttl as u32);
                let _ = client.try_approve(pick(from), pick(spender), &(amount as i128), &exp);
            }
            FuzzAction::TransferFrom { spender, from, to, amount } => {
                let before = client.allowance(pick(from), pick(spender));
                let res =
                    client.try_transfer_from(pick(spender), pick(from), pick(to), &(amount as i128));
                if res.is_err() {
                    assert_eq!(
                        before,
                        client.allowance(pick(from), pick(spender)),
                        "INVARIANT VIOLATION: failed transfer_from consumed allowance"
                    );
                }
            }
            FuzzAction::Burn { from, amount } => {
                if client.try_burn(pick(from), &(amount as i128)).is_ok() {
                    burned += amount as i128;
                }
            }
        }

        // ── Post-action invariant checks ──
        let total = client.total_supply();
        assert_eq!(total, SUPPLY - burned, "INVARIANT VIOLATION: supply drifted");

        let mut sum = 0i128;
        for u in &users {
            let b = client.balance(u);
            assert!(b >= 0, "INVARIANT VIOLATION: negative balance");
            sum += b;
        }
        assert_eq!(sum, total, "INVARIANT VIOLATION: balances != total_supply");
    }
});
