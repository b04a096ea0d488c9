use soroban_sdk::{token, Address, Env};

use crate::ledger;

/// Pulls `amount` from `from` into the contract.
pub fn collect(env: &Env, from: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::Client::new(env, &ledger::read_token(env));
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pays `amount` out of the contract. Callers must have already cleared the
/// bookkeeping entry backing this amount.
pub fn payout(env: &Env, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::Client::new(env, &ledger::read_token(env));
    token_client.transfer(&env.current_contract_address(), recipient, &amount);
}
