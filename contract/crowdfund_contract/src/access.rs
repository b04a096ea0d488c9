use soroban_sdk::{Address, Env};

use crate::ledger;
use crate::storage_types::{Campaign, Error};

pub fn is_owner(env: &Env, caller: &Address) -> bool {
    ledger::read_owner(env) == *caller
}

pub fn is_beneficiary(caller: &Address, campaign: &Campaign) -> bool {
    campaign.beneficiary == *caller
}

/// Authenticates `caller` and checks it holds the owner role.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if !is_owner(env, caller) {
        return Err(Error::NotOwner);
    }
    Ok(())
}

/// Caller must already be authenticated; campaign lookup precedes this check.
pub fn require_beneficiary(caller: &Address, campaign: &Campaign) -> Result<(), Error> {
    if !is_beneficiary(caller, campaign) {
        return Err(Error::NotBeneficiary);
    }
    Ok(())
}
