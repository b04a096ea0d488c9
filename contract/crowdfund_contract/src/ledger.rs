//! Campaign, contribution and owner-pool bookkeeping.
//!
//! Every balance the contract holds is accounted for here: the sum of the
//! outstanding contribution records of unsettled campaigns plus the owner
//! pool always equals the contract's token balance.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, Error, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
    TTL_THRESHOLD,
};

/// How a single contribution divides at the goal boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Split {
    pub credited: i128,
    pub overshoot: i128,
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn write_config(env: &Env, owner: &Address, token: &Address) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Owner, owner);
    storage.set(&DataKey::Token, token);
    storage.set(&DataKey::NextCampaignId, &0u64);
    storage.set(&DataKey::OwnerPool, &0i128);
    extend_instance(env);
}

pub fn read_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn read_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(0)
}

pub fn owner_pool(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::OwnerPool)
        .unwrap_or(0)
}

/// Stores a fresh campaign under the next sequential id.
pub fn allocate_campaign(
    env: &Env,
    beneficiary: Address,
    goal: i128,
    deadline: u64,
) -> Result<Campaign, Error> {
    let id = next_campaign_id(env);
    let next = id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;

    let campaign = Campaign {
        id,
        beneficiary,
        goal,
        deadline,
        raised: 0,
        goal_achieved: false,
        withdrawn: false,
    };

    save_campaign(env, &campaign);
    env.storage().instance().set(&DataKey::NextCampaignId, &next);
    extend_instance(env);

    Ok(campaign)
}

/// Any allocated campaign, settled ones included.
pub fn load_campaign(env: &Env, id: CampaignId) -> Result<Campaign, Error> {
    if id >= next_campaign_id(env) {
        return Err(Error::CampaignNotFound);
    }
    extend_instance(env);

    let key = PersistentKey::Campaign(id);
    let campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    extend_persistent(env, &key);
    Ok(campaign)
}

/// A campaign that can still be acted upon. Once the beneficiary has
/// withdrawn, the id reports `CampaignNotFound` to every mutating call.
pub fn load_active_campaign(env: &Env, id: CampaignId) -> Result<Campaign, Error> {
    let campaign = load_campaign(env, id)?;
    if campaign.withdrawn {
        return Err(Error::CampaignNotFound);
    }
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Reading a record keeps it live, so an idle refund stays claimable.
pub fn contribution_of(env: &Env, id: CampaignId, contributor: &Address) -> i128 {
    let key = PersistentKey::Contribution(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            extend_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Splits `value` at the remaining room under the goal.
pub fn split_contribution(campaign: &Campaign, value: i128) -> Split {
    let room = (campaign.goal - campaign.raised).max(0);
    let credited = value.min(room);
    Split {
        credited,
        overshoot: value - credited,
    }
}

/// Applies a split to the campaign, the contributor's record and the owner
/// pool. All sums are computed before the first write.
pub fn record_contribution(
    env: &Env,
    campaign: &mut Campaign,
    contributor: &Address,
    split: Split,
) -> Result<(), Error> {
    let raised = campaign
        .raised
        .checked_add(split.credited)
        .ok_or(Error::ArithmeticOverflow)?;
    let record = contribution_of(env, campaign.id, contributor)
        .checked_add(split.credited)
        .ok_or(Error::ArithmeticOverflow)?;
    let pool = owner_pool(env)
        .checked_add(split.overshoot)
        .ok_or(Error::ArithmeticOverflow)?;

    campaign.raised = raised;
    if campaign.raised == campaign.goal {
        campaign.goal_achieved = true;
    }
    save_campaign(env, campaign);

    if split.credited > 0 {
        let key = PersistentKey::Contribution(campaign.id, contributor.clone());
        env.storage().persistent().set(&key, &record);
        extend_persistent(env, &key);
    }

    if split.overshoot > 0 {
        env.storage().instance().set(&DataKey::OwnerPool, &pool);
        extend_instance(env);
    }

    Ok(())
}

/// Clears the contributor's record and returns what it held.
pub fn take_contribution(
    env: &Env,
    id: CampaignId,
    contributor: &Address,
) -> Result<i128, Error> {
    let amount = contribution_of(env, id, contributor);
    if amount == 0 {
        return Err(Error::NoContribution);
    }
    env.storage()
        .persistent()
        .remove(&PersistentKey::Contribution(id, contributor.clone()));
    Ok(amount)
}

/// Drains the owner pool to zero and returns the drained amount.
pub fn take_owner_pool(env: &Env) -> i128 {
    let amount = owner_pool(env);
    env.storage().instance().set(&DataKey::OwnerPool, &0i128);
    extend_instance(env);
    amount
}
