use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStartedEvent {
    pub campaign_id: CampaignId,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64,
}

/// `amount` is the credited portion only; overshoot is not reported here.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalAchievedEvent {
    pub campaign_id: CampaignId,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerPoolWithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_started"),), event);
}

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution"),), event);
}

pub fn emit_goal_achieved(env: &Env, event: GoalAchievedEvent) {
    env.events()
        .publish((Symbol::new(env, "goal_achieved"),), event);
}

pub fn emit_refund_claimed(env: &Env, event: RefundClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "refund_claimed"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_withdrawn"),), event);
}

pub fn emit_owner_pool_withdrawn(env: &Env, event: OwnerPoolWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "owner_pool_withdrawn"),), event);
}
