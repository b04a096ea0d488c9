#![no_std]


mod access;
mod events;
mod ledger;
mod lifecycle;
mod settlement;
mod storage_types;

pub use events::{
    CampaignStartedEvent, ContributionEvent, FundsWithdrawnEvent, GoalAchievedEvent,
    OwnerPoolWithdrawnEvent, RefundClaimedEvent,
};
pub use storage_types::{Campaign, CampaignId, CampaignState, Error};

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Fix the owner and the asset every campaign is denominated in.
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        ledger::write_config(&env, &owner, &token);
    }

    /// Open a campaign for `beneficiary`. Owner only.
    ///
    /// `deadline` is a ledger timestamp and must lie strictly in the future.
    /// Returns the new campaign id.
    pub fn start_campaign(
        env: Env,
        caller: Address,
        beneficiary: Address,
        goal: i128,
        deadline: u64,
    ) -> Result<CampaignId, Error> {
        access::require_owner(&env, &caller)?;
        lifecycle::validate_new_campaign(env.ledger().timestamp(), goal, deadline)?;

        let campaign = ledger::allocate_campaign(&env, beneficiary, goal, deadline)?;

        log!(&env, "campaign started", campaign.id, goal, deadline);
        events::emit_campaign_started(
            &env,
            CampaignStartedEvent {
                campaign_id: campaign.id,
                beneficiary: campaign.beneficiary,
                goal,
                deadline,
            },
        );

        Ok(campaign.id)
    }

    /// Send `value` toward a campaign's goal.
    ///
    /// Only the part that fits under the goal is credited to the contributor;
    /// the rest goes to the owner pool. Returns the credited amount.
    pub fn fund_campaign(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
        value: i128,
    ) -> Result<i128, Error> {
        contributor.require_auth();
        if value < 0 {
            return Err(Error::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut campaign = ledger::load_active_campaign(&env, campaign_id)?;
        lifecycle::ensure_fundable(&campaign, &contributor, now)?;

        let split = ledger::split_contribution(&campaign, value);
        ledger::record_contribution(&env, &mut campaign, &contributor, split)?;
        settlement::collect(&env, &contributor, value);

        log!(&env, "contribution", campaign_id, split.credited, split.overshoot);
        events::emit_contribution(
            &env,
            ContributionEvent {
                campaign_id,
                contributor,
                amount: split.credited,
            },
        );

        if campaign.goal_achieved {
            log!(&env, "goal achieved", campaign_id);
            events::emit_goal_achieved(&env, GoalAchievedEvent { campaign_id });
        }

        Ok(split.credited)
    }

    /// Return a contributor's credited amount once an unsuccessful campaign
    /// has ended. Returns the refunded amount.
    pub fn claim_refund(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
    ) -> Result<i128, Error> {
        contributor.require_auth();

        let now = env.ledger().timestamp();
        let campaign = ledger::load_active_campaign(&env, campaign_id)?;
        lifecycle::ensure_refundable(&campaign, now)?;

        let amount = ledger::take_contribution(&env, campaign_id, &contributor)?;
        settlement::payout(&env, &contributor, amount);

        log!(&env, "refund claimed", campaign_id, amount);
        events::emit_refund_claimed(
            &env,
            RefundClaimedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(amount)
    }

    /// Pay exactly the goal to the beneficiary of an achieved campaign.
    ///
    /// After this the campaign id reports `CampaignNotFound` to every
    /// further call.
    pub fn withdraw_amount(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<i128, Error> {
        caller.require_auth();

        let mut campaign = ledger::load_active_campaign(&env, campaign_id)?;
        access::require_beneficiary(&caller, &campaign)?;
        lifecycle::ensure_withdrawable(&campaign)?;

        campaign.withdrawn = true;
        ledger::save_campaign(&env, &campaign);
        settlement::payout(&env, &campaign.beneficiary, campaign.goal);

        log!(&env, "funds withdrawn", campaign_id, campaign.goal);
        events::emit_funds_withdrawn(
            &env,
            FundsWithdrawnEvent {
                campaign_id,
                beneficiary: campaign.beneficiary,
                amount: campaign.goal,
            },
        );

        Ok(campaign.goal)
    }

    /// Drain the accumulated overshoot to the owner. An empty pool is not an
    /// error; the call transfers nothing and returns zero.
    pub fn withdraw_owner_pool(env: Env, caller: Address) -> Result<i128, Error> {
        access::require_owner(&env, &caller)?;

        let amount = ledger::take_owner_pool(&env);
        settlement::payout(&env, &caller, amount);

        log!(&env, "owner pool withdrawn", amount);
        events::emit_owner_pool_withdrawn(
            &env,
            OwnerPoolWithdrawnEvent {
                owner: caller,
                amount,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn get_owner(env: Env) -> Address {
        ledger::read_owner(&env)
    }

    pub fn get_token(env: Env) -> Address {
        ledger::read_token(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        ledger::load_campaign(&env, campaign_id)
    }

    pub fn campaign_state(env: Env, campaign_id: CampaignId) -> Result<CampaignState, Error> {
        let campaign = ledger::load_campaign(&env, campaign_id)?;
        Ok(lifecycle::state_at(&campaign, env.ledger().timestamp()))
    }

    pub fn get_contribution(env: Env, campaign_id: CampaignId, contributor: Address) -> i128 {
        ledger::contribution_of(&env, campaign_id, &contributor)
    }

    pub fn get_owner_pool(env: Env) -> i128 {
        ledger::owner_pool(&env)
    }

    pub fn campaign_count(env: Env) -> u64 {
        ledger::next_campaign_id(&env)
    }
}
