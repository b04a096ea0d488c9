use soroban_sdk::Address;

use crate::storage_types::{Campaign, CampaignState, Error};

/// Validates the parameters of a new campaign against the current time.
pub fn validate_new_campaign(now: u64, goal: i128, deadline: u64) -> Result<(), Error> {
    if deadline <= now {
        return Err(Error::InvalidDeadline);
    }
    if goal <= 0 {
        return Err(Error::InvalidGoal);
    }
    Ok(())
}

pub fn has_ended(campaign: &Campaign, now: u64) -> bool {
    now >= campaign.deadline
}

/// Derives where a campaign sits in its lifecycle at `now`.
///
/// Achieved wins over an elapsed deadline: a funded campaign stays
/// withdrawable forever, it never turns into an expired one.
pub fn state_at(campaign: &Campaign, now: u64) -> CampaignState {
    if campaign.withdrawn {
        CampaignState::Settled
    } else if campaign.goal_achieved {
        CampaignState::Achieved
    } else if has_ended(campaign, now) {
        CampaignState::ExpiredUnsuccessful
    } else {
        CampaignState::Open
    }
}

/// Goal is checked before the deadline so a successful campaign reads as
/// closed even while time remains.
pub fn ensure_fundable(campaign: &Campaign, contributor: &Address, now: u64) -> Result<(), Error> {
    if campaign.beneficiary == *contributor {
        return Err(Error::SelfFunding);
    }
    if campaign.goal_achieved {
        return Err(Error::GoalAlreadyAchieved);
    }
    if has_ended(campaign, now) {
        return Err(Error::CampaignExpired);
    }
    Ok(())
}

pub fn ensure_refundable(campaign: &Campaign, now: u64) -> Result<(), Error> {
    if !has_ended(campaign, now) {
        return Err(Error::CampaignNotEndedYet);
    }
    if campaign.goal_achieved {
        return Err(Error::GoalAlreadyAchieved);
    }
    Ok(())
}

pub fn ensure_withdrawable(campaign: &Campaign) -> Result<(), Error> {
    if !campaign.goal_achieved {
        return Err(Error::GoalNotAchieved);
    }
    Ok(())
}
