use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    NextCampaignId,
    OwnerPool,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
}

pub type CampaignId = u64;

/// A single fundraising effort.
///
/// `raised` only ever counts the credited portion of contributions, so it
/// never exceeds `goal`. Anything sent beyond the goal lands in the owner pool.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64, // Unix timestamp, exclusive
    pub raised: i128,
    pub goal_achieved: bool,
    pub withdrawn: bool,
}

/// Lifecycle position of a campaign, derived from its stored flags and the
/// current ledger time. Never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignState {
    Open,
    Achieved,
    ExpiredUnsuccessful,
    Settled,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    NotOwner = 2,
    NotBeneficiary = 3,
    CampaignNotFound = 4,
    InvalidDeadline = 5,
    InvalidGoal = 6,
    InvalidAmount = 7,
    SelfFunding = 8,
    GoalAlreadyAchieved = 9,
    GoalNotAchieved = 10,
    CampaignExpired = 11,
    CampaignNotEndedYet = 12,
    NoContribution = 13,
    ArithmeticOverflow = 14,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_THRESHOLD: u32 = 17280 * 7; // bump once less than a week remains
