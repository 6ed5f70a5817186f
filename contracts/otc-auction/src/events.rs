use soroban_sdk::{contractevent, Address};

use crate::types::{ConfigParam, OrderSide};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub governance: Address,
    pub reward_asset: Address,
}

/// Event emitted when governance changes a parameter
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParameterUpdatedEventData {
    #[topic]
    pub governance: Address,
    pub param: ConfigParam,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceChangedEventData {
    #[topic]
    pub admin: Address,
    pub new_governance: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEventData {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}

/// Event emitted when a seller lists an asset
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub seller: Address,
    pub auction_id: u64,
    pub side: OrderSide,
    pub quantity: u64,
    pub reserve_price: u64,
    pub closes_at: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClosedEventData {
    #[topic]
    pub auction_id: u64,
    pub final_price: u64,
}

/// Event emitted once settlement completes; `high_value` marks a vesting hand-off
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub final_price: u64,
    pub high_value: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub auction_id: u64,
    pub cancelled_by: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeDepositedEventData {
    #[topic]
    pub owner: Address,
    pub amount: u64,
    pub total: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeWithdrawnEventData {
    #[topic]
    pub owner: Address,
    pub amount: u64,
    pub total: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsFundedEventData {
    #[topic]
    pub funder: Address,
    pub amount: u64,
    pub pool: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingCreatedEventData {
    #[topic]
    pub beneficiary: Address,
    pub schedule_id: u64,
    pub total_reward: u64,
    pub duration: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEventData {
    #[topic]
    pub beneficiary: Address,
    pub schedule_id: u64,
    pub amount: u64,
    pub claimed: u64,
}
