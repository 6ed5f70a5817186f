use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second close time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// 100% expressed in basis points
pub const MAX_BPS: u32 = 10_000;

/// Reward paid on high-value settlements unless governance picks another policy (1%)
pub const DEFAULT_REWARD_BPS: u32 = 100;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Open = 0,
    Closed = 1,
    Settled = 2,
    Cancelled = 3,
}

/// Which leg of the pair the order creator hands over.
///
/// A `Sell` order offers `quantity` of the base asset and bids are quoted in
/// the quote asset; a `Buy` order offers `quantity` of the quote asset and
/// bids are quoted in the base asset.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderSide {
    Buy = 0,
    Sell = 1,
}

/// What is being traded in an auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderTerms {
    pub side: OrderSide,
    pub base_asset: Address,
    pub quote_asset: Address,
    /// Amount of the offered asset escrowed by the seller
    pub quantity: u64,
}

/// How the vested reward of a high-value settlement is derived from its final price.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardPolicy {
    /// Share of the final price, in basis points
    PriceBps(u32),
    /// Flat amount regardless of the final price
    Fixed(u64),
}

/// Global governance parameters. One record per deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub governance: Address,
    /// Token used both for stake collateral and for vested rewards
    pub reward_asset: Address,
    pub min_bid_increment: u64,
    pub slippage_tolerance_bps: u32,
    pub high_value_threshold: u64,
    pub min_stake: u64,
    /// Seconds
    pub reward_vesting_period: u64,
    pub reward_policy: RewardPolicy,
    pub auction_count: u64,
}

/// Economic parameters an auction captures when it is created.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    pub min_bid_increment: u64,
    pub slippage_tolerance_bps: u32,
    pub high_value_threshold: u64,
    pub min_stake: u64,
    pub reward_vesting_period: u64,
    pub reward_policy: RewardPolicy,
}

impl From<&Config> for AuctionParams {
    fn from(config: &Config) -> Self {
        Self {
            min_bid_increment: config.min_bid_increment,
            slippage_tolerance_bps: config.slippage_tolerance_bps,
            high_value_threshold: config.high_value_threshold,
            min_stake: config.min_stake,
            reward_vesting_period: config.reward_vesting_period,
            reward_policy: config.reward_policy,
        }
    }
}

/// A single governance-controlled parameter change.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigParam {
    MinBidIncrement(u64),
    SlippageToleranceBps(u32),
    HighValueThreshold(u64),
    MinStake(u64),
    RewardVestingPeriod(u64),
    RewardPolicy(RewardPolicy),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    pub terms: OrderTerms,
    /// Denominated in the payment asset, as are all bids
    pub reserve_price: u64,
    pub buy_now_price: Option<u64>,
    pub current_high_bid: u64,
    pub high_bidder: Option<Address>,
    /// Collateral currently locked on behalf of `high_bidder`. The bid itself
    /// (`current_high_bid` of the payment asset) is held in escrow.
    pub locked_stake: u64,
    pub bid_count: u32,
    pub opened_at: u64,
    pub closes_at: u64,
    pub status: AuctionStatus,
    pub params: AuctionParams,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRecord {
    pub bidder: Address,
    pub amount: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub owner: Address,
    pub amount: u64,
    pub locked: u64,
    pub locked_until: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    /// Auction whose settlement created this schedule; doubles as the schedule id
    pub auction_id: u64,
    pub beneficiary: Address,
    pub total_reward: u64,
    pub start_time: u64,
    pub duration: u64,
    pub claimed: u64,
    /// Winner collateral held until the reward has been fully claimed
    pub locked_stake: u64,
}

/// Reputation counters per trader, updated on settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TraderStats {
    pub trader: Address,
    pub total_volume: u64,
    pub win_count: u64,
    pub total_response_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    RewardPool,
    Auction(u64),
    BidHistory(u64),
    Stake(Address),
    Vesting(u64),
    TraderStats(Address),
}
