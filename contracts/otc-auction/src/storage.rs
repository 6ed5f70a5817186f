use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    Auction, BidRecord, Config, DataKey, StakePosition, TraderStats, VestingSchedule,
    INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INSTANCE STORAGE
// ============================================================================

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Option<Config> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn set_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

/// Reward tokens held by the contract that are not stake collateral.
pub fn get_reward_pool(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::RewardPool)
        .unwrap_or(0)
}

pub fn set_reward_pool(e: &Env, amount: u64) {
    e.storage().instance().set(&DataKey::RewardPool, &amount);
}

/// Extend the TTL of instance storage.
/// Called during every state-changing operation.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// PERSISTENT STORAGE
// ============================================================================

fn get_persistent<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = e.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    value
}

fn set_persistent<V>(e: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_auction(e: &Env, auction_id: u64) -> Option<Auction> {
    get_persistent(e, &DataKey::Auction(auction_id))
}

pub fn save_auction(e: &Env, auction: &Auction) {
    set_persistent(e, &DataKey::Auction(auction.id), auction);
}

pub fn get_bid_history(e: &Env, auction_id: u64) -> Vec<BidRecord> {
    get_persistent(e, &DataKey::BidHistory(auction_id)).unwrap_or(Vec::new(e))
}

pub fn add_bid_to_history(e: &Env, auction_id: u64, bid: BidRecord) {
    let mut history = get_bid_history(e, auction_id);
    history.push_back(bid);
    set_persistent(e, &DataKey::BidHistory(auction_id), &history);
}

pub fn get_stake(e: &Env, owner: &Address) -> Option<StakePosition> {
    get_persistent(e, &DataKey::Stake(owner.clone()))
}

pub fn save_stake(e: &Env, position: &StakePosition) {
    set_persistent(e, &DataKey::Stake(position.owner.clone()), position);
}

pub fn get_schedule(e: &Env, schedule_id: u64) -> Option<VestingSchedule> {
    get_persistent(e, &DataKey::Vesting(schedule_id))
}

pub fn save_schedule(e: &Env, schedule: &VestingSchedule) {
    set_persistent(e, &DataKey::Vesting(schedule.auction_id), schedule);
}

pub fn get_trader_stats(e: &Env, trader: &Address) -> Option<TraderStats> {
    get_persistent(e, &DataKey::TraderStats(trader.clone()))
}

pub fn save_trader_stats(e: &Env, stats: &TraderStats) {
    set_persistent(e, &DataKey::TraderStats(stats.trader.clone()), stats);
}
