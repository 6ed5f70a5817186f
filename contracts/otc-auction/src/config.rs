use soroban_sdk::{Address, Env};

use crate::{
    admin,
    errors::Error,
    events::{InitializedEventData, ParameterUpdatedEventData},
    storage,
    types::{Config, ConfigParam, RewardPolicy, DEFAULT_REWARD_BPS, MAX_BPS},
};

/// Arguments of `initialize`, grouped so they can be validated as one unit.
pub struct InitArgs {
    pub reward_asset: Address,
    pub governance: Address,
    pub min_bid_increment: u64,
    pub slippage_tolerance_bps: u32,
    pub high_value_threshold: u64,
    pub min_stake: u64,
    pub reward_vesting_period: u64,
}

pub fn initialize(e: &Env, admin: Address, args: InitArgs) -> Result<(), Error> {
    if storage::has_config(e) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();

    let config = Config {
        admin: admin.clone(),
        governance: args.governance,
        reward_asset: args.reward_asset,
        min_bid_increment: args.min_bid_increment,
        slippage_tolerance_bps: args.slippage_tolerance_bps,
        high_value_threshold: args.high_value_threshold,
        min_stake: args.min_stake,
        reward_vesting_period: args.reward_vesting_period,
        reward_policy: RewardPolicy::PriceBps(DEFAULT_REWARD_BPS),
        auction_count: 0,
    };
    require_valid_config(&config)?;

    storage::set_config(e, &config);
    storage::extend_instance_ttl(e);

    InitializedEventData {
        admin,
        governance: config.governance,
        reward_asset: config.reward_asset,
    }
    .publish(e);

    Ok(())
}

pub fn load(e: &Env) -> Result<Config, Error> {
    storage::get_config(e).ok_or(Error::NotInitialized)
}

pub fn update_parameter(e: &Env, caller: Address, param: ConfigParam) -> Result<(), Error> {
    let mut config = load(e)?;
    admin::require_governance(&config, &caller)?;

    match param {
        ConfigParam::MinBidIncrement(value) => config.min_bid_increment = value,
        ConfigParam::SlippageToleranceBps(value) => config.slippage_tolerance_bps = value,
        ConfigParam::HighValueThreshold(value) => config.high_value_threshold = value,
        ConfigParam::MinStake(value) => config.min_stake = value,
        ConfigParam::RewardVestingPeriod(value) => config.reward_vesting_period = value,
        ConfigParam::RewardPolicy(policy) => config.reward_policy = policy,
    }
    require_valid_config(&config)?;

    storage::set_config(e, &config);
    storage::extend_instance_ttl(e);

    ParameterUpdatedEventData {
        governance: caller,
        param,
    }
    .publish(e);

    Ok(())
}

/// Consume the next auction id. Only the caller that goes on to persist the
/// auction may use this, so a failed creation never advances the counter.
pub fn next_auction_id(e: &Env, config: &mut Config) -> Result<u64, Error> {
    let id = config.auction_count;
    config.auction_count = id.checked_add(1).ok_or(Error::Overflow)?;
    storage::set_config(e, config);
    Ok(id)
}

fn require_valid_config(config: &Config) -> Result<(), Error> {
    if config.slippage_tolerance_bps > MAX_BPS {
        return Err(Error::InvalidParameter);
    }
    if config.reward_vesting_period == 0 {
        return Err(Error::InvalidParameter);
    }
    if let RewardPolicy::PriceBps(bps) = config.reward_policy {
        if bps > MAX_BPS {
            return Err(Error::InvalidParameter);
        }
    }
    Ok(())
}
