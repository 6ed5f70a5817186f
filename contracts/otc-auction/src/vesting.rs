use soroban_sdk::{token, Address, Env};

use crate::{
    config,
    errors::Error,
    events::{RewardClaimedEventData, RewardsFundedEventData, VestingCreatedEventData},
    math, stake, storage,
    types::{Auction, RewardPolicy, VestingSchedule},
};

impl RewardPolicy {
    /// Reward owed to the winner of a high-value auction settled at `final_price`.
    pub fn reward_for(&self, final_price: u64) -> Result<u64, Error> {
        match *self {
            RewardPolicy::PriceBps(bps) => math::mul_bps(final_price, bps),
            RewardPolicy::Fixed(amount) => Ok(amount),
        }
    }
}

impl VestingSchedule {
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.duration)
    }

    /// Amount vested at `now`, independent of what was already claimed.
    pub fn entitled_at(&self, now: u64) -> u64 {
        let elapsed = now.saturating_sub(self.start_time).min(self.duration);
        math::vested_amount(self.total_reward, elapsed, self.duration)
    }

    pub fn releasable_at(&self, now: u64) -> u64 {
        self.entitled_at(now).saturating_sub(self.claimed)
    }

    pub fn is_complete(&self) -> bool {
        self.claimed == self.total_reward
    }
}

/// Start vesting `total_reward` for the winner of `auction`, taking over the
/// winner's collateral lock until the reward is fully claimed.
pub fn create_schedule(
    e: &Env,
    auction: &Auction,
    beneficiary: &Address,
    total_reward: u64,
) -> VestingSchedule {
    let schedule = VestingSchedule {
        auction_id: auction.id,
        beneficiary: beneficiary.clone(),
        total_reward,
        start_time: e.ledger().timestamp(),
        duration: auction.params.reward_vesting_period,
        claimed: 0,
        locked_stake: auction.locked_stake,
    };
    stake::extend_lock(e, beneficiary, schedule.end_time());
    storage::save_schedule(e, &schedule);

    VestingCreatedEventData {
        beneficiary: beneficiary.clone(),
        schedule_id: schedule.auction_id,
        total_reward,
        duration: schedule.duration,
    }
    .publish(e);

    schedule
}

pub fn claim(e: &Env, schedule_id: u64, caller: Address) -> Result<u64, Error> {
    caller.require_auth();
    let config = config::load(e)?;
    let mut schedule = storage::get_schedule(e, schedule_id).ok_or(Error::ScheduleNotFound)?;

    if caller != schedule.beneficiary {
        return Err(Error::Unauthorized);
    }

    let releasable = schedule.releasable_at(e.ledger().timestamp());
    if releasable == 0 {
        return Err(Error::NothingToClaim);
    }

    let pool = storage::get_reward_pool(e);
    if pool < releasable {
        return Err(Error::InsufficientRewardPool);
    }

    schedule.claimed = schedule
        .claimed
        .checked_add(releasable)
        .ok_or(Error::Overflow)?;
    if schedule.is_complete() {
        stake::unlock(e, &schedule.beneficiary, schedule.locked_stake)?;
        schedule.locked_stake = 0;
    }

    storage::set_reward_pool(e, pool - releasable);
    storage::save_schedule(e, &schedule);
    token::TokenClient::new(e, &config.reward_asset).transfer(
        &e.current_contract_address(),
        &caller,
        &i128::from(releasable),
    );
    storage::extend_instance_ttl(e);

    RewardClaimedEventData {
        beneficiary: caller,
        schedule_id,
        amount: releasable,
        claimed: schedule.claimed,
    }
    .publish(e);

    Ok(releasable)
}

pub fn claimable(e: &Env, schedule_id: u64) -> Result<u64, Error> {
    let schedule = storage::get_schedule(e, schedule_id).ok_or(Error::ScheduleNotFound)?;
    Ok(schedule.releasable_at(e.ledger().timestamp()))
}

pub fn fund_rewards(e: &Env, funder: Address, amount: u64) -> Result<u64, Error> {
    funder.require_auth();
    let config = config::load(e)?;
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }

    let pool = storage::get_reward_pool(e)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    token::TokenClient::new(e, &config.reward_asset).transfer(
        &funder,
        &e.current_contract_address(),
        &i128::from(amount),
    );
    storage::set_reward_pool(e, pool);
    storage::extend_instance_ttl(e);

    RewardsFundedEventData {
        funder,
        amount,
        pool,
    }
    .publish(e);

    Ok(pool)
}

#[cfg(test)]
mod test {
    use soroban_sdk::{testutils::Address as _, Address, Env};

    use crate::types::{RewardPolicy, VestingSchedule};

    fn schedule(env: &Env, total_reward: u64, duration: u64) -> VestingSchedule {
        VestingSchedule {
            auction_id: 0,
            beneficiary: Address::generate(env),
            total_reward,
            start_time: 1_000,
            duration,
            claimed: 0,
            locked_stake: 50,
        }
    }

    #[test]
    fn nothing_vests_before_start() {
        let env = Env::default();
        let s = schedule(&env, 900, 3_600);
        assert_eq!(s.entitled_at(0), 0);
        assert_eq!(s.entitled_at(1_000), 0);
    }

    #[test]
    fn full_amount_at_and_after_end() {
        let env = Env::default();
        let s = schedule(&env, 7, 3);
        assert_eq!(s.entitled_at(1_002), 4);
        assert_eq!(s.entitled_at(1_003), 7);
        assert_eq!(s.entitled_at(u64::MAX), 7);
    }

    #[test]
    fn releasable_subtracts_claimed() {
        let env = Env::default();
        let mut s = schedule(&env, 3_600, 3_600);
        s.claimed = 1_000;
        assert_eq!(s.releasable_at(2_800), 800);
        assert_eq!(s.releasable_at(1_500), 0);
    }

    #[test]
    fn reward_policies() {
        assert_eq!(RewardPolicy::PriceBps(100).reward_for(1_500).unwrap(), 15);
        assert_eq!(RewardPolicy::PriceBps(0).reward_for(1_500).unwrap(), 0);
        assert_eq!(RewardPolicy::Fixed(10_000_000).reward_for(1).unwrap(), 10_000_000);
    }
}
