use super::*;
use crate::Error;

const POOL: u64 = 1_000;

/// Settle a 1_500 auction for `alice` (reward 15) with a funded pool.
fn vested_auction(s: &Setup) -> u64 {
    s.client.fund_rewards(&s.governance, &POOL);
    s.settle_with_single_bid(1_500)
}

#[test]
fn test_fund_rewards() {
    let s = setup_test();
    assert_eq!(s.client.get_reward_pool(), 0);
    assert_eq!(s.client.fund_rewards(&s.governance, &400), 400);
    assert_eq!(s.client.fund_rewards(&s.alice, &100), 500);
    assert_eq!(s.client.get_reward_pool(), 500);
    assert_eq!(s.reward_token.balance(&s.client.address), 500);
    assert_eq!(
        s.client.try_fund_rewards(&s.alice, &0),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_fund_rewards_overflow_rejected() {
    let s = setup_test();
    s.reward_admin.mint(&s.governance, &i128::from(u64::MAX));
    s.client.fund_rewards(&s.governance, &u64::MAX);

    assert_eq!(
        s.client.try_fund_rewards(&s.alice, &1),
        Err(Ok(Error::Overflow))
    );
    assert_eq!(s.client.get_reward_pool(), u64::MAX);
}

#[test]
fn test_nothing_to_claim_at_start() {
    let s = setup_test();
    let schedule_id = vested_auction(&s);

    assert_eq!(s.client.get_claimable(&schedule_id), 0);
    assert_eq!(
        s.client.try_claim(&schedule_id, &s.alice),
        Err(Ok(Error::NothingToClaim))
    );
}

#[test]
fn test_partial_then_final_claim() {
    let s = setup_test();
    let schedule_id = vested_auction(&s);
    let balance_before = s.reward_token.balance(&s.alice);

    s.advance_ledger(VESTING_PERIOD / 2);
    assert_eq!(s.client.get_claimable(&schedule_id), 7);
    assert_eq!(s.client.claim(&schedule_id, &s.alice), 7);

    // Repeating the claim at the same instant yields nothing.
    assert_eq!(
        s.client.try_claim(&schedule_id, &s.alice),
        Err(Ok(Error::NothingToClaim))
    );
    assert_eq!(s.client.get_stake(&s.alice).locked, MIN_STAKE);

    s.advance_ledger(VESTING_PERIOD);
    assert_eq!(s.client.claim(&schedule_id, &s.alice), 8);

    let schedule = s.client.get_schedule(&schedule_id);
    assert_eq!(schedule.claimed, schedule.total_reward);
    assert_eq!(schedule.locked_stake, 0);
    assert_eq!(s.reward_token.balance(&s.alice), balance_before + 15);
    assert_eq!(s.client.get_reward_pool(), POOL - 15);

    // Completed schedule releases the winner's collateral.
    let position = s.client.get_stake(&s.alice);
    assert_eq!(position.locked, 0);
    assert_eq!(position.locked_until, None);
    assert_eq!(s.client.withdraw(&s.alice, &MIN_STAKE), 0);

    assert_eq!(
        s.client.try_claim(&schedule_id, &s.alice),
        Err(Ok(Error::NothingToClaim))
    );
}

#[test]
fn test_single_claim_after_end_pays_total() {
    let s = setup_test();
    let schedule_id = vested_auction(&s);

    s.advance_ledger(VESTING_PERIOD * 10);
    assert_eq!(s.client.claim(&schedule_id, &s.alice), 15);
    assert_eq!(s.client.get_claimable(&schedule_id), 0);
}

#[test]
fn test_only_beneficiary_claims() {
    let s = setup_test();
    let schedule_id = vested_auction(&s);
    s.advance_ledger(VESTING_PERIOD);

    assert_eq!(
        s.client.try_claim(&schedule_id, &s.bob),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.client.get_schedule(&schedule_id).claimed, 0);
}

#[test]
fn test_unknown_schedule() {
    let s = setup_test();
    assert_eq!(
        s.client.try_claim(&3, &s.alice),
        Err(Ok(Error::ScheduleNotFound))
    );
    assert_eq!(
        s.client.try_get_claimable(&3),
        Err(Ok(Error::ScheduleNotFound))
    );
}

#[test]
fn test_claim_fails_on_empty_pool() {
    let s = setup_test();
    let schedule_id = s.settle_with_single_bid(1_500);
    s.advance_ledger(VESTING_PERIOD);

    assert_eq!(
        s.client.try_claim(&schedule_id, &s.alice),
        Err(Ok(Error::InsufficientRewardPool))
    );

    s.client.fund_rewards(&s.governance, &15);
    assert_eq!(s.client.claim(&schedule_id, &s.alice), 15);
    assert_eq!(s.client.get_reward_pool(), 0);
}

#[test]
fn test_stake_is_not_reward_pool() {
    let s = setup_test();
    // Alice's stake sits in the contract but cannot pay her reward.
    s.stake(&s.alice, 500);
    let schedule_id = s.settle_with_single_bid(1_500);
    s.advance_ledger(VESTING_PERIOD);

    assert_eq!(
        s.client.try_claim(&schedule_id, &s.alice),
        Err(Ok(Error::InsufficientRewardPool))
    );
}
