#![no_std]

//! # OTC Auction Contract
//!
//! Governance-controlled over-the-counter auctions on Soroban. Sellers escrow
//! one leg of an asset pair and set a reserve price in the other leg. Bidders
//! escrow their bids, compete under a minimum increment and a slippage band,
//! and must keep collateral staked with the contract. Settlement swaps the two
//! escrowed legs. Winners of high-value auctions also receive a reward that
//! vests linearly over the configured period.
//!
//! ## Modules
//!
//! - `config`: one-time initialization and governance parameter updates.
//! - `admin`: authorization checks and role hand-over.
//! - `stake`: collateral deposits, withdrawals and bid locks.
//! - `auction`: auction lifecycle and bid validation.
//! - `vesting`: reward schedules, claims and the reward pool.
//!
//! Each entry point validates everything before writing; a returned error
//! rolls the whole invocation back.

#[cfg(test)]
extern crate std;

mod admin;
mod auction;
mod config;
mod errors;
mod events;
mod math;
mod stake;
mod storage;
mod types;
mod vesting;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use errors::Error;
pub use types::{
    Auction, AuctionParams, AuctionStatus, BidRecord, Config, ConfigParam, OrderSide, OrderTerms,
    RewardPolicy, StakePosition, TraderStats, VestingSchedule,
};

#[contract]
pub struct OtcAuction;

#[contractimpl]
impl OtcAuction {
    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Create the configuration record. The authenticated `admin` becomes the
    /// contract admin and the auction counter starts at zero.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If called a second time
    /// * `Error::InvalidParameter` - If `slippage_tolerance_bps` exceeds 10 000
    ///   or `reward_vesting_period` is zero
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_asset: Address,
        governance: Address,
        min_bid_increment: u64,
        slippage_tolerance_bps: u32,
        high_value_threshold: u64,
        min_stake: u64,
        reward_vesting_period: u64,
    ) -> Result<(), Error> {
        config::initialize(
            &env,
            admin,
            config::InitArgs {
                reward_asset,
                governance,
                min_bid_increment,
                slippage_tolerance_bps,
                high_value_threshold,
                min_stake,
                reward_vesting_period,
            },
        )
    }

    /// Current configuration, including the auction counter.
    pub fn get_config(env: Env) -> Result<Config, Error> {
        config::load(&env)
    }

    /// Change one economic parameter (governance only). Open auctions keep
    /// the parameters they were created with.
    pub fn update_parameter(env: Env, caller: Address, param: ConfigParam) -> Result<(), Error> {
        config::update_parameter(&env, caller, param)
    }

    /// Hand the governance role to another identity (admin only).
    pub fn set_governance(env: Env, admin: Address, new_governance: Address) -> Result<(), Error> {
        admin::set_governance(&env, admin, new_governance)
    }

    /// Hand the admin role to `new_admin` (admin only).
    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        admin::transfer_admin(&env, admin, new_admin)
    }

    // ========================================================================
    // AUCTIONS
    // ========================================================================

    /// Escrow `terms.quantity` of the offered asset and open an auction for
    /// it. Prices are quoted in the other asset of the pair. Returns the id.
    ///
    /// # Errors
    /// * `Error::InvalidAmount` - If `terms.quantity` is zero
    /// * `Error::InvalidAssetPair` - If base and quote are the same asset
    /// * `Error::InvalidReserve` - If `reserve_price` is zero
    /// * `Error::InvalidDuration` - If `duration` is zero
    /// * `Error::InvalidBuyNowPrice` - If the buy-now price is below the reserve
    pub fn create_auction(
        env: Env,
        seller: Address,
        terms: OrderTerms,
        reserve_price: u64,
        duration: u64,
        buy_now_price: Option<u64>,
    ) -> Result<u64, Error> {
        auction::create_auction(&env, seller, terms, reserve_price, duration, buy_now_price)
    }

    /// Bid on an open auction. `amount` of the payment asset is escrowed and
    /// refunded when outbid. The bidder must hold at least the auction's
    /// minimum stake unlocked; that much is locked while the bid stands.
    ///
    /// # Errors
    /// * `Error::AuctionNotOpen` - If the auction is not open or has expired
    /// * `Error::BelowMinIncrement` - If the bid is under the minimum next bid
    /// * `Error::SlippageExceeded` - If the bid is outside the slippage band
    /// * `Error::InsufficientStake` - If the bidder's unlocked stake is too low
    pub fn place_bid(env: Env, auction_id: u64, bidder: Address, amount: u64) -> Result<(), Error> {
        auction::place_bid(&env, auction_id, bidder, amount)
    }

    /// Close and settle an auction. Anyone may call once it has expired; the
    /// seller may close early while no bid exists. The winner receives the
    /// escrowed quantity and the seller the winning bid; without a winner the
    /// quantity goes back to the seller.
    pub fn close_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        auction::close_auction(&env, caller, auction_id)
    }

    /// Cancel an open auction. The seller may cancel while no bid stands (or
    /// after expiry); governance may always force a cancellation.
    pub fn cancel_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        auction::cancel_auction(&env, caller, auction_id)
    }

    /// Auction record by id.
    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        auction::get_auction(&env, auction_id)
    }

    /// Every accepted bid of an auction, oldest first.
    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<BidRecord>, Error> {
        auction::get_bid_history(&env, auction_id)
    }

    /// Standing high bidder and bid.
    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, u64), Error> {
        let auction = auction::get_auction(&env, auction_id)?;
        Ok((auction.high_bidder, auction.current_high_bid))
    }

    /// Settled volume (in order quantity), wins and response time of a trader.
    pub fn get_trader_stats(env: Env, trader: Address) -> TraderStats {
        auction::trader_stats(&env, &trader)
    }

    // ========================================================================
    // STAKE
    // ========================================================================

    /// Deposit collateral and return the new staked total.
    pub fn deposit(env: Env, owner: Address, amount: u64) -> Result<u64, Error> {
        stake::deposit(&env, owner, amount)
    }

    /// Withdraw unlocked collateral and return the remaining staked total.
    ///
    /// # Errors
    /// * `Error::InsufficientUnlockedStake` - If `amount` exceeds the unlocked stake
    pub fn withdraw(env: Env, owner: Address, amount: u64) -> Result<u64, Error> {
        stake::withdraw(&env, owner, amount)
    }

    /// Stake position of `owner`; zeroed if they never deposited.
    pub fn get_stake(env: Env, owner: Address) -> StakePosition {
        stake::position(&env, &owner)
    }

    // ========================================================================
    // REWARDS
    // ========================================================================

    /// Add reward tokens to the pool vested rewards are paid from.
    pub fn fund_rewards(env: Env, funder: Address, amount: u64) -> Result<u64, Error> {
        vesting::fund_rewards(&env, funder, amount)
    }

    /// Release whatever has vested since the last claim and return the amount.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If `caller` is not the beneficiary
    /// * `Error::NothingToClaim` - If nothing new has vested
    /// * `Error::InsufficientRewardPool` - If the pool cannot pay the claim
    pub fn claim(env: Env, schedule_id: u64, caller: Address) -> Result<u64, Error> {
        vesting::claim(&env, schedule_id, caller)
    }

    /// Vesting schedule of a settled auction (the schedule id is the auction id).
    pub fn get_schedule(env: Env, schedule_id: u64) -> Result<VestingSchedule, Error> {
        storage::get_schedule(&env, schedule_id).ok_or(Error::ScheduleNotFound)
    }

    /// Amount `claim` would release right now.
    pub fn get_claimable(env: Env, schedule_id: u64) -> Result<u64, Error> {
        vesting::claimable(&env, schedule_id)
    }

    /// Reward tokens available to pay claims.
    pub fn get_reward_pool(env: Env) -> u64 {
        storage::get_reward_pool(&env)
    }
}
