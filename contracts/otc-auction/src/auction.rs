//! Auction state machine: `Open -> Closed -> Settled` and `Open -> Cancelled`.

use soroban_sdk::{log, token, Address, Env, Vec};

use crate::{
    admin, config,
    errors::Error,
    events::{
        AuctionCancelledEventData, AuctionClosedEventData, AuctionCreatedEventData,
        AuctionSettledEventData, BidPlacedEventData,
    },
    math, stake, storage,
    types::{Auction, AuctionParams, AuctionStatus, BidRecord, OrderSide, OrderTerms, TraderStats},
    vesting,
};

impl OrderTerms {
    /// Asset the seller escrows and the winner receives.
    pub fn offered_asset(&self) -> &Address {
        match self.side {
            OrderSide::Sell => &self.base_asset,
            OrderSide::Buy => &self.quote_asset,
        }
    }

    /// Asset bids are quoted and escrowed in.
    pub fn payment_asset(&self) -> &Address {
        match self.side {
            OrderSide::Sell => &self.quote_asset,
            OrderSide::Buy => &self.base_asset,
        }
    }
}

impl Auction {
    pub fn is_open_at(&self, now: u64) -> bool {
        self.status == AuctionStatus::Open && now < self.closes_at
    }

    pub fn has_bid(&self) -> bool {
        self.high_bidder.is_some()
    }

    /// Smallest acceptable bid and the reference price slippage is measured against.
    ///
    /// The first bid must reach the reserve and is measured against it; every
    /// later bid must beat the standing one by the minimum increment.
    pub fn bid_bounds(&self) -> Result<(u64, u64), Error> {
        if self.has_bid() {
            let min_next = self
                .current_high_bid
                .checked_add(self.params.min_bid_increment)
                .ok_or(Error::Overflow)?;
            Ok((min_next, self.current_high_bid))
        } else {
            Ok((self.reserve_price, self.reserve_price))
        }
    }
}

pub fn create_auction(
    e: &Env,
    seller: Address,
    terms: OrderTerms,
    reserve_price: u64,
    duration: u64,
    buy_now_price: Option<u64>,
) -> Result<u64, Error> {
    seller.require_auth();
    let mut config = config::load(e)?;

    if terms.quantity == 0 {
        return Err(Error::InvalidAmount);
    }
    if terms.base_asset == terms.quote_asset {
        return Err(Error::InvalidAssetPair);
    }
    if reserve_price == 0 {
        return Err(Error::InvalidReserve);
    }
    if duration == 0 {
        return Err(Error::InvalidDuration);
    }
    if let Some(buy_now) = buy_now_price {
        if buy_now < reserve_price {
            return Err(Error::InvalidBuyNowPrice);
        }
    }

    let now = e.ledger().timestamp();
    let closes_at = now.checked_add(duration).ok_or(Error::Overflow)?;
    let auction_id = config::next_auction_id(e, &mut config)?;

    transfer(
        e,
        terms.offered_asset(),
        &seller,
        &e.current_contract_address(),
        terms.quantity,
    );

    let auction = Auction {
        id: auction_id,
        seller: seller.clone(),
        terms,
        reserve_price,
        buy_now_price,
        current_high_bid: 0,
        high_bidder: None,
        locked_stake: 0,
        bid_count: 0,
        opened_at: now,
        closes_at,
        status: AuctionStatus::Open,
        params: AuctionParams::from(&config),
    };
    storage::save_auction(e, &auction);
    storage::extend_instance_ttl(e);

    AuctionCreatedEventData {
        seller,
        auction_id,
        side: auction.terms.side,
        quantity: auction.terms.quantity,
        reserve_price,
        closes_at,
    }
    .publish(e);

    Ok(auction_id)
}

pub fn place_bid(e: &Env, auction_id: u64, bidder: Address, amount: u64) -> Result<(), Error> {
    bidder.require_auth();
    let mut auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    let now = e.ledger().timestamp();
    if !auction.is_open_at(now) {
        return Err(Error::AuctionNotOpen);
    }

    let (min_next_bid, reference) = auction.bid_bounds()?;
    if amount < min_next_bid {
        return Err(Error::BelowMinIncrement);
    }
    if !math::within_slippage(amount, reference, auction.params.slippage_tolerance_bps) {
        return Err(Error::SlippageExceeded);
    }

    // A bidder raising their own standing bid gets their current lock back first.
    let outbids_self = auction.high_bidder.as_ref() == Some(&bidder);
    let mut available = stake::position(e, &bidder).unlocked();
    if outbids_self {
        available = available.saturating_add(auction.locked_stake);
    }
    let min_stake = auction.params.min_stake;
    if available < min_stake {
        return Err(Error::InsufficientStake);
    }

    if let Some(previous) = auction.high_bidder.as_ref() {
        stake::unlock(e, previous, auction.locked_stake)?;
        refund_bid(e, &auction, previous);
    }
    escrow_bid(e, &auction, &bidder, amount);

    if let Some(buy_now) = auction.buy_now_price {
        if amount >= buy_now {
            auction.closes_at = now;
        }
    }
    stake::lock(e, &bidder, min_stake, auction.closes_at)?;

    auction.current_high_bid = amount;
    auction.high_bidder = Some(bidder.clone());
    auction.locked_stake = min_stake;
    auction.bid_count = auction.bid_count.saturating_add(1);
    storage::save_auction(e, &auction);
    storage::add_bid_to_history(
        e,
        auction_id,
        BidRecord {
            bidder: bidder.clone(),
            amount,
            timestamp: now,
        },
    );
    storage::extend_instance_ttl(e);

    BidPlacedEventData {
        auction_id,
        bidder,
        amount,
    }
    .publish(e);

    Ok(())
}

pub fn close_auction(e: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
    caller.require_auth();
    let mut auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    if auction.status != AuctionStatus::Open {
        return Err(Error::AuctionNotOpen);
    }
    let now = e.ledger().timestamp();
    let expired = now >= auction.closes_at;
    let early_by_seller = caller == auction.seller && !auction.has_bid();
    if !expired && !early_by_seller {
        return Err(Error::AuctionNotOpen);
    }

    auction.status = AuctionStatus::Closed;
    AuctionClosedEventData {
        auction_id,
        final_price: auction.current_high_bid,
    }
    .publish(e);

    let high_value = settle(e, &mut auction, now)?;
    auction.status = AuctionStatus::Settled;
    storage::save_auction(e, &auction);
    storage::extend_instance_ttl(e);

    log!(
        e,
        "auction settled",
        auction_id,
        auction.current_high_bid,
        high_value
    );
    AuctionSettledEventData {
        auction_id,
        winner: auction.high_bidder.clone(),
        final_price: auction.current_high_bid,
        high_value,
    }
    .publish(e);

    Ok(())
}

/// Swap the escrowed legs of a closed auction, then hand the winner either a
/// vesting schedule or their collateral back. Returns whether a schedule was
/// created.
fn settle(e: &Env, auction: &mut Auction, now: u64) -> Result<bool, Error> {
    let contract = e.current_contract_address();
    let Some(winner) = auction.high_bidder.clone() else {
        transfer(
            e,
            auction.terms.offered_asset(),
            &contract,
            &auction.seller,
            auction.terms.quantity,
        );
        return Ok(false);
    };
    let final_price = auction.current_high_bid;

    transfer(
        e,
        auction.terms.offered_asset(),
        &contract,
        &winner,
        auction.terms.quantity,
    );
    transfer(
        e,
        auction.terms.payment_asset(),
        &contract,
        &auction.seller,
        final_price,
    );

    let reward = if final_price >= auction.params.high_value_threshold {
        auction.params.reward_policy.reward_for(final_price)?
    } else {
        0
    };

    let vested = reward > 0;
    if vested {
        // The winner's lock now backs the schedule and is released on its final claim.
        vesting::create_schedule(e, auction, &winner, reward);
    } else {
        stake::unlock(e, &winner, auction.locked_stake)?;
    }
    auction.locked_stake = 0;

    let response_time = now.saturating_sub(auction.opened_at);
    let quantity = auction.terms.quantity;
    record_trade(e, &auction.seller, quantity, response_time, false);
    record_trade(e, &winner, quantity, response_time, true);

    Ok(vested)
}

fn record_trade(e: &Env, trader: &Address, volume: u64, response_time: u64, won: bool) {
    let mut stats = trader_stats(e, trader);
    stats.total_volume = stats.total_volume.saturating_add(volume);
    stats.total_response_time = stats.total_response_time.saturating_add(response_time);
    if won {
        stats.win_count = stats.win_count.saturating_add(1);
    }
    storage::save_trader_stats(e, &stats);
}

pub fn cancel_auction(e: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
    caller.require_auth();
    let config = config::load(e)?;
    let mut auction = storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    let forced = admin::is_governance(&config, &caller);
    if caller != auction.seller && !forced {
        return Err(Error::Unauthorized);
    }
    if auction.status != AuctionStatus::Open {
        return Err(Error::AuctionNotOpen);
    }
    let now = e.ledger().timestamp();
    if !forced && auction.has_bid() && now < auction.closes_at {
        return Err(Error::CannotCancel);
    }

    if let Some(bidder) = auction.high_bidder.as_ref() {
        stake::unlock(e, bidder, auction.locked_stake)?;
        refund_bid(e, &auction, bidder);
    }
    transfer(
        e,
        auction.terms.offered_asset(),
        &e.current_contract_address(),
        &auction.seller,
        auction.terms.quantity,
    );
    auction.locked_stake = 0;
    auction.status = AuctionStatus::Cancelled;
    storage::save_auction(e, &auction);
    storage::extend_instance_ttl(e);

    AuctionCancelledEventData {
        auction_id,
        cancelled_by: caller,
    }
    .publish(e);

    Ok(())
}

pub fn get_auction(e: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(e, auction_id).ok_or(Error::AuctionNotFound)
}

pub fn get_bid_history(e: &Env, auction_id: u64) -> Result<Vec<BidRecord>, Error> {
    if storage::get_auction(e, auction_id).is_none() {
        return Err(Error::AuctionNotFound);
    }
    Ok(storage::get_bid_history(e, auction_id))
}

pub fn trader_stats(e: &Env, trader: &Address) -> TraderStats {
    storage::get_trader_stats(e, trader).unwrap_or_else(|| TraderStats {
        trader: trader.clone(),
        total_volume: 0,
        win_count: 0,
        total_response_time: 0,
    })
}

fn escrow_bid(e: &Env, auction: &Auction, bidder: &Address, amount: u64) {
    transfer(
        e,
        auction.terms.payment_asset(),
        bidder,
        &e.current_contract_address(),
        amount,
    );
}

/// Return the standing high bid to `bidder`.
fn refund_bid(e: &Env, auction: &Auction, bidder: &Address) {
    transfer(
        e,
        auction.terms.payment_asset(),
        &e.current_contract_address(),
        bidder,
        auction.current_high_bid,
    );
}

fn transfer(e: &Env, asset: &Address, from: &Address, to: &Address, amount: u64) {
    token::TokenClient::new(e, asset).transfer(from, to, &i128::from(amount));
}
