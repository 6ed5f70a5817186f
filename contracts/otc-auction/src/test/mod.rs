pub mod vesting_test;

use crate::{OrderSide, OrderTerms, OtcAuction, OtcAuctionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const START_TIME: u64 = 1_000;
pub const MIN_BID_INCREMENT: u64 = 10;
pub const SLIPPAGE_BPS: u32 = 100;
pub const HIGH_VALUE_THRESHOLD: u64 = 1_000;
pub const MIN_STAKE: u64 = 50;
pub const VESTING_PERIOD: u64 = 3_600;
pub const AUCTION_DURATION: u64 = 86_400;
pub const QUANTITY: u64 = 500;
pub const INITIAL_BALANCE: i128 = 10_000_000;

pub struct Setup {
    pub env: Env,
    pub client: OtcAuctionClient<'static>,
    pub admin: Address,
    pub governance: Address,
    pub seller: Address,
    pub alice: Address,
    pub bob: Address,
    pub base_token: token::TokenClient<'static>,
    pub quote_token: token::TokenClient<'static>,
    pub reward_token: token::TokenClient<'static>,
    pub reward_admin: token::StellarAssetClient<'static>,
}

fn create_token<'a>(
    env: &Env,
) -> (token::TokenClient<'a>, token::StellarAssetClient<'a>) {
    let token_admin = Address::generate(env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    (
        token::TokenClient::new(env, &token_contract.address()),
        token::StellarAssetClient::new(env, &token_contract.address()),
    )
}

/// Deployed but not yet initialized contract plus funded participants.
pub fn setup_uninitialized() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let contract_id = env.register(OtcAuction, ());
    let client = OtcAuctionClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let governance = Address::generate(&env);
    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let (base_token, base_admin) = create_token(&env);
    let (quote_token, quote_admin) = create_token(&env);
    let (reward_token, reward_admin) = create_token(&env);

    for trader in [&seller, &alice, &bob] {
        base_admin.mint(trader, &INITIAL_BALANCE);
        quote_admin.mint(trader, &INITIAL_BALANCE);
    }
    reward_admin.mint(&alice, &1_000_000);
    reward_admin.mint(&bob, &1_000_000);
    reward_admin.mint(&governance, &10_000_000);

    Setup {
        env,
        client,
        admin,
        governance,
        seller,
        alice,
        bob,
        base_token,
        quote_token,
        reward_token,
        reward_admin,
    }
}

pub fn setup_test() -> Setup {
    let s = setup_uninitialized();
    s.client.initialize(
        &s.admin,
        &s.reward_token.address,
        &s.governance,
        &MIN_BID_INCREMENT,
        &SLIPPAGE_BPS,
        &HIGH_VALUE_THRESHOLD,
        &MIN_STAKE,
        &VESTING_PERIOD,
    );
    s
}

impl Setup {
    pub fn advance_ledger(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn terms(&self, side: OrderSide, quantity: u64) -> OrderTerms {
        OrderTerms {
            side,
            base_asset: self.base_token.address.clone(),
            quote_asset: self.quote_token.address.clone(),
            quantity,
        }
    }

    /// Sell `QUANTITY` of the base token; bids are paid in the quote token.
    pub fn sell_terms(&self) -> OrderTerms {
        self.terms(OrderSide::Sell, QUANTITY)
    }

    /// Open a default sell auction from `seller` with no buy-now price.
    pub fn create_auction(&self, reserve_price: u64) -> u64 {
        self.client.create_auction(
            &self.seller,
            &self.sell_terms(),
            &reserve_price,
            &AUCTION_DURATION,
            &None,
        )
    }

    pub fn stake(&self, owner: &Address, amount: u64) {
        self.client.deposit(owner, &amount);
    }

    /// Run an auction with a single bid from `alice` and close it after expiry.
    pub fn settle_with_single_bid(&self, price: u64) -> u64 {
        self.stake(&self.alice, MIN_STAKE);
        let auction_id = self.create_auction(price);
        self.client.place_bid(&auction_id, &self.alice, &price);
        self.advance_ledger(AUCTION_DURATION);
        self.client.close_auction(&self.bob, &auction_id);
        auction_id
    }
}
