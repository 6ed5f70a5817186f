use soroban_sdk::contracterror;

/// Error codes returned by the OTC auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the identity required for this action
    Unauthorized = 1,
    /// `initialize` was already called
    AlreadyInitialized = 2,
    /// Reserve price must be non-zero
    InvalidReserve = 3,
    /// Auction is not open for this action
    AuctionNotOpen = 4,
    /// Bid does not clear the minimum next bid
    BelowMinIncrement = 5,
    /// Bid deviates from the reference price by more than the tolerance
    SlippageExceeded = 6,
    /// Bidder's unlocked stake is below the minimum stake
    InsufficientStake = 7,
    /// Withdrawal exceeds the unlocked part of the position
    InsufficientUnlockedStake = 8,
    /// Seller cannot cancel an auction with a standing bid
    CannotCancel = 9,
    /// Nothing has vested since the last claim
    NothingToClaim = 10,
    /// Checked arithmetic overflowed
    Overflow = 11,
    NotInitialized = 12,
    AuctionNotFound = 13,
    ScheduleNotFound = 14,
    InvalidDuration = 15,
    /// Buy-now price is below the reserve price
    InvalidBuyNowPrice = 16,
    /// Configuration value out of range
    InvalidParameter = 17,
    InvalidAmount = 18,
    /// Reward pool cannot cover the releasable amount
    InsufficientRewardPool = 19,
    /// Base and quote asset are the same token
    InvalidAssetPair = 20,
}
