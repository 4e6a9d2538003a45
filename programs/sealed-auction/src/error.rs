use anchor_lang::prelude::error_code;

#[error_code]
pub enum SealedAuctionError {
    #[msg("ItemRegistryZeroPubkey")]
    ItemRegistryZeroPubkey = 0x100,

    #[msg("ItemLogicZeroPubkey")]
    ItemLogicZeroPubkey = 0x101,

    #[msg("InvalidUnsealGap")]
    /// The unseal gap is zero.
    InvalidUnsealGap = 0x102,

    #[msg("InvalidProceedsToken")]
    /// The proceeds token account does not hold the configured mint.
    InvalidProceedsToken = 0x103,

    #[msg("AlreadyTheProceedsToken")]
    AlreadyTheProceedsToken = 0x104,

    /// Only the program's owner is permitted.
    #[msg("Unauthorized")]
    Unauthorized = 0x200,

    #[msg("InvalidNewOwner")]
    InvalidNewOwner = 0x202,

    #[msg("AlreadyOwner")]
    AlreadyOwner = 0x204,

    #[msg("NoTransferOwnershipRequest")]
    NoTransferOwnershipRequest = 0x206,

    #[msg("NotPendingOwner")]
    NotPendingOwner = 0x208,

    /// Only the recorded highest bidder may claim the item.
    #[msg("NotWinner")]
    NotWinner = 0x20a,

    #[msg("U64Overflow")]
    U64Overflow = 0x220,

    /// Auction start time is not before its end time.
    #[msg("InvalidWindow")]
    InvalidWindow = 0x300,

    /// Bid submitted outside of the auction's bidding window.
    #[msg("Closed")]
    Closed = 0x302,

    /// Bid does not strictly exceed the current offer.
    #[msg("ErrPrice")]
    ErrPrice = 0x304,

    /// Settlement or claim attempted before its prerequisite phase or time.
    #[msg("unfinished")]
    Unfinished = 0x306,

    #[msg("unsealed")]
    AlreadyUnsealed = 0x308,

    #[msg("AlreadyHashed")]
    AlreadyHashed = 0x30a,

    #[msg("AlreadyClaimed")]
    AlreadyClaimed = 0x30c,

    #[msg("NotFound")]
    NotFound = 0x30e,

    /// Zero is reserved for an unset seed.
    #[msg("ZeroSeed")]
    ZeroSeed = 0x310,

    /// The displaced bidder's refund record must be passed when outbidding someone else.
    #[msg("BestOfferRefundRequired")]
    BestOfferRefundRequired = 0x312,

    #[msg("BestOfferRefundMismatch")]
    BestOfferRefundMismatch = 0x314,

    #[msg("CustodyBalanceMismatch")]
    CustodyBalanceMismatch = 0x316,

    #[msg("NothingToWithdraw")]
    NothingToWithdraw = 0x318,
}
