use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct BidPlaced {
    pub auction: Pubkey,
    pub id: u64,
    pub bidder: Pubkey,
    pub offer_token: Pubkey,
    pub offer: u64,
    pub token_balance_before: u64,

    /// Displaced bidder, if any, and the amount credited to their refund record.
    pub refunded_bidder: Option<Pubkey>,
    pub refunded_amount: u64,
}
