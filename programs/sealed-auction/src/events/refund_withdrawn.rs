use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct RefundWithdrawn {
    pub auction: Pubkey,
    pub id: u64,
    pub bidder: Pubkey,
    pub refund_token: Pubkey,
    pub amount: u64,

    /// Whether the bidder's refund record was closed.
    pub closed: bool,
}
