use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct AuctionCreated {
    pub auction: Pubkey,
    pub id: u64,
    pub item_code: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub min_offer: u64,
}
