use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct AuctionUnsealed {
    pub auction: Pubkey,
    pub id: u64,
    pub unsealed_by: Pubkey,

    /// The hash of this slot is the value the owner must record with `set_hash`.
    pub slot: u64,
}
