use crate::error::SealedAuctionError;
use anchor_lang::prelude::*;
use common::admin::{Ownable, PendingOwner};

#[account]
#[derive(Debug, InitSpace)]
pub struct Custodian {
    pub bump: u8,

    /// Program's owner.
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,

    /// Mint of the token that offers are escrowed in.
    pub mint: Pubkey,

    /// Program issuing the auctioned items.
    pub item_registry: Pubkey,

    /// Item selection logic consuming an auction's seed.
    pub item_logic: Pubkey,

    /// Token account receiving the winning offer when an item is claimed.
    pub proceeds_token: Pubkey,

    /// Seconds after an auction's end time before it may be unsealed.
    pub unseal_gap: u32,

    /// Identifier the next created auction will have.
    pub next_auction_id: u64,
}

impl Custodian {
    pub const SEED_PREFIX: &'static [u8] = b"custodian";

    /// Whether an auction with this identifier has been created.
    pub fn contains(&self, auction_id: u64) -> bool {
        auction_id >= common::constants::FIRST_AUCTION_ID && auction_id < self.next_auction_id
    }

    /// Hand out the next sequential auction identifier.
    pub fn reserve_auction_id(&mut self) -> Result<u64> {
        let auction_id = self.next_auction_id;
        self.next_auction_id = auction_id
            .checked_add(1)
            .ok_or(SealedAuctionError::U64Overflow)?;

        Ok(auction_id)
    }

    /// Earliest time an auction ending at `end_time` may be unsealed.
    pub fn unseal_time(&self, end_time: i64) -> i64 {
        end_time.saturating_add(self.unseal_gap.into())
    }
}

impl Ownable for Custodian {
    fn owner(&self) -> &Pubkey {
        &self.owner
    }

    fn owner_mut(&mut self) -> &mut Pubkey {
        &mut self.owner
    }
}

impl PendingOwner for Custodian {
    fn pending_owner(&self) -> &Option<Pubkey> {
        &self.pending_owner
    }

    fn pending_owner_mut(&mut self) -> &mut Option<Pubkey> {
        &mut self.pending_owner
    }
}
