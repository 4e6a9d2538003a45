use crate::error::SealedAuctionError;
use anchor_lang::prelude::*;

#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq)]
pub struct BestOffer {
    /// Owner of `token`, who is the only one allowed to claim the item.
    pub bidder: Pubkey,

    /// Token account the escrowed offer was pulled from.
    pub token: Pubkey,
}

/// Escrow owed back to a displaced bidder, credited to their [PendingRefund](super::PendingRefund).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refund {
    pub bidder: Pubkey,
    pub amount: u64,
}

#[account]
#[derive(Debug, InitSpace, PartialEq, Eq)]
pub struct Auction {
    pub bump: u8,
    pub custody_token_bump: u8,

    /// Sequential identifier assigned by the custodian, starting at 1.
    pub id: u64,

    /// Opaque code of the auctioned item.
    pub item_code: u64,

    /// Bidding window (unix timestamps, inclusive on both ends).
    pub start_time: i64,
    pub end_time: i64,

    pub min_offer: u64,

    /// Highest escrowed offer. Starts at `min_offer`, so the first bid must exceed it.
    pub offer: u64,

    /// `None` until the first bid is accepted.
    pub best_offer: Option<BestOffer>,

    /// Set once the settlement reference is fixed by `unseal`.
    pub sealed: bool,

    /// Slot whose hash becomes the seed.
    pub unsealed_slot: Option<u64>,

    /// Set once the owner records the seed.
    pub hashed: bool,

    pub seed: [u8; 32],

    pub claimed: bool,

    /// Sum of refunds credited to displaced bidders and not yet withdrawn. These stay in the
    /// custody token account next to the best offer.
    pub pending_refunds: u64,
}

impl Auction {
    pub const SEED_PREFIX: &'static [u8] = b"auction";

    /// Whether `now` is within the bidding window.
    pub fn is_open(&self, now: i64) -> bool {
        self.start_time <= now && now <= self.end_time
    }

    /// Accept a bid that strictly exceeds the current offer. Returns the escrow owed to the
    /// displaced bidder, if there was one.
    pub fn place_bid(
        &mut self,
        best_offer: BestOffer,
        amount: u64,
        now: i64,
    ) -> Result<Option<Refund>> {
        require!(self.is_open(now), SealedAuctionError::Closed);
        require_gt!(amount, self.offer, SealedAuctionError::ErrPrice);

        let refund = self.best_offer.map(|previous| Refund {
            bidder: previous.bidder,
            amount: self.offer,
        });
        if let Some(Refund {
            amount: refunded, ..
        }) = refund
        {
            self.pending_refunds = self
                .pending_refunds
                .checked_add(refunded)
                .ok_or(SealedAuctionError::U64Overflow)?;
        }

        self.offer = amount;
        self.best_offer = Some(best_offer);

        Ok(refund)
    }

    /// Fix the slot whose hash will seed this auction. Only possible once `unseal_gap` seconds
    /// have passed since the end of bidding.
    pub fn unseal(&mut self, now: i64, unseal_gap: u32, slot: u64) -> Result<()> {
        require!(
            now >= self.end_time.saturating_add(unseal_gap.into()),
            SealedAuctionError::Unfinished
        );
        require!(!self.sealed, SealedAuctionError::AlreadyUnsealed);

        self.sealed = true;
        self.unsealed_slot = Some(slot);

        Ok(())
    }

    /// Store the hash of the unsealed slot. Returns that slot.
    pub fn record_seed(&mut self, seed: [u8; 32]) -> Result<u64> {
        let unsealed_slot = self
            .unsealed_slot
            .filter(|_| self.sealed)
            .ok_or(SealedAuctionError::Unfinished)?;
        require!(!self.hashed, SealedAuctionError::AlreadyHashed);
        require!(seed != [0; 32], SealedAuctionError::ZeroSeed);

        self.seed = seed;
        self.hashed = true;

        Ok(unsealed_slot)
    }

    /// Mark the item as claimed by the winning bidder. Returns the escrowed offer to release.
    pub fn claim(&mut self, claimant: &Pubkey) -> Result<u64> {
        require!(self.hashed, SealedAuctionError::Unfinished);
        require!(self.is_best_bidder(claimant), SealedAuctionError::NotWinner);
        require!(!self.claimed, SealedAuctionError::AlreadyClaimed);

        self.claimed = true;

        Ok(self.offer)
    }

    pub fn is_best_bidder(&self, bidder: &Pubkey) -> bool {
        self.best_offer.map(|best| best.bidder).as_ref() == Some(bidder)
    }

    /// Amount the custody token account must hold: the best offer until it is claimed, plus
    /// every refund not yet withdrawn.
    pub fn escrowed(&self) -> Result<u64> {
        let offer = if self.best_offer.is_some() && !self.claimed {
            self.offer
        } else {
            0
        };

        offer
            .checked_add(self.pending_refunds)
            .ok_or_else(|| error!(SealedAuctionError::U64Overflow))
    }

    /// Account for a refund leaving custody.
    pub fn release_refund(&mut self, amount: u64) -> Result<()> {
        self.pending_refunds = self
            .pending_refunds
            .checked_sub(amount)
            .ok_or(SealedAuctionError::CustodyBalanceMismatch)?;

        Ok(())
    }

    /// A bidder's refund record may only be closed once it can no longer be credited, i.e. they
    /// are not the best bidder or bidding is over.
    pub fn refund_record_closable(&self, bidder: &Pubkey, now: i64) -> bool {
        now > self.end_time || !self.is_best_bidder(bidder)
    }
}
