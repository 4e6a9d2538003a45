use crate::error::SealedAuctionError;
use anchor_lang::prelude::*;

/// Escrow owed to one bidder of one auction after being outbid. Every bidder gets one when they
/// first bid, so a displaced bidder's record always exists when it needs to be credited.
#[account]
#[derive(Debug, InitSpace, PartialEq, Eq)]
pub struct PendingRefund {
    pub bump: u8,
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
}

impl PendingRefund {
    pub const SEED_PREFIX: &'static [u8] = b"pending-refund";

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(SealedAuctionError::U64Overflow)?;

        Ok(())
    }

    /// Zero the balance, returning what was owed.
    pub fn take(&mut self) -> u64 {
        std::mem::take(&mut self.amount)
    }
}
