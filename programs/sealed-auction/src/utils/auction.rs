use crate::error::SealedAuctionError;
use anchor_lang::prelude::*;

pub fn require_valid_window(start_time: i64, end_time: i64) -> Result<()> {
    require!(start_time < end_time, SealedAuctionError::InvalidWindow);

    Ok(())
}

pub fn require_valid_unseal_gap(unseal_gap: u32) -> Result<()> {
    require!(unseal_gap > 0, SealedAuctionError::InvalidUnsealGap);

    Ok(())
}
