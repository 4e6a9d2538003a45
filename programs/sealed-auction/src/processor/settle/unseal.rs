use crate::{
    composite::*,
    state::Auction,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct Unseal<'info> {
    /// Anyone may unseal an auction once the unseal gap has passed.
    payer: Signer<'info>,

    custodian: AuctionCustodian<'info>,

    #[account(
        mut,
        seeds = [
            Auction::SEED_PREFIX,
            &auction_id.to_be_bytes(),
        ],
        bump = auction.bump,
    )]
    auction: Account<'info, Auction>,
}

/// Returns the slot whose hash is to be recorded as the auction's seed.
pub fn unseal(ctx: Context<Unseal>, _auction_id: u64) -> Result<u64> {
    let Clock {
        slot,
        unix_timestamp,
        ..
    } = Clock::get()?;

    let auction = &mut ctx.accounts.auction;
    auction.unseal(unix_timestamp, ctx.accounts.custodian.unseal_gap, slot)?;

    msg!("Auction {} unsealed at slot {}", auction.id, slot);

    emit!(crate::events::AuctionUnsealed {
        auction: auction.key(),
        id: auction.id,
        unsealed_by: ctx.accounts.payer.key(),
        slot,
    });

    Ok(slot)
}
