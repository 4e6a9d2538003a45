use crate::{composite::*, error::SealedAuctionError, state::Auction};
use anchor_lang::prelude::*;
use common::admin::utils::ownable::only_owner;

#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct SetHash<'info> {
    #[account(
        constraint = only_owner(
            &**custodian,
            &owner.key(),
            error!(SealedAuctionError::Unauthorized)
        )?
    )]
    owner: Signer<'info>,

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

/// Record the hash of the slot fixed by `unseal` as the auction's seed.
pub fn set_hash(ctx: Context<SetHash>, _auction_id: u64, seed: [u8; 32]) -> Result<()> {
    let auction = &mut ctx.accounts.auction;
    let unsealed_slot = auction.record_seed(seed)?;

    msg!("Auction {} seed: {}", auction.id, hex::encode(seed));

    emit!(crate::events::SeedRecorded {
        auction: auction.key(),
        id: auction.id,
        unsealed_slot,
        seed,
    });

    // Done.
    Ok(())
}
