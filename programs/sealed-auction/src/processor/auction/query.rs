use crate::{composite::*, state::Auction};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct GetAuctionInfo<'info> {
    custodian: AuctionCustodian<'info>,

    #[account(
        seeds = [
            Auction::SEED_PREFIX,
            &auction_id.to_be_bytes(),
        ],
        bump = auction.bump,
    )]
    auction: Account<'info, Auction>,
}

/// Read-only projection of an auction, delivered through return data.
pub fn get_auction_info(ctx: Context<GetAuctionInfo>, _auction_id: u64) -> Result<Auction> {
    Ok(ctx.accounts.auction.clone().into_inner())
}
