use crate::{
    composite::*,
    error::SealedAuctionError,
    state::{Auction, Custodian},
    utils,
};
use anchor_lang::prelude::*;
use anchor_spl::token;
use common::constants::AUCTION_CUSTODY_TOKEN_SEED_PREFIX;

#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct Claim<'info> {
    /// Must be the best bidder.
    winner: Signer<'info>,

    custodian: AuctionCustodian<'info>,

    #[account(
        mut,
        seeds = [
            Auction::SEED_PREFIX,
            &auction_id.to_be_bytes(),
        ],
        bump = auction.bump,
    )]
    auction: Box<Account<'info, Auction>>,

    #[account(
        mut,
        seeds = [
            AUCTION_CUSTODY_TOKEN_SEED_PREFIX,
            auction.key().as_ref(),
        ],
        bump = auction.custody_token_bump,
    )]
    auction_custody_token: Box<Account<'info, token::TokenAccount>>,

    /// Destination of the winning offer.
    #[account(
        mut,
        address = custodian.proceeds_token @ SealedAuctionError::InvalidProceedsToken,
    )]
    proceeds_token: Box<Account<'info, token::TokenAccount>>,

    token_program: Program<'info, token::Token>,
}

pub fn claim(ctx: Context<Claim>, _auction_id: u64) -> Result<()> {
    let winner = ctx.accounts.winner.key();
    let offer = ctx.accounts.auction.claim(&winner)?;

    let custodian = &ctx.accounts.custodian;

    // Release the winning escrow.
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: ctx.accounts.auction_custody_token.to_account_info(),
                to: ctx.accounts.proceeds_token.to_account_info(),
                authority: custodian.to_account_info(),
            },
            &[&[Custodian::SEED_PREFIX, &[custodian.bump]]],
        ),
        offer,
    )?;

    let auction = &ctx.accounts.auction;
    let item_entropy = utils::item::compute_item_entropy(&auction.seed, auction.item_code, &winner);

    // The item registry issues the item to the winner from this event.
    emit!(crate::events::ItemClaimed {
        auction: auction.key(),
        id: auction.id,
        item_code: auction.item_code,
        winner,
        offer,
        seed: auction.seed,
        item_entropy,
        item_registry: custodian.item_registry,
        item_logic: custodian.item_logic,
    });

    // Done.
    Ok(())
}
