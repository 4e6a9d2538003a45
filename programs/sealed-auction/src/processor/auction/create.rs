use crate::{
    error::SealedAuctionError,
    state::{Auction, Custodian},
    utils,
};
use anchor_lang::prelude::*;
use anchor_spl::token;
use common::constants::AUCTION_CUSTODY_TOKEN_SEED_PREFIX;

#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct CreateAuctionArgs {
    pub item_code: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub min_offer: u64,
}

#[derive(Accounts)]
pub struct CreateAuction<'info> {
    #[account(mut)]
    payer: Signer<'info>,

    #[account(
        constraint = common::admin::utils::ownable::only_owner(
            &*custodian,
            &owner.key(),
            error!(SealedAuctionError::Unauthorized)
        )?
    )]
    owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Custodian::SEED_PREFIX],
        bump = custodian.bump,
    )]
    custodian: Account<'info, Custodian>,

    /// This account should only be created once, and should never be changed to
    /// init_if_needed. Otherwise an existing auction could be overwritten.
    #[account(
        init,
        payer = payer,
        space = 8 + Auction::INIT_SPACE,
        seeds = [
            Auction::SEED_PREFIX,
            &custodian.next_auction_id.to_be_bytes(),
        ],
        bump,
    )]
    auction: Box<Account<'info, Auction>>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = custodian,
        seeds = [
            AUCTION_CUSTODY_TOKEN_SEED_PREFIX,
            auction.key().as_ref(),
        ],
        bump,
    )]
    auction_custody_token: Box<Account<'info, token::TokenAccount>>,

    #[account(address = custodian.mint)]
    mint: Box<Account<'info, token::Mint>>,

    system_program: Program<'info, System>,
    token_program: Program<'info, token::Token>,
}

pub fn create_auction(ctx: Context<CreateAuction>, args: CreateAuctionArgs) -> Result<()> {
    let CreateAuctionArgs {
        item_code,
        start_time,
        end_time,
        min_offer,
    } = args;

    utils::auction::require_valid_window(start_time, end_time)?;

    let id = ctx.accounts.custodian.reserve_auction_id()?;

    ctx.accounts.auction.set_inner(Auction {
        bump: ctx.bumps.auction,
        custody_token_bump: ctx.bumps.auction_custody_token,
        id,
        item_code,
        start_time,
        end_time,
        min_offer,
        offer: min_offer,
        best_offer: None,
        sealed: false,
        unsealed_slot: None,
        hashed: false,
        seed: [0; 32],
        claimed: false,
        pending_refunds: 0,
    });

    msg!(
        "Auction {} open from {} to {}, unseals at {}",
        id,
        start_time,
        end_time,
        ctx.accounts.custodian.unseal_time(end_time)
    );

    emit!(crate::events::AuctionCreated {
        auction: ctx.accounts.auction.key(),
        id,
        item_code,
        start_time,
        end_time,
        min_offer,
    });

    // Done.
    Ok(())
}
