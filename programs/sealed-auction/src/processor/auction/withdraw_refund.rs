use crate::{
    composite::*,
    error::SealedAuctionError,
    state::{Auction, Custodian, PendingRefund},
};
use anchor_lang::prelude::*;
use anchor_spl::token;
use common::constants::AUCTION_CUSTODY_TOKEN_SEED_PREFIX;

#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct WithdrawRefund<'info> {
    /// Receives the refund record's lamports when it is closed.
    #[account(mut)]
    bidder: Signer<'info>,

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

    #[account(
        mut,
        seeds = [
            PendingRefund::SEED_PREFIX,
            auction.key().as_ref(),
            bidder.key().as_ref(),
        ],
        bump = pending_refund.bump,
    )]
    pending_refund: Account<'info, PendingRefund>,

    /// Any token account of the auction mint.
    #[account(
        mut,
        token::mint = custodian.mint,
    )]
    refund_token: Box<Account<'info, token::TokenAccount>>,

    token_program: Program<'info, token::Token>,
}

pub fn withdraw_refund(ctx: Context<WithdrawRefund>, _auction_id: u64) -> Result<()> {
    let bidder = ctx.accounts.bidder.key();
    let amount = ctx.accounts.pending_refund.take();
    ctx.accounts.auction.release_refund(amount)?;

    let closable = ctx
        .accounts
        .auction
        .refund_record_closable(&bidder, Clock::get()?.unix_timestamp);
    require!(
        amount > 0 || closable,
        SealedAuctionError::NothingToWithdraw
    );

    if amount > 0 {
        let custodian = &ctx.accounts.custodian;

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::Transfer {
                    from: ctx.accounts.auction_custody_token.to_account_info(),
                    to: ctx.accounts.refund_token.to_account_info(),
                    authority: custodian.to_account_info(),
                },
                &[&[Custodian::SEED_PREFIX, &[custodian.bump]]],
            ),
            amount,
        )?;
    }

    if closable {
        ctx.accounts
            .pending_refund
            .close(ctx.accounts.bidder.to_account_info())?;
    }

    let auction = &ctx.accounts.auction;

    emit!(crate::events::RefundWithdrawn {
        auction: auction.key(),
        id: auction.id,
        bidder,
        refund_token: ctx.accounts.refund_token.key(),
        amount,
        closed: closable,
    });

    // Done.
    Ok(())
}
