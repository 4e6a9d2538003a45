use crate::{
    composite::*,
    error::SealedAuctionError,
    state::{Auction, BestOffer, PendingRefund, Refund},
};
use anchor_lang::prelude::*;
use anchor_spl::token;
use common::{constants::AUCTION_CUSTODY_TOKEN_SEED_PREFIX, TRANSFER_AUTHORITY_SEED_PREFIX};

#[derive(Accounts)]
#[instruction(auction_id: u64, amount: u64)]
pub struct Bid<'info> {
    /// Bidder, who pays for their refund record the first time they bid on this auction.
    #[account(mut)]
    bidder: Signer<'info>,

    /// The bidder needs to approve this PDA as delegate of `offer_token` for at least `amount`.
    ///
    /// CHECK: Seeds must be \["transfer-authority", auction.key(), amount.to_be_bytes()\].
    #[account(
        seeds = [
            TRANSFER_AUTHORITY_SEED_PREFIX,
            auction.key().as_ref(),
            &amount.to_be_bytes()
        ],
        bump
    )]
    transfer_authority: UncheckedAccount<'info>,

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

    /// Token account the new offer is pulled from.
    #[account(
        mut,
        token::mint = custodian.mint,
        token::authority = bidder,
    )]
    offer_token: Box<Account<'info, token::TokenAccount>>,

    /// Where this bidder's escrow is credited if they are outbid.
    #[account(
        init_if_needed,
        payer = bidder,
        space = 8 + PendingRefund::INIT_SPACE,
        seeds = [
            PendingRefund::SEED_PREFIX,
            auction.key().as_ref(),
            bidder.key().as_ref(),
        ],
        bump,
    )]
    bidder_refund: Box<Account<'info, PendingRefund>>,

    /// Refund record of the bidder being displaced. Required once the auction has a bid from
    /// someone else, and must be omitted when the best bidder raises their own offer.
    #[account(mut)]
    best_offer_refund: Option<Account<'info, PendingRefund>>,

    token_program: Program<'info, token::Token>,
    system_program: Program<'info, System>,
}

pub fn bid(ctx: Context<Bid>, _auction_id: u64, amount: u64) -> Result<()> {
    let bidder = ctx.accounts.bidder.key();
    let auction_key = ctx.accounts.auction.key();

    // The custody account must at least hold what the auction owes.
    require_gte!(
        ctx.accounts.auction_custody_token.amount,
        ctx.accounts.auction.escrowed()?,
        SealedAuctionError::CustodyBalanceMismatch
    );

    if ctx.accounts.bidder_refund.bidder == Pubkey::default() {
        ctx.accounts.bidder_refund.set_inner(PendingRefund {
            bump: ctx.bumps.bidder_refund,
            auction: auction_key,
            bidder,
            amount: 0,
        });
    }

    let offer_token = &ctx.accounts.offer_token;
    let refund = ctx.accounts.auction.place_bid(
        BestOffer {
            bidder,
            token: offer_token.key(),
        },
        amount,
        Clock::get()?.unix_timestamp,
    )?;

    // Pull the new offer into escrow using the bidder's approval.
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::Transfer {
                from: offer_token.to_account_info(),
                to: ctx.accounts.auction_custody_token.to_account_info(),
                authority: ctx.accounts.transfer_authority.to_account_info(),
            },
            &[&[
                TRANSFER_AUTHORITY_SEED_PREFIX,
                auction_key.as_ref(),
                &amount.to_be_bytes(),
                &[ctx.bumps.transfer_authority],
            ]],
        ),
        amount,
    )?;

    // The displaced bidder's escrow stays in custody until they withdraw it.
    if let Some(Refund {
        bidder: displaced,
        amount: refund_amount,
    }) = refund
    {
        if displaced == bidder {
            require!(
                ctx.accounts.best_offer_refund.is_none(),
                SealedAuctionError::BestOfferRefundMismatch
            );
            ctx.accounts.bidder_refund.credit(refund_amount)?;
        } else {
            let best_offer_refund = ctx
                .accounts
                .best_offer_refund
                .as_mut()
                .ok_or(SealedAuctionError::BestOfferRefundRequired)?;
            require_keys_eq!(
                best_offer_refund.auction,
                auction_key,
                SealedAuctionError::BestOfferRefundMismatch
            );
            require_keys_eq!(
                best_offer_refund.bidder,
                displaced,
                SealedAuctionError::BestOfferRefundMismatch
            );
            best_offer_refund.credit(refund_amount)?;
        }
    }

    let auction = &ctx.accounts.auction;
    let offer_token = &ctx.accounts.offer_token;

    // Emit event for auction participants to listen to.
    emit!(crate::events::BidPlaced {
        auction: auction_key,
        id: auction.id,
        bidder,
        offer_token: offer_token.key(),
        offer: amount,
        token_balance_before: offer_token.amount,
        refunded_bidder: refund.map(|refund| refund.bidder),
        refunded_amount: refund.map(|refund| refund.amount).unwrap_or_default(),
    });

    // Done.
    Ok(())
}
