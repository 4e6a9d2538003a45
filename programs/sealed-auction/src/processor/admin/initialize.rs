use crate::{error::SealedAuctionError, state::Custodian, utils};
use anchor_lang::prelude::*;
use anchor_spl::token;
use common::constants::{DEFAULT_UNSEAL_GAP, FIRST_AUCTION_ID};

#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeArgs {
    /// Seconds between an auction's end and its earliest unseal. Defaults to one hour.
    pub unseal_gap: Option<u32>,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Owner of the program, who presumably deployed this program.
    #[account(mut)]
    owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Custodian::INIT_SPACE,
        seeds = [Custodian::SEED_PREFIX],
        bump,
    )]
    /// Custodian account, which saves program data useful for other
    /// instructions.
    custodian: Account<'info, Custodian>,

    /// Mint of the token offers are escrowed in.
    mint: Account<'info, token::Mint>,

    /// CHECK: This account must not be the zero pubkey.
    #[account(
        constraint = {
            item_registry.key() != Pubkey::default()
        } @ SealedAuctionError::ItemRegistryZeroPubkey,
    )]
    item_registry: UncheckedAccount<'info>,

    /// CHECK: This account must not be the zero pubkey.
    #[account(
        constraint = item_logic.key() != Pubkey::default() @ SealedAuctionError::ItemLogicZeroPubkey,
    )]
    item_logic: UncheckedAccount<'info>,

    #[account(
        constraint = proceeds_token.mint == mint.key() @ SealedAuctionError::InvalidProceedsToken,
    )]
    proceeds_token: Account<'info, token::TokenAccount>,

    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
    let unseal_gap = args.unseal_gap.unwrap_or(DEFAULT_UNSEAL_GAP);
    utils::auction::require_valid_unseal_gap(unseal_gap)?;

    ctx.accounts.custodian.set_inner(Custodian {
        bump: ctx.bumps.custodian,
        owner: ctx.accounts.owner.key(),
        pending_owner: None,
        mint: ctx.accounts.mint.key(),
        item_registry: ctx.accounts.item_registry.key(),
        item_logic: ctx.accounts.item_logic.key(),
        proceeds_token: ctx.accounts.proceeds_token.key(),
        unseal_gap,
        next_auction_id: FIRST_AUCTION_ID,
    });

    msg!("Unseal gap: {} seconds", unseal_gap);

    // Done.
    Ok(())
}
