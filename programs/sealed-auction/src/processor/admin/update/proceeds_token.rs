use crate::{composite::*, error::SealedAuctionError};
use anchor_lang::prelude::*;
use anchor_spl::token;

#[derive(Accounts)]
pub struct UpdateProceedsToken<'info> {
    admin: OwnerOnlyMut<'info>,

    #[account(
        constraint = {
            new_proceeds_token.mint == admin.mint
        } @ SealedAuctionError::InvalidProceedsToken,
        constraint = {
            new_proceeds_token.key() != admin.proceeds_token
        } @ SealedAuctionError::AlreadyTheProceedsToken,
    )]
    new_proceeds_token: Account<'info, token::TokenAccount>,
}

pub fn update_proceeds_token(ctx: Context<UpdateProceedsToken>) -> Result<()> {
    ctx.accounts.admin.proceeds_token = ctx.accounts.new_proceeds_token.key();

    // Done.
    Ok(())
}
