use crate::{error::SealedAuctionError, state::Custodian};
use anchor_lang::prelude::*;
use common::admin::utils::pending_owner;

#[derive(Accounts)]
pub struct ConfirmOwnershipTransferRequest<'info> {
    /// Must be the pending owner of the program set in the [`Custodian`]
    /// account.
    pending_owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Custodian::SEED_PREFIX],
        bump = custodian.bump,
        constraint = {
            custodian.pending_owner.is_some()
        } @ SealedAuctionError::NoTransferOwnershipRequest,
        constraint = {
            pending_owner::only_pending_owner(&*custodian, &pending_owner.key())
        } @ SealedAuctionError::NotPendingOwner,
    )]
    custodian: Account<'info, Custodian>,
}

pub fn confirm_ownership_transfer_request(
    ctx: Context<ConfirmOwnershipTransferRequest>,
) -> Result<()> {
    let custodian = &mut ctx.accounts.custodian;
    require!(
        pending_owner::accept_ownership(&mut **custodian),
        SealedAuctionError::NoTransferOwnershipRequest
    );

    msg!("New owner: {}", custodian.owner);

    // Done.
    Ok(())
}
