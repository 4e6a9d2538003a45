use std::ops::{Deref, DerefMut};

use crate::{error::SealedAuctionError, state::Custodian};
use anchor_lang::prelude::*;
use common::admin::utils::ownable::only_owner;

/// Custodian of an instruction whose first argument is an auction id. Listed before the auction
/// account so that an unknown id fails with `NotFound` before the auction is deserialized.
#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct AuctionCustodian<'info> {
    #[account(
        seeds = [Custodian::SEED_PREFIX],
        bump = custodian.bump,
        constraint = custodian.contains(auction_id) @ SealedAuctionError::NotFound,
    )]
    pub custodian: Account<'info, Custodian>,
}

impl<'info> Deref for AuctionCustodian<'info> {
    type Target = Account<'info, Custodian>;

    fn deref(&self) -> &Self::Target {
        &self.custodian
    }
}

#[derive(Accounts)]
pub struct OwnerOnlyMut<'info> {
    #[account(
        constraint = only_owner(
            &*custodian,
            &owner.key(),
            error!(SealedAuctionError::Unauthorized)
        )?
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Custodian::SEED_PREFIX],
        bump = custodian.bump,
    )]
    pub custodian: Account<'info, Custodian>,
}

impl<'info> Deref for OwnerOnlyMut<'info> {
    type Target = Account<'info, Custodian>;

    fn deref(&self) -> &Self::Target {
        &self.custodian
    }
}

impl<'info> DerefMut for OwnerOnlyMut<'info> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.custodian
    }
}
