use crate::{composite::*, utils};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateUnsealGap<'info> {
    admin: OwnerOnlyMut<'info>,
}

pub fn update_unseal_gap(ctx: Context<UpdateUnsealGap>, unseal_gap: u32) -> Result<()> {
    utils::auction::require_valid_unseal_gap(unseal_gap)?;

    let custodian = &mut ctx.accounts.admin;
    msg!("Unseal gap: {} -> {} seconds", custodian.unseal_gap, unseal_gap);
    custodian.unseal_gap = unseal_gap;

    // Done.
    Ok(())
}
