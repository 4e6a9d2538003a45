use crate::admin::Ownable;
use anchor_lang::prelude::*;

pub fn only_owner<A>(acct: &A, owner: &Pubkey, custom_error: Error) -> Result<bool>
where
    A: Ownable,
{
    if acct.owner() == owner {
        Ok(true)
    } else {
        Err(custom_error.with_pubkeys((*acct.owner(), *owner)))
    }
}
