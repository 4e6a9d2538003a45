use crate::admin::PendingOwner;
use anchor_lang::prelude::*;

pub fn only_pending_owner<A>(acct: &A, pending_owner: &Pubkey) -> bool
where
    A: PendingOwner,
{
    acct.pending_owner().as_ref() == Some(pending_owner)
}

pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Pubkey)
where
    A: PendingOwner,
{
    acct.pending_owner_mut().replace(*new_owner);
}

/// Promotes the pending owner. Returns false if there was no pending request.
pub fn accept_ownership<A>(acct: &mut A) -> bool
where
    A: PendingOwner,
{
    match acct.pending_owner_mut().take() {
        Some(pending_owner) => {
            *acct.owner_mut() = pending_owner;
            true
        }
        None => false,
    }
}

pub fn cancel_transfer_ownership<A>(acct: &mut A)
where
    A: PendingOwner,
{
    *acct.pending_owner_mut() = None;
}
