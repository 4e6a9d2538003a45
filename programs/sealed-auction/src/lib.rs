#![doc = include_str!("../README.md")]
#![allow(clippy::result_large_err)]

mod composite;

pub mod error;

mod events;

mod processor;
use processor::*;
pub use processor::{CreateAuctionArgs, InitializeArgs};

pub mod state;

pub mod utils;

use anchor_lang::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "testnet")] {
        declare_id!("AzTwj2qtbnRzSVULW5SAxcEJFisjifFuuczgR2zKqTgt");
    } else {
        declare_id!("AuctionSeed11111111111111111111111111111111");
    }
}

#[program]
pub mod sealed_auction {
    use super::*;

    /// This instruction generates the program's `custodian`, which holds the auction mint, the
    /// item registry and logic program addresses, the proceeds token account and the unseal gap.
    ///
    /// # Arguments
    ///
    /// * `ctx`  - `Initialize` context.
    /// * `args` - Initialize args. The unseal gap defaults to one hour.
    pub fn initialize(ctx: Context<Initialize>, args: InitializeArgs) -> Result<()> {
        processor::initialize(ctx, args)
    }

    /// This instruction sets the `pending_owner` field in the `custodian` account. Only the
    /// `owner` can call this instruction. The `pending_owner` must then confirm the transfer.
    ///
    /// # Arguments
    ///
    /// * `ctx` - `SubmitOwnershipTransferRequest` context.
    pub fn submit_ownership_transfer_request(
        ctx: Context<SubmitOwnershipTransferRequest>,
    ) -> Result<()> {
        processor::submit_ownership_transfer_request(ctx)
    }

    /// This instruction confirms the ownership transfer request and sets the new `owner` in the
    /// `custodian` account. Only the `pending_owner` can call this instruction.
    ///
    /// # Arguments
    ///
    /// * `ctx` - `ConfirmOwnershipTransferRequest` context.
    pub fn confirm_ownership_transfer_request(
        ctx: Context<ConfirmOwnershipTransferRequest>,
    ) -> Result<()> {
        processor::confirm_ownership_transfer_request(ctx)
    }

    /// This instruction cancels an ownership transfer request by resetting the `pending_owner`
    /// field in the `custodian` account. Only the `owner` can call this instruction.
    ///
    /// # Arguments
    ///
    /// * `ctx` - `CancelOwnershipTransferRequest` context.
    pub fn cancel_ownership_transfer_request(
        ctx: Context<CancelOwnershipTransferRequest>,
    ) -> Result<()> {
        processor::cancel_ownership_transfer_request(ctx)
    }

    /// This instruction updates the number of seconds that must pass after an auction's end time
    /// before it can be unsealed. Auctions already unsealed are unaffected. Only the `owner` can
    /// call this instruction.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `UpdateUnsealGap` context.
    /// * `unseal_gap` - New unseal gap in seconds. Must be nonzero.
    pub fn update_unseal_gap(ctx: Context<UpdateUnsealGap>, unseal_gap: u32) -> Result<()> {
        processor::update_unseal_gap(ctx, unseal_gap)
    }

    /// This instruction updates the token account that receives winning offers. Only the
    /// `owner` can call this instruction.
    ///
    /// # Arguments
    ///
    /// * `ctx` - `UpdateProceedsToken` context.
    pub fn update_proceeds_token(ctx: Context<UpdateProceedsToken>) -> Result<()> {
        processor::update_proceeds_token(ctx)
    }

    /// This instruction registers a new auction under the next sequential id and creates its
    /// custody token account. Only the `owner` can call this instruction.
    ///
    /// # Arguments
    ///
    /// * `ctx`  - `CreateAuction` context.
    /// * `args` - Item code, bidding window and minimum offer.
    pub fn create_auction(ctx: Context<CreateAuction>, args: CreateAuctionArgs) -> Result<()> {
        processor::create_auction(ctx, args)
    }

    /// This instruction places a bid that must strictly exceed the current offer. The offer is
    /// pulled into the auction's custody account through the `transfer_authority` delegate. The
    /// displaced bidder, if any, has their full offer credited to their refund record.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `Bid` context.
    /// * `auction_id` - Id of the auction to bid on.
    /// * `amount`     - Offer amount.
    pub fn bid(ctx: Context<Bid>, auction_id: u64, amount: u64) -> Result<()> {
        processor::bid(ctx, auction_id, amount)
    }

    /// This instruction pays out a bidder's credited refunds to any token account of the auction
    /// mint. The refund record is closed unless the bidder still holds the best offer of an open
    /// auction.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `WithdrawRefund` context.
    /// * `auction_id` - Id of the auction the bidder was outbid in.
    pub fn withdraw_refund(ctx: Context<WithdrawRefund>, auction_id: u64) -> Result<()> {
        processor::withdraw_refund(ctx, auction_id)
    }

    /// This instruction returns the full record of an auction as return data.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `GetAuctionInfo` context.
    /// * `auction_id` - Id of the auction to look up.
    pub fn get_auction_info(ctx: Context<GetAuctionInfo>, auction_id: u64) -> Result<state::Auction> {
        processor::get_auction_info(ctx, auction_id)
    }

    /// This instruction fixes the slot whose hash becomes the auction's seed. Anyone can call
    /// it once the unseal gap has passed since the end of bidding. Returns the slot.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `Unseal` context.
    /// * `auction_id` - Id of the auction to unseal.
    pub fn unseal(ctx: Context<Unseal>, auction_id: u64) -> Result<u64> {
        processor::unseal(ctx, auction_id)
    }

    /// This instruction records the hash of the unsealed slot as the auction's seed. Only the
    /// `owner` can call this instruction, and only once per auction.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `SetHash` context.
    /// * `auction_id` - Id of the unsealed auction.
    /// * `seed`       - Hash of the unsealed slot.
    pub fn set_hash(ctx: Context<SetHash>, auction_id: u64, seed: [u8; 32]) -> Result<()> {
        processor::set_hash(ctx, auction_id, seed)
    }

    /// This instruction lets the winning bidder claim the item once the seed is recorded. The
    /// escrowed offer moves to the proceeds token account and the item registry picks up the
    /// emitted `ItemClaimed` event.
    ///
    /// # Arguments
    ///
    /// * `ctx`        - `Claim` context.
    /// * `auction_id` - Id of the won auction.
    pub fn claim(ctx: Context<Claim>, auction_id: u64) -> Result<()> {
        processor::claim(ctx, auction_id)
    }
}
