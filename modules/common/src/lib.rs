pub mod admin;

pub mod constants;

/// Seed prefix of the PDA a bidder approves as SPL delegate before bidding.
pub const TRANSFER_AUTHORITY_SEED_PREFIX: &[u8] = b"transfer-authority";
