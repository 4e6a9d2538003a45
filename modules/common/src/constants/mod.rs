/// Seed for an auction's escrow (custody) token account.
pub const AUCTION_CUSTODY_TOKEN_SEED_PREFIX: &[u8] = b"auction-custody";

/// Default delay, in seconds, between an auction's end and the earliest `unseal`.
pub const DEFAULT_UNSEAL_GAP: u32 = 3600;

/// Identifier assigned to the first auction created.
pub const FIRST_AUCTION_ID: u64 = 1;
