use anchor_lang::prelude::*;
use solana_program::keccak;

/// Entropy handed to the item registry when the winner claims. It binds the recorded seed to the
/// item and its recipient so the registry can pick among interchangeable inventory.
pub fn compute_item_entropy(seed: &[u8; 32], item_code: u64, winner: &Pubkey) -> [u8; 32] {
    keccak::hashv(&[seed.as_ref(), &item_code.to_be_bytes(), winner.as_ref()]).to_bytes()
}
