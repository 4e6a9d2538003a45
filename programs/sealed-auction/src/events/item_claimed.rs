use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct ItemClaimed {
    pub auction: Pubkey,
    pub id: u64,
    pub item_code: u64,
    pub winner: Pubkey,
    pub offer: u64,
    pub seed: [u8; 32],
    pub item_entropy: [u8; 32],
    pub item_registry: Pubkey,
    pub item_logic: Pubkey,
}
