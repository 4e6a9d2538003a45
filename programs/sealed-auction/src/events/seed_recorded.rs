use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct SeedRecorded {
    pub auction: Pubkey,
    pub id: u64,
    pub unsealed_slot: u64,
    pub seed: [u8; 32],
}
