//! # Auction House
//!
//! Drives the sealed auction program inside `solana-program-test`. Each helper builds the
//! instruction the way a client would (PDAs derived from the program's seed prefixes) and sends
//! it in its own transaction with a fresh blockhash.

#![allow(dead_code)]

use anchor_lang::{
    solana_program::{account_info::AccountInfo, entrypoint::ProgramResult},
    AccountDeserialize, AnchorDeserialize, InstructionData, ToAccountMetas,
};
use anchor_spl::{
    associated_token::spl_associated_token_account,
    token::{spl_token, TokenAccount},
};
use common::{constants::AUCTION_CUSTODY_TOKEN_SEED_PREFIX, TRANSFER_AUTHORITY_SEED_PREFIX};
use sealed_auction::{
    accounts, instruction,
    state::{Auction, Custodian, PendingRefund},
    CreateAuctionArgs, InitializeArgs,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    native_token::LAMPORTS_PER_SOL,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

pub const DECIMALS: u8 = 6;

pub type BanksResult = Result<(), BanksClientError>;

/// Token amount in whole units of the auction mint.
pub fn units(amount: u64) -> u64 {
    amount * 10u64.pow(DECIMALS.into())
}

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    sealed_auction::entry(program_id, accounts, data)
}

pub fn custodian_address() -> Pubkey {
    Pubkey::find_program_address(&[Custodian::SEED_PREFIX], &sealed_auction::ID).0
}

pub fn auction_address(auction_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[Auction::SEED_PREFIX, &auction_id.to_be_bytes()],
        &sealed_auction::ID,
    )
    .0
}

pub fn custody_token_address(auction: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[AUCTION_CUSTODY_TOKEN_SEED_PREFIX, auction.as_ref()],
        &sealed_auction::ID,
    )
    .0
}

pub fn refund_address(auction: &Pubkey, bidder: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[PendingRefund::SEED_PREFIX, auction.as_ref(), bidder.as_ref()],
        &sealed_auction::ID,
    )
    .0
}

pub fn transfer_authority_address(auction: &Pubkey, amount: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            TRANSFER_AUTHORITY_SEED_PREFIX,
            auction.as_ref(),
            &amount.to_be_bytes(),
        ],
        &sealed_auction::ID,
    )
    .0
}

/// Sends `instructions` in one transaction paid for by the context payer.
pub async fn process(
    ctx: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> BanksResult {
    let blockhash = ctx.get_new_latest_blockhash().await?;

    let mut all_signers = vec![&ctx.payer];
    all_signers.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&ctx.payer.pubkey()),
        &all_signers,
        blockhash,
    );

    ctx.banks_client.process_transaction(tx).await
}

#[track_caller]
pub fn assert_program_error(result: BanksResult, expected: sealed_auction::error::SealedAuctionError) {
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(error_code),
        ))) => assert_eq!(
            error_code,
            u32::from(expected),
            "Program returned error code {error_code}, expected {expected:?}"
        ),
        other => panic!("Expected program error {expected:?}, but got: {other:?}"),
    }
}

/// A bidder with an associated token account of the auction mint.
pub struct Player {
    pub keypair: Keypair,
    pub token: Pubkey,
}

impl Player {
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

pub struct AuctionHouse {
    pub ctx: ProgramTestContext,
    pub owner: Keypair,
    pub mint: Pubkey,
    pub proceeds_token: Pubkey,
}

impl AuctionHouse {
    /// Starts the program and initializes the custodian with the default unseal gap.
    pub async fn new() -> Self {
        let mut program_test = ProgramTest::new(
            "sealed_auction",
            sealed_auction::ID,
            processor!(process_instruction),
        );
        program_test.prefer_bpf(false);

        let mut ctx = program_test.start_with_context().await;

        let owner = Keypair::new();
        airdrop(&mut ctx, &owner.pubkey()).await;

        let mint = create_mint(&mut ctx).await;
        let proceeds_token = create_token_account(&mut ctx, &Pubkey::new_unique(), &mint).await;

        let initialize_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::Initialize {
                owner: owner.pubkey(),
                custodian: custodian_address(),
                mint,
                item_registry: Pubkey::new_unique(),
                item_logic: Pubkey::new_unique(),
                proceeds_token,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: instruction::Initialize {
                args: InitializeArgs { unseal_gap: None },
            }
            .data(),
        };
        process(&mut ctx, &[initialize_ix], &[&owner])
            .await
            .unwrap();

        Self {
            ctx,
            owner,
            mint,
            proceeds_token,
        }
    }

    pub async fn now(&mut self) -> i64 {
        self.clock().await.unix_timestamp
    }

    pub async fn clock(&mut self) -> Clock {
        self.ctx.banks_client.get_sysvar::<Clock>().await.unwrap()
    }

    pub async fn fast_forward_to_timestamp(&mut self, unix_timestamp: i64) {
        let clock = self.clock().await;
        self.ctx.set_sysvar(&Clock {
            unix_timestamp,
            ..clock
        });
        assert_eq!(self.now().await, unix_timestamp);
    }

    pub async fn custodian(&mut self) -> Custodian {
        self.read_account(&custodian_address()).await.unwrap()
    }

    pub async fn auction(&mut self, auction_id: u64) -> Auction {
        self.read_account(&auction_address(auction_id))
            .await
            .unwrap()
    }

    pub async fn pending_refund(&mut self, auction_id: u64, bidder: &Pubkey) -> Option<PendingRefund> {
        let auction = auction_address(auction_id);
        self.read_account(&refund_address(&auction, bidder)).await
    }

    pub async fn balance(&mut self, token: &Pubkey) -> u64 {
        let token_account: TokenAccount = self.read_account(token).await.unwrap();
        token_account.amount
    }

    pub async fn custody_balance(&mut self, auction_id: u64) -> u64 {
        let auction = auction_address(auction_id);
        self.balance(&custody_token_address(&auction)).await
    }

    pub async fn account_exists(&mut self, address: &Pubkey) -> bool {
        self.ctx
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .is_some()
    }

    async fn read_account<T: AccountDeserialize>(&mut self, address: &Pubkey) -> Option<T> {
        let account = self.ctx.banks_client.get_account(*address).await.unwrap()?;
        Some(T::try_deserialize(&mut account.data.as_slice()).unwrap())
    }

    /// Funds a new bidder with SOL for fees and rent, and `amount` of the auction mint.
    pub async fn new_player(&mut self, amount: u64) -> Player {
        let keypair = Keypair::new();
        airdrop(&mut self.ctx, &keypair.pubkey()).await;

        let token = create_token_account(&mut self.ctx, &keypair.pubkey(), &self.mint).await;
        if amount > 0 {
            let mint_to_ix = spl_token::instruction::mint_to(
                &spl_token::ID,
                &self.mint,
                &token,
                &self.ctx.payer.pubkey(),
                &[],
                amount,
            )
            .unwrap();
            process(&mut self.ctx, &[mint_to_ix], &[]).await.unwrap();
        }

        Player { keypair, token }
    }

    /// Creates an auction for item 801 as the owner. Returns its id.
    pub async fn create_auction(
        &mut self,
        start_time: i64,
        end_time: i64,
        min_offer: u64,
    ) -> Result<u64, BanksClientError> {
        let owner = self.owner.insecure_clone();
        self.create_auction_as(&owner, start_time, end_time, min_offer)
            .await
    }

    pub async fn create_auction_as(
        &mut self,
        signer: &Keypair,
        start_time: i64,
        end_time: i64,
        min_offer: u64,
    ) -> Result<u64, BanksClientError> {
        let auction_id = self.custodian().await.next_auction_id;
        let auction = auction_address(auction_id);

        let create_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::CreateAuction {
                payer: self.ctx.payer.pubkey(),
                owner: signer.pubkey(),
                custodian: custodian_address(),
                auction,
                auction_custody_token: custody_token_address(&auction),
                mint: self.mint,
                system_program: system_program::ID,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::CreateAuction {
                args: CreateAuctionArgs {
                    item_code: 801,
                    start_time,
                    end_time,
                    min_offer,
                },
            }
            .data(),
        };
        process(&mut self.ctx, &[create_ix], &[signer]).await?;

        Ok(auction_id)
    }

    /// Approves the transfer authority and bids. The displaced bidder's refund record is derived
    /// from the auction's current best offer.
    pub async fn bid(&mut self, auction_id: u64, player: &Player, amount: u64) -> BanksResult {
        let auction = auction_address(auction_id);
        let best_offer_refund = match self.read_account::<Auction>(&auction).await {
            Some(Auction {
                best_offer: Some(best),
                ..
            }) if best.bidder != player.pubkey() => Some(refund_address(&auction, &best.bidder)),
            _ => None,
        };

        self.bid_with_refund(auction_id, player, amount, best_offer_refund)
            .await
    }

    pub async fn bid_with_refund(
        &mut self,
        auction_id: u64,
        player: &Player,
        amount: u64,
        best_offer_refund: Option<Pubkey>,
    ) -> BanksResult {
        let auction = auction_address(auction_id);
        let transfer_authority = transfer_authority_address(&auction, amount);

        let approve_ix = spl_token::instruction::approve(
            &spl_token::ID,
            &player.token,
            &transfer_authority,
            &player.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        let bid_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::Bid {
                bidder: player.pubkey(),
                transfer_authority,
                custodian: accounts::AuctionCustodian {
                    custodian: custodian_address(),
                },
                auction,
                auction_custody_token: custody_token_address(&auction),
                offer_token: player.token,
                bidder_refund: refund_address(&auction, &player.pubkey()),
                best_offer_refund,
                token_program: spl_token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: instruction::Bid { auction_id, amount }.data(),
        };

        process(&mut self.ctx, &[approve_ix, bid_ix], &[&player.keypair]).await
    }

    pub async fn withdraw_refund(
        &mut self,
        auction_id: u64,
        player: &Player,
        refund_token: Pubkey,
    ) -> BanksResult {
        let auction = auction_address(auction_id);

        let withdraw_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::WithdrawRefund {
                bidder: player.pubkey(),
                custodian: accounts::AuctionCustodian {
                    custodian: custodian_address(),
                },
                auction,
                auction_custody_token: custody_token_address(&auction),
                pending_refund: refund_address(&auction, &player.pubkey()),
                refund_token,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::WithdrawRefund { auction_id }.data(),
        };

        process(&mut self.ctx, &[withdraw_ix], &[&player.keypair]).await
    }

    pub async fn unseal(&mut self, auction_id: u64) -> BanksResult {
        let unseal_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::Unseal {
                payer: self.ctx.payer.pubkey(),
                custodian: accounts::AuctionCustodian {
                    custodian: custodian_address(),
                },
                auction: auction_address(auction_id),
            }
            .to_account_metas(None),
            data: instruction::Unseal { auction_id }.data(),
        };

        process(&mut self.ctx, &[unseal_ix], &[]).await
    }

    pub async fn set_hash(&mut self, auction_id: u64, seed: [u8; 32]) -> BanksResult {
        let owner = self.owner.insecure_clone();
        self.set_hash_as(&owner, auction_id, seed).await
    }

    pub async fn set_hash_as(
        &mut self,
        signer: &Keypair,
        auction_id: u64,
        seed: [u8; 32],
    ) -> BanksResult {
        let set_hash_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::SetHash {
                owner: signer.pubkey(),
                custodian: accounts::AuctionCustodian {
                    custodian: custodian_address(),
                },
                auction: auction_address(auction_id),
            }
            .to_account_metas(None),
            data: instruction::SetHash { auction_id, seed }.data(),
        };

        process(&mut self.ctx, &[set_hash_ix], &[signer]).await
    }

    pub async fn claim(&mut self, auction_id: u64, player: &Player) -> BanksResult {
        let auction = auction_address(auction_id);

        let claim_ix = Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::Claim {
                winner: player.pubkey(),
                custodian: accounts::AuctionCustodian {
                    custodian: custodian_address(),
                },
                auction,
                auction_custody_token: custody_token_address(&auction),
                proceeds_token: self.proceeds_token,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: instruction::Claim { auction_id }.data(),
        };

        process(&mut self.ctx, &[claim_ix], &[&player.keypair]).await
    }

    fn get_auction_info_ix(auction_id: u64) -> Instruction {
        Instruction {
            program_id: sealed_auction::ID,
            accounts: accounts::GetAuctionInfo {
                custodian: accounts::AuctionCustodian {
                    custodian: custodian_address(),
                },
                auction: auction_address(auction_id),
            }
            .to_account_metas(None),
            data: instruction::GetAuctionInfo { auction_id }.data(),
        }
    }

    /// Reads the auction through the program's return data.
    pub async fn get_auction_info(&mut self, auction_id: u64) -> Auction {
        let blockhash = self.ctx.get_new_latest_blockhash().await.unwrap();
        let tx = Transaction::new_signed_with_payer(
            &[Self::get_auction_info_ix(auction_id)],
            Some(&self.ctx.payer.pubkey()),
            &[&self.ctx.payer],
            blockhash,
        );

        let simulation = self
            .ctx
            .banks_client
            .simulate_transaction(tx)
            .await
            .unwrap();
        simulation.result.unwrap().unwrap();

        let return_data = simulation
            .simulation_details
            .unwrap()
            .return_data
            .unwrap();
        assert_eq!(return_data.program_id, sealed_auction::ID);

        Auction::deserialize(&mut return_data.data.as_slice()).unwrap()
    }

    pub async fn try_get_auction_info(&mut self, auction_id: u64) -> BanksResult {
        process(&mut self.ctx, &[Self::get_auction_info_ix(auction_id)], &[]).await
    }
}

pub async fn airdrop(ctx: &mut ProgramTestContext, recipient: &Pubkey) {
    let transfer_ix = system_instruction::transfer(&ctx.payer.pubkey(), recipient, LAMPORTS_PER_SOL);
    process(ctx, &[transfer_ix], &[]).await.unwrap();
}

/// Creates a mint whose authority is the context payer.
pub async fn create_mint(ctx: &mut ProgramTestContext) -> Pubkey {
    let mint = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let space = spl_token::state::Mint::LEN;

    let ixs = [
        system_instruction::create_account(
            &ctx.payer.pubkey(),
            &mint.pubkey(),
            rent.minimum_balance(space),
            u64::try_from(space).unwrap(),
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_mint2(
            &spl_token::ID,
            &mint.pubkey(),
            &ctx.payer.pubkey(),
            None,
            DECIMALS,
        )
        .unwrap(),
    ];
    process(ctx, &ixs, &[&mint]).await.unwrap();

    mint.pubkey()
}

/// Creates the associated token account of `owner` for `mint`.
pub async fn create_token_account(
    ctx: &mut ProgramTestContext,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Pubkey {
    let create_ata_ix = spl_associated_token_account::instruction::create_associated_token_account(
        &ctx.payer.pubkey(),
        owner,
        mint,
        &spl_token::ID,
    );
    process(ctx, &[create_ata_ix], &[]).await.unwrap();

    spl_associated_token_account::get_associated_token_address(owner, mint)
}
