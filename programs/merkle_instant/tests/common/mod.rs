#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_spl::{token, token_2022};
use sablier_common::{get_ata_address, Bank};
use sablier_merkle_instant::sablier_merkle_instant as merkle_instant;
use sablier_merkle_instant::{
    instructions::{CampaignView, Claim, Clawback, CollectFees, CreateCampaign, Initialize},
    state::campaign::Campaign,
    utils::{
        merkle::{compute_leaf, hash_pair},
        pda::{find_campaign_address, find_treasury_address},
    },
};

// -------------------------------------------------------------------------- //
//                                  CONSTANTS                                 //
// -------------------------------------------------------------------------- //

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const NOW: i64 = 1_754_142_441;
pub const EXPIRATION_TIME: i64 = NOW + 10 * 24 * 60 * 60; // 10 days
pub const GRACE_PERIOD: i64 = 7 * 24 * 60 * 60;

pub const CAMPAIGN_NAME: &str = "HODL or Nothing";
pub const IPFS_CID: &str = "bafkreiecpwdhvkmw4y6iihfndk7jhwj";

/// The allocation of each recipient of the default campaign, by index.
pub const CLAIM_AMOUNTS: [u64; 4] = [100_000_000, 1_000_000, 50_000_000, 10_000_000];
pub const AGGREGATE_AMOUNT: u64 = 161_000_000;

pub const TOKEN_DECIMALS: u8 = 6;
pub const INITIAL_TOKEN_BALANCE: u64 = 1_000_000_000_000;

#[derive(Clone, Copy, Debug)]
pub struct TestToken {
    pub mint: Pubkey,
    pub program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 MERKLE TREE                                //
// -------------------------------------------------------------------------- //

/// A Merkle tree over airdrop leaves, hashing sibling nodes in sorted order. An odd node out is promoted to the next
/// level unchanged.
pub struct MerkleTree {
    layers: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    pub fn new(leaves: &[(u32, Pubkey, u64)]) -> Self {
        let leaves = leaves.iter().map(|(index, recipient, amount)| compute_leaf(*index, recipient, *amount)).collect();
        let mut layers: Vec<Vec<[u8; 32]>> = vec![leaves];

        while layers.last().is_some_and(|layer| layer.len() > 1) {
            let next = layers[layers.len() - 1]
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [single] => *single,
                    _ => unreachable!(),
                })
                .collect();
            layers.push(next);
        }

        Self {
            layers,
        }
    }

    pub fn root(&self) -> [u8; 32] {
        self.layers.last().and_then(|layer| layer.first()).copied().unwrap_or_default()
    }

    /// The proof for the leaf at `position` in the list the tree was built from.
    pub fn proof(&self, position: usize) -> Vec<[u8; 32]> {
        let mut proof = Vec::new();
        let mut position = position;
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = position ^ 1;
            if sibling < layer.len() {
                proof.push(layer[sibling]);
            }
            position /= 2;
        }
        proof
    }
}

// -------------------------------------------------------------------------- //
//                                  FIXTURE                                   //
// -------------------------------------------------------------------------- //

pub struct MerkleInstantTest {
    pub bank: Bank,
    pub admin: Pubkey,
    pub fee_collector: Pubkey,
    pub campaign_creator: Pubkey,
    pub eve: Pubkey,
    /// The recipients of the default campaign, by index.
    pub recipients: Vec<Pubkey>,
    pub tree: MerkleTree,
    /// SPL Token mint.
    pub usdc: TestToken,
    /// Token-2022 mint.
    pub dai: TestToken,
}

impl MerkleInstantTest {
    pub fn uninitialized() -> Self {
        let mut bank = Bank::new(NOW);

        let admin = Pubkey::new_unique();
        let fee_collector = Pubkey::new_unique();
        let campaign_creator = Pubkey::new_unique();
        let eve = Pubkey::new_unique();
        let recipients: Vec<Pubkey> = CLAIM_AMOUNTS.iter().map(|_| Pubkey::new_unique()).collect();
        for user in [admin, fee_collector, campaign_creator, eve].iter().chain(recipients.iter()) {
            bank.airdrop(user, 100 * LAMPORTS_PER_SOL);
        }

        let usdc = create_token(&mut bank, &admin, token::ID);
        let dai = create_token(&mut bank, &admin, token_2022::ID);
        for token in [usdc, dai] {
            bank.mint_tokens(&admin, &token.mint, &campaign_creator, INITIAL_TOKEN_BALANCE, &token.program).unwrap();
        }

        let tree = MerkleTree::new(&leaves(&recipients));

        Self {
            bank,
            admin,
            fee_collector,
            campaign_creator,
            eve,
            recipients,
            tree,
            usdc,
            dai,
        }
    }

    pub fn new() -> Self {
        let mut test = Self::uninitialized();
        test.initialize().unwrap();
        test
    }

    pub fn initialize(&mut self) -> Result<()> {
        let accounts = Initialize {
            initializer: self.admin,
        };
        merkle_instant::initialize(&mut self.bank, accounts, self.fee_collector)
    }

    /// Moves the clock to `NOW + offset`.
    pub fn warp(&mut self, offset: i64) {
        self.bank.warp_to_timestamp(NOW + offset);
    }

    // ---------------------------------------------------------------------- //
    //                                CAMPAIGNS                               //
    // ---------------------------------------------------------------------- //

    /// Creates and funds the default USDC campaign.
    pub fn create_default_campaign(&mut self) -> Pubkey {
        let campaign = self.create_campaign(self.usdc, EXPIRATION_TIME, CAMPAIGN_NAME).unwrap();
        self.fund_campaign(&campaign, self.usdc, AGGREGATE_AMOUNT);
        campaign
    }

    pub fn create_campaign(&mut self, token: TestToken, expiration_time: i64, name: &str) -> Result<Pubkey> {
        let accounts = CreateCampaign {
            creator: self.campaign_creator,
            airdrop_token_mint: token.mint,
            airdrop_token_program: token.program,
        };
        let merkle_root = self.tree.root();
        merkle_instant::create_campaign(
            &mut self.bank,
            accounts,
            merkle_root,
            expiration_time,
            name.to_string(),
            IPFS_CID.to_string(),
            AGGREGATE_AMOUNT,
            CLAIM_AMOUNTS.len() as u32,
        )?;

        let (campaign, _) =
            find_campaign_address(&self.campaign_creator, &merkle_root, expiration_time, IPFS_CID, name, &token.mint);
        Ok(campaign)
    }

    /// Funds a campaign by transferring tokens from the creator to the campaign ATA.
    pub fn fund_campaign(&mut self, campaign: &Pubkey, token: TestToken, amount: u64) {
        let creator = self.campaign_creator;
        self.bank.transfer_tokens(&creator, campaign, &token.mint, amount, &token.program).unwrap();
    }

    // ---------------------------------------------------------------------- //
    //                              INSTRUCTIONS                              //
    // ---------------------------------------------------------------------- //

    pub fn claim_accounts(&self, campaign: Pubkey, claimer: Pubkey, recipient: Pubkey) -> Claim {
        let campaign_data = self.campaign_data(&campaign);
        Claim {
            claimer,
            recipient,
            campaign,
            airdrop_token_mint: campaign_data.airdrop_token_mint,
            airdrop_token_program: self.token_program_of(&campaign_data.airdrop_token_mint),
        }
    }

    /// Claims the allocation at `index` of the default tree, signed by the recipient.
    pub fn claim(&mut self, campaign: Pubkey, index: usize) -> Result<()> {
        let recipient = self.recipients[index];
        let accounts = self.claim_accounts(campaign, recipient, recipient);
        let proof = self.tree.proof(index);
        merkle_instant::claim(&mut self.bank, accounts, index as u32, CLAIM_AMOUNTS[index], proof)
    }

    pub fn clawback_accounts(&self, campaign: Pubkey) -> Clawback {
        let campaign_data = self.campaign_data(&campaign);
        Clawback {
            campaign_creator: self.campaign_creator,
            campaign,
            airdrop_token_mint: campaign_data.airdrop_token_mint,
            airdrop_token_program: self.token_program_of(&campaign_data.airdrop_token_mint),
        }
    }

    pub fn clawback(&mut self, campaign: Pubkey, amount: u64) -> Result<()> {
        let accounts = self.clawback_accounts(campaign);
        merkle_instant::clawback(&mut self.bank, accounts, amount)
    }

    pub fn collect_fees_accounts(&self, fee_recipient: Pubkey) -> CollectFees {
        CollectFees {
            fee_collector: self.fee_collector,
            fee_recipient,
        }
    }

    pub fn campaign_view(&self, campaign: Pubkey) -> CampaignView {
        CampaignView {
            campaign,
        }
    }

    // ---------------------------------------------------------------------- //
    //                                GETTERS                                 //
    // ---------------------------------------------------------------------- //

    pub fn campaign_data(&self, campaign: &Pubkey) -> Campaign {
        self.bank.get_program_account::<Campaign>(campaign).expect("campaign not found")
    }

    /// Token balance of the campaign's escrow.
    pub fn campaign_balance(&self, campaign: &Pubkey) -> u64 {
        let mint = self.campaign_data(campaign).airdrop_token_mint;
        self.token_balance(campaign, &mint)
    }

    pub fn token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> u64 {
        let ata = get_ata_address(owner, mint, &self.token_program_of(mint));
        self.bank.token_balance(&ata)
    }

    pub fn treasury_lamports(&self) -> u64 {
        self.bank.lamports(&find_treasury_address().0)
    }

    pub fn token_program_of(&self, mint: &Pubkey) -> Pubkey {
        if *mint == self.dai.mint {
            token_2022::ID
        } else {
            token::ID
        }
    }
}

// -------------------------------------------------------------------------- //
//                                  HELPERS                                   //
// -------------------------------------------------------------------------- //

pub fn create_token(bank: &mut Bank, authority: &Pubkey, program: Pubkey) -> TestToken {
    let mint = Pubkey::new_unique();
    bank.create_mint(authority, &mint, authority, TOKEN_DECIMALS, &program).unwrap();
    TestToken {
        mint,
        program,
    }
}

/// The leaves of the default campaign.
pub fn leaves(recipients: &[Pubkey]) -> Vec<(u32, Pubkey, u64)> {
    recipients
        .iter()
        .zip(CLAIM_AMOUNTS)
        .enumerate()
        .map(|(index, (recipient, amount))| (index as u32, *recipient, amount))
        .collect()
}
