mod common;

use anchor_lang::{error::Error, prelude::*};
use sablier_merkle_instant::sablier_merkle_instant as merkle_instant;
use sablier_merkle_instant::{
    instructions::CreateCampaign, state::campaign::Campaign, utils::errors::ErrorCode,
};

use common::*;

#[test]
fn create_campaign() {
    let mut test = MerkleInstantTest::new();
    let creator_balance_before = test.token_balance(&test.campaign_creator, &test.usdc.mint);

    let campaign = test.create_campaign(test.usdc, EXPIRATION_TIME, CAMPAIGN_NAME).unwrap();

    let campaign_data = merkle_instant::campaign_view(&test.bank, test.campaign_view(campaign)).unwrap();
    assert_eq!(
        campaign_data,
        Campaign {
            airdrop_token_mint: test.usdc.mint,
            bump: campaign_data.bump,
            creator: test.campaign_creator,
            expiration_time: EXPIRATION_TIME,
            first_claim_time: 0,
            ipfs_cid: IPFS_CID.to_string(),
            merkle_root: test.tree.root(),
            name: CAMPAIGN_NAME.to_string(),
        }
    );

    // The campaign ATA is created empty; no tokens are moved.
    let campaign_ata = sablier_common::get_ata_address(&campaign, &test.usdc.mint, &test.usdc.program);
    assert!(test.bank.account_exists(&campaign_ata), "campaign ATA should exist");
    assert_eq!(test.campaign_balance(&campaign), 0);
    assert_eq!(test.token_balance(&test.campaign_creator, &test.usdc.mint), creator_balance_before);

    assert!(!merkle_instant::has_expired(&test.bank, test.campaign_view(campaign)).unwrap());
    assert!(!merkle_instant::has_grace_period_passed(&test.bank, test.campaign_view(campaign)).unwrap());
    assert!(!merkle_instant::has_claimed(&test.bank, test.campaign_view(campaign), 0).unwrap());
}

#[test]
fn create_campaign_with_token_2022() {
    let mut test = MerkleInstantTest::new();

    let campaign = test.create_campaign(test.dai, 0, CAMPAIGN_NAME).unwrap();
    test.fund_campaign(&campaign, test.dai, AGGREGATE_AMOUNT);

    assert_eq!(test.campaign_balance(&campaign), AGGREGATE_AMOUNT);
}

#[test]
fn create_same_campaign_twice_fails() {
    let mut test = MerkleInstantTest::new();
    test.create_campaign(test.usdc, EXPIRATION_TIME, CAMPAIGN_NAME).unwrap();

    let result = test.create_campaign(test.usdc, EXPIRATION_TIME, CAMPAIGN_NAME);

    assert_eq!(result.unwrap_err(), Error::from(ProgramError::AccountAlreadyInitialized));
}

#[test]
fn campaigns_differing_in_one_parameter_are_distinct() {
    let mut test = MerkleInstantTest::new();

    let first = test.create_campaign(test.usdc, EXPIRATION_TIME, CAMPAIGN_NAME).unwrap();
    let other_name = test.create_campaign(test.usdc, EXPIRATION_TIME, "Another campaign").unwrap();
    let other_expiration = test.create_campaign(test.usdc, EXPIRATION_TIME + 1, CAMPAIGN_NAME).unwrap();
    let other_mint = test.create_campaign(test.dai, EXPIRATION_TIME, CAMPAIGN_NAME).unwrap();

    assert_ne!(first, other_name);
    assert_ne!(first, other_expiration);
    assert_ne!(first, other_mint);
}

#[test]
fn create_campaign_with_long_name_or_cid_fails() {
    let mut test = MerkleInstantTest::new();
    let accounts = CreateCampaign {
        creator: test.campaign_creator,
        airdrop_token_mint: test.usdc.mint,
        airdrop_token_program: test.usdc.program,
    };
    let root = test.tree.root();

    let result = merkle_instant::create_campaign(
        &mut test.bank,
        accounts.clone(),
        root,
        EXPIRATION_TIME,
        "a".repeat(33),
        IPFS_CID.to_string(),
        AGGREGATE_AMOUNT,
        4,
    );
    assert_eq!(result.unwrap_err(), Error::from(ErrorCode::CampaignNameTooLong));

    let result = merkle_instant::create_campaign(
        &mut test.bank,
        accounts,
        root,
        EXPIRATION_TIME,
        CAMPAIGN_NAME.to_string(),
        format!("{IPFS_CID}a"),
        AGGREGATE_AMOUNT,
        4,
    );
    assert_eq!(result.unwrap_err(), Error::from(ErrorCode::CampaignIpfsCidTooLong));
}
