use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{
    state::{nft_collection_data::NftCollectionData, treasury::Treasury},
    utils::{
        constants::ANCHOR_DISCRIMINATOR_SIZE,
        nft,
        pda::{find_nft_collection_data_address, find_treasury_address},
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct Initialize {
    // -------------------------------------------------------------------------- //
    //                               USER ACCOUNTS                                //
    // -------------------------------------------------------------------------- //
    /// Write account: the initializer of the program, who pays for the created accounts.
    pub initializer: Pubkey,

    // -------------------------------------------------------------------------- //
    //                              PROGRAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the Token program of the collection NFT.
    pub nft_token_program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_lockup::initialize`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Initialize, fee_collector: Pubkey) -> Result<()> {
    let initializer = &accounts.initializer;
    ctx.require_signer(initializer)?;

    // Effect: create the treasury. A second initialization fails here, as the treasury already exists.
    let (treasury, treasury_bump) = find_treasury_address();
    let mut treasury_data = Treasury::default();
    treasury_data.initialize(treasury_bump, fee_collector)?;
    ctx.init(initializer, &treasury, ANCHOR_DISCRIMINATOR_SIZE + Treasury::INIT_SPACE, &treasury_data)?;

    // Effect: create the NFT collection data.
    let (nft_collection_data, nft_collection_data_bump) = find_nft_collection_data_address();
    let mut collection_data = NftCollectionData::default();
    collection_data.initialize(nft_collection_data_bump)?;
    ctx.init(
        initializer,
        &nft_collection_data,
        ANCHOR_DISCRIMINATOR_SIZE + NftCollectionData::INIT_SPACE,
        &collection_data,
    )?;

    // Interaction: create the NFT collection and mint the collection NFT to the treasury.
    nft::initialize_collection(ctx, initializer, &treasury, &accounts.nft_token_program)?;

    msg!("The Lockup program has been initialized with the fee collector {}", fee_collector);

    Ok(())
}
