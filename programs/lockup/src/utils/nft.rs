use anchor_lang::prelude::*;
use sablier_common::{create_ata, create_mint, mint_to, InvokeContext};

use crate::utils::{
    constants::{nft::NFT_DECIMALS, seeds::NFT_COLLECTION_MINT},
    pda::find_nft_collection_mint_address,
};

/// Creates the NFT collection mint and mints the collection NFT to the treasury.
pub fn initialize_collection(
    ctx: &mut InvokeContext,
    initializer: &Pubkey,
    treasury: &Pubkey,
    nft_token_program: &Pubkey,
) -> Result<()> {
    let (nft_collection_mint, nft_collection_mint_bump) = find_nft_collection_mint_address();

    // The collection mint is its own mint authority.
    create_mint(ctx, initializer, &nft_collection_mint, &nft_collection_mint, NFT_DECIMALS, nft_token_program)?;

    let nft_collection_ata = create_ata(ctx, initializer, treasury, &nft_collection_mint, nft_token_program)?;

    mint_to(
        ctx,
        &nft_collection_mint,
        &nft_collection_ata,
        &nft_collection_mint,
        nft_token_program,
        1,
        &[&[NFT_COLLECTION_MINT, &[nft_collection_mint_bump]]],
    )
}

/// Creates and mints a stream NFT to the recipient. Fails if the stream NFT mint already exists.
pub fn create_stream(
    ctx: &mut InvokeContext,
    stream_nft_mint: &Pubkey,
    recipient: &Pubkey,
    creator: &Pubkey,
    nft_token_program: &Pubkey,
) -> Result<()> {
    let (nft_collection_mint, nft_collection_mint_bump) = find_nft_collection_mint_address();

    create_mint(ctx, creator, stream_nft_mint, &nft_collection_mint, NFT_DECIMALS, nft_token_program)?;

    let recipient_stream_nft_ata = create_ata(ctx, creator, recipient, stream_nft_mint, nft_token_program)?;

    mint_to(
        ctx,
        stream_nft_mint,
        &recipient_stream_nft_ata,
        &nft_collection_mint,
        nft_token_program,
        1,
        &[&[NFT_COLLECTION_MINT, &[nft_collection_mint_bump]]],
    )
}
