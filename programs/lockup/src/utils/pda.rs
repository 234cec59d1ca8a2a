//! PDA helpers for deriving the Lockup program addresses.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::utils::constants::seeds::*;

pub fn find_treasury_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY], &crate::ID)
}

pub fn find_nft_collection_data_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NFT_COLLECTION_DATA], &crate::ID)
}

pub fn find_nft_collection_mint_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NFT_COLLECTION_MINT], &crate::ID)
}

pub fn find_stream_nft_mint_address(sender: &Pubkey, salt: u128) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STREAM_NFT_MINT, sender.as_ref(), salt.to_le_bytes().as_ref()], &crate::ID)
}

pub fn find_stream_data_address(stream_nft_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STREAM_DATA, stream_nft_mint.as_ref()], &crate::ID)
}

/// The stream's escrow: the ATA of the stream data account for the deposited token.
pub fn get_stream_data_ata_address(
    stream_nft_mint: &Pubkey,
    deposited_token_mint: &Pubkey,
    deposited_token_program: &Pubkey,
) -> Pubkey {
    let (stream_data, _) = find_stream_data_address(stream_nft_mint);
    get_associated_token_address_with_program_id(&stream_data, deposited_token_mint, deposited_token_program)
}
