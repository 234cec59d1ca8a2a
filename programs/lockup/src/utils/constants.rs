// Account Seeds
pub mod seeds {
    pub const NFT_COLLECTION_DATA: &[u8] = b"nft_collection_data";
    pub const NFT_COLLECTION_MINT: &[u8] = b"nft_collection_mint";
    pub const STREAM_NFT_MINT: &[u8] = b"stream_nft_mint";
    pub const STREAM_DATA: &[u8] = b"stream_data";
    pub const TREASURY: &[u8] = b"treasury";
}

// NFT
pub mod nft {
    /// Decimals of the NFT collection mint and of every stream NFT mint.
    pub const NFT_DECIMALS: u8 = 0;
}

// Miscellaneous
pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;
pub const WITHDRAWAL_FEE_LAMPORTS: u64 = 10_000_000; // 0.01 SOL
