pub mod lockup;
pub mod nft_collection_data;
pub mod treasury;
