use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // -------------------------------------------------------------------------- //
    //                                    CLAIM                                   //
    // -------------------------------------------------------------------------- //
    #[msg("The campaign has expired!")]
    CampaignExpired,
    #[msg("Invalid Merkle proof!")]
    InvalidMerkleProof,

    // -------------------------------------------------------------------------- //
    //                                  CLAWBACK                                  //
    // -------------------------------------------------------------------------- //
    #[msg("Clawback not allowed past the grace period and before expiration!")]
    ClawbackNotAllowed,

    // -------------------------------------------------------------------------- //
    //                                COLLECT FEES                                //
    // -------------------------------------------------------------------------- //
    #[msg("Can't collect zero fees!")]
    CantCollectZeroFees,

    // -------------------------------------------------------------------------- //
    //                               CREATE CAMPAIGN                              //
    // -------------------------------------------------------------------------- //
    #[msg("The campaign IPFS CID is too long!")]
    CampaignIpfsCidTooLong,
    #[msg("The campaign name is too long!")]
    CampaignNameTooLong,
}
