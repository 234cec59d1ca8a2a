use anchor_lang::{prelude::*, solana_program::keccak::hashv as keccak};

/// Computes the leaf of an airdrop allocation. The leaf is hashed twice to protect against second pre-image attacks.
pub fn compute_leaf(index: u32, recipient: &Pubkey, amount: u64) -> [u8; 32] {
    let index_bytes = index.to_le_bytes();
    let amount_bytes = amount.to_le_bytes();
    let leaf_bytes: &[&[u8]] = &[&index_bytes, recipient.as_ref(), &amount_bytes];

    let leaf = keccak(leaf_bytes).to_bytes();
    keccak(&[&leaf]).to_bytes()
}

/// Hashes two nodes of the tree, the lower one first.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak(&[a, b]).to_bytes()
    } else {
        keccak(&[b, a]).to_bytes()
    }
}

/// Folds the proof into the leaf and compares the result with the root.
// Dev: this algorithm has been inspired by OpenZeppelin
// https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v3.4.0/contracts/utils/cryptography/MerkleProof.sol
pub fn verify_proof(leaf: [u8; 32], merkle_proof: &[[u8; 32]], merkle_root: &[u8; 32]) -> bool {
    let computed_root =
        merkle_proof.iter().fold(leaf, |computed_hash, proof_element| hash_pair(&computed_hash, proof_element));

    computed_root == *merkle_root
}
