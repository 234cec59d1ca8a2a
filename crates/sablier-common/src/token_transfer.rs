//! Token operations of the SPL Token and Token-2022 programs, as invoked by the Sablier programs.

use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*, system_program};
use anchor_spl::{associated_token::get_associated_token_address_with_program_id, token, token_2022};

use crate::bank::{AccountData, Bank, InvokeContext};

/// Data length of an SPL mint account.
pub const MINT_LEN: usize = 82;

/// Data length of an SPL token account.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintState {
    pub mint_authority: Pubkey,
    pub supply: u64,
    pub decimals: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAccountState {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Returns true for the two supported token standards: SPL Token and Token-2022.
pub fn is_token_program(token_program: &Pubkey) -> bool {
    *token_program == token::ID || *token_program == token_2022::ID
}

/// Derives the associated token account of `owner` for the given mint and token program.
pub fn get_ata_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}

// -------------------------------------------------------------------------- //
//                                    READS                                   //
// -------------------------------------------------------------------------- //

/// Loads a mint, checking that it's owned by `token_program`.
pub fn load_mint(ctx: &InvokeContext, mint: &Pubkey, token_program: &Pubkey) -> Result<MintState> {
    check_token_program(token_program)?;

    let account = ctx.account(mint).ok_or(AnchorErrorCode::AccountNotInitialized)?;
    if account.owner != *token_program {
        return Err(AnchorErrorCode::InvalidProgramId.into());
    }

    match &account.data {
        AccountData::Mint(state) => Ok(state.clone()),
        AccountData::Empty => Err(AnchorErrorCode::AccountNotInitialized.into()),
        _ => Err(AnchorErrorCode::AccountDidNotDeserialize.into()),
    }
}

/// Loads a token account, checking that it's owned by `token_program`.
pub fn load_token_account(ctx: &InvokeContext, address: &Pubkey, token_program: &Pubkey) -> Result<TokenAccountState> {
    check_token_program(token_program)?;

    let account = ctx.account(address).ok_or(AnchorErrorCode::AccountNotInitialized)?;
    if account.owner != *token_program {
        return Err(AnchorErrorCode::InvalidProgramId.into());
    }

    match &account.data {
        AccountData::Token(state) => Ok(state.clone()),
        AccountData::Empty => Err(AnchorErrorCode::AccountNotInitialized.into()),
        _ => Err(AnchorErrorCode::AccountDidNotDeserialize.into()),
    }
}

/// Returns the token balance held by a token account, or zero if the account doesn't exist.
pub fn token_balance(ctx: &InvokeContext, address: &Pubkey) -> u64 {
    match ctx.account(address).map(|account| &account.data) {
        Some(AccountData::Token(state)) => state.amount,
        _ => 0,
    }
}

// -------------------------------------------------------------------------- //
//                              ACCOUNT CREATION                              //
// -------------------------------------------------------------------------- //

/// Creates and initializes a mint at `mint`.
pub fn create_mint(
    ctx: &mut InvokeContext,
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    decimals: u8,
    token_program: &Pubkey,
) -> Result<()> {
    check_token_program(token_program)?;

    let state = MintState {
        mint_authority: *mint_authority,
        supply: 0,
        decimals,
    };
    ctx.create_account(payer, mint, token_program, AccountData::Mint(state))
}

/// Creates the associated token account of `owner`. Fails if it already exists.
pub fn create_ata(
    ctx: &mut InvokeContext,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<Pubkey> {
    load_mint(ctx, mint, token_program)?;

    let ata = get_ata_address(owner, mint, token_program);
    let state = TokenAccountState {
        mint: *mint,
        owner: *owner,
        amount: 0,
    };
    ctx.create_account(payer, &ata, token_program, AccountData::Token(state))?;

    Ok(ata)
}

/// Creates the associated token account of `owner` if it doesn't exist yet, otherwise validates the existing one.
pub fn create_ata_if_needed(
    ctx: &mut InvokeContext,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<Pubkey> {
    let ata = get_ata_address(owner, mint, token_program);

    if !ctx.account(&ata).is_some_and(|account| account.owner != system_program::ID) {
        return create_ata(ctx, payer, owner, mint, token_program);
    }

    let state = load_token_account(ctx, &ata, token_program)?;
    if state.mint != *mint {
        return Err(AnchorErrorCode::ConstraintTokenMint.into());
    }
    if state.owner != *owner {
        return Err(AnchorErrorCode::ConstraintTokenOwner.into());
    }

    Ok(ata)
}

// -------------------------------------------------------------------------- //
//                              TOKEN MOVEMENTS                               //
// -------------------------------------------------------------------------- //

/// Helper function facilitating the `transfer_checked` token transfer.
///
/// The `authority` must either be a transaction signer or, when `signer_seeds` are provided, a PDA of the
/// executing program derived from them.
#[allow(clippy::too_many_arguments)]
pub fn transfer_tokens(
    ctx: &mut InvokeContext,
    from: &Pubkey,
    to: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    check_authority(ctx, authority, signer_seeds)?;

    let mint_state = load_mint(ctx, mint, token_program)?;
    if mint_state.decimals != decimals {
        return Err(ProgramError::InvalidArgument.into());
    }

    let source = load_token_account(ctx, from, token_program)?;
    let destination = load_token_account(ctx, to, token_program)?;

    if source.mint != *mint || destination.mint != *mint {
        return Err(AnchorErrorCode::ConstraintTokenMint.into());
    }
    if source.owner != *authority {
        return Err(AnchorErrorCode::ConstraintTokenOwner.into());
    }
    if source.amount < amount {
        return Err(ProgramError::InsufficientFunds.into());
    }
    if from == to {
        return Ok(());
    }

    debit_tokens(ctx, from, amount)?;
    credit_tokens(ctx, to, amount)
}

/// Mints `amount` tokens to the token account `to`. The `authority` must be the mint authority.
pub fn mint_to(
    ctx: &mut InvokeContext,
    mint: &Pubkey,
    to: &Pubkey,
    authority: &Pubkey,
    token_program: &Pubkey,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    check_authority(ctx, authority, signer_seeds)?;

    let mint_state = load_mint(ctx, mint, token_program)?;
    if mint_state.mint_authority != *authority {
        return Err(AnchorErrorCode::ConstraintMintMintAuthority.into());
    }

    let destination = load_token_account(ctx, to, token_program)?;
    if destination.mint != *mint {
        return Err(AnchorErrorCode::ConstraintTokenMint.into());
    }

    if let Some(AccountData::Mint(state)) = ctx.account_mut(mint).map(|account| &mut account.data) {
        state.supply = state.supply.checked_add(amount).ok_or(ProgramError::ArithmeticOverflow)?;
    }

    credit_tokens(ctx, to, amount)
}

fn check_token_program(token_program: &Pubkey) -> Result<()> {
    if !is_token_program(token_program) {
        return Err(AnchorErrorCode::InvalidProgramId.into());
    }

    Ok(())
}

fn check_authority(ctx: &InvokeContext, authority: &Pubkey, signer_seeds: &[&[&[u8]]]) -> Result<()> {
    let is_pda_signer = signer_seeds.iter().any(|seeds| {
        Pubkey::create_program_address(seeds, ctx.program_id()).is_ok_and(|address| address == *authority)
    });

    if !is_pda_signer && !ctx.is_signer(authority) {
        return Err(ProgramError::MissingRequiredSignature.into());
    }

    Ok(())
}

fn debit_tokens(ctx: &mut InvokeContext, address: &Pubkey, amount: u64) -> Result<()> {
    match ctx.account_mut(address).map(|account| &mut account.data) {
        Some(AccountData::Token(state)) => {
            state.amount = state.amount.checked_sub(amount).ok_or(ProgramError::InsufficientFunds)?;
            Ok(())
        }
        _ => Err(AnchorErrorCode::AccountNotInitialized.into()),
    }
}

fn credit_tokens(ctx: &mut InvokeContext, address: &Pubkey, amount: u64) -> Result<()> {
    match ctx.account_mut(address).map(|account| &mut account.data) {
        Some(AccountData::Token(state)) => {
            state.amount = state.amount.checked_add(amount).ok_or(ProgramError::ArithmeticOverflow)?;
            Ok(())
        }
        _ => Err(AnchorErrorCode::AccountNotInitialized.into()),
    }
}

// -------------------------------------------------------------------------- //
//                              WALLET OPERATIONS                             //
// -------------------------------------------------------------------------- //

/// Token operations signed by user wallets, outside of any Sablier program. They stand in for the transactions
/// that users send directly to the token programs: creating mints, minting supply and moving tokens around.
impl Bank {
    pub fn create_mint(
        &mut self,
        payer: &Pubkey,
        mint: &Pubkey,
        mint_authority: &Pubkey,
        decimals: u8,
        token_program: &Pubkey,
    ) -> Result<()> {
        self.process_transaction(&system_program::ID, &[*payer], |ctx| {
            create_mint(ctx, payer, mint, mint_authority, decimals, token_program)
        })
    }

    /// Mints tokens to the ATA of `owner`, creating the ATA if needed. Returns the ATA address.
    pub fn mint_tokens(
        &mut self,
        mint_authority: &Pubkey,
        mint: &Pubkey,
        owner: &Pubkey,
        amount: u64,
        token_program: &Pubkey,
    ) -> Result<Pubkey> {
        self.process_transaction(&system_program::ID, &[*mint_authority], |ctx| {
            let ata = create_ata_if_needed(ctx, mint_authority, owner, mint, token_program)?;
            mint_to(ctx, mint, &ata, mint_authority, token_program, amount, &[])?;
            Ok(ata)
        })
    }

    /// Transfers tokens from the ATA of `owner` to the ATA of `to_owner`, creating the latter if needed.
    pub fn transfer_tokens(
        &mut self,
        owner: &Pubkey,
        to_owner: &Pubkey,
        mint: &Pubkey,
        amount: u64,
        token_program: &Pubkey,
    ) -> Result<()> {
        self.process_transaction(&system_program::ID, &[*owner], |ctx| {
            let decimals = load_mint(ctx, mint, token_program)?.decimals;
            let from = get_ata_address(owner, mint, token_program);
            let to = create_ata_if_needed(ctx, owner, to_owner, mint, token_program)?;
            transfer_tokens(ctx, &from, &to, owner, mint, token_program, amount, decimals, &[])
        })
    }

    /// Returns the token balance of a token account, or zero if it doesn't exist.
    pub fn token_balance(&self, address: &Pubkey) -> u64 {
        match self.get_account(address).map(|account| &account.data) {
            Some(AccountData::Token(state)) => state.amount,
            _ => 0,
        }
    }

    pub fn get_mint(&self, mint: &Pubkey) -> Option<&MintState> {
        match self.get_account(mint).map(|account| &account.data) {
            Some(AccountData::Mint(state)) => Some(state),
            _ => None,
        }
    }

    pub fn get_token_account(&self, address: &Pubkey) -> Option<&TokenAccountState> {
        match self.get_account(address).map(|account| &account.data) {
            Some(AccountData::Token(state)) => Some(state),
            _ => None,
        }
    }
}

// -------------------------------------------------------------------------- //
//                                    TESTS                                   //
// -------------------------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use anchor_lang::error::Error;

    use super::*;

    const LAMPORTS: u64 = 5_000_000_000;

    fn setup(token_program: &Pubkey) -> (Bank, Pubkey, Pubkey) {
        let mut bank = Bank::new(0);
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        bank.airdrop(&authority, LAMPORTS);
        bank.create_mint(&authority, &mint, &authority, 6, token_program).unwrap();
        (bank, authority, mint)
    }

    #[test]
    fn mint_and_transfer() {
        for token_program in [token::ID, token_2022::ID] {
            let (mut bank, authority, mint) = setup(&token_program);
            let alice = Pubkey::new_unique();
            let bob = Pubkey::new_unique();
            bank.airdrop(&alice, LAMPORTS);

            let alice_ata = bank.mint_tokens(&authority, &mint, &alice, 1_000, &token_program).unwrap();
            bank.transfer_tokens(&alice, &bob, &mint, 400, &token_program).unwrap();

            assert_eq!(bank.token_balance(&alice_ata), 600);
            assert_eq!(bank.token_balance(&get_ata_address(&bob, &mint, &token_program)), 400);
            assert_eq!(bank.get_mint(&mint).unwrap().supply, 1_000);
        }
    }

    #[test]
    fn transfer_more_than_balance_fails() {
        let (mut bank, authority, mint) = setup(&token::ID);
        let alice = Pubkey::new_unique();
        bank.airdrop(&alice, LAMPORTS);
        let alice_ata = bank.mint_tokens(&authority, &mint, &alice, 10, &token::ID).unwrap();

        let result = bank.transfer_tokens(&alice, &Pubkey::new_unique(), &mint, 11, &token::ID);

        assert_eq!(result.unwrap_err(), Error::from(ProgramError::InsufficientFunds));
        assert_eq!(bank.token_balance(&alice_ata), 10);
    }

    #[test]
    fn duplicate_ata_creation_fails() {
        let (mut bank, authority, mint) = setup(&token::ID);
        let owner = Pubkey::new_unique();

        let result = bank.process_transaction(&system_program::ID, &[authority], |ctx| {
            create_ata(ctx, &authority, &owner, &mint, &token::ID)?;
            create_ata(ctx, &authority, &owner, &mint, &token::ID)
        });

        assert_eq!(result.unwrap_err(), Error::from(ProgramError::AccountAlreadyInitialized));
    }

    #[test]
    fn unsupported_token_program_is_rejected() {
        let mut bank = Bank::new(0);
        let payer = Pubkey::new_unique();
        bank.airdrop(&payer, LAMPORTS);

        let result = bank.create_mint(&payer, &Pubkey::new_unique(), &payer, 6, &Pubkey::new_unique());

        assert_eq!(result.unwrap_err(), Error::from(AnchorErrorCode::InvalidProgramId));
    }
}
