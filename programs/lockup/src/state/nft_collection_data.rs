use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default, InitSpace)]
pub struct NftCollectionData {
    pub total_supply: u64,
    pub bump: u8,
}

impl NftCollectionData {
    /// State update for the [`fn@crate::sablier_lockup::initialize`] instruction.
    pub fn initialize(&mut self, bump: u8) -> Result<()> {
        self.bump = bump;
        self.total_supply = 0;

        Ok(())
    }

    /// State update for the stream creation instructions.
    pub fn create(&mut self) -> Result<()> {
        self.total_supply = self.total_supply.checked_add(1).ok_or(ProgramError::ArithmeticOverflow)?;

        Ok(())
    }
}
