use anchor_lang::prelude::*;

use crate::{collaborators::StakingGate, errors::HumanUsdError};

/// HMT locked by the controller to unlock escrow creation.
/// Seeds: [b"stake", human_usd]
#[account]
#[derive(InitSpace)]
pub struct StakePosition {
    pub staker: Pubkey,
    pub staked_amount: u64,
    pub minimum_stake: u64,
    pub bump: u8,
}

impl StakePosition {
    pub const PREFIX_SEED: &'static [u8] = b"stake";

    pub fn init(&mut self, staker: Pubkey, minimum_stake: u64, bump: u8) -> Result<()> {
        require!(minimum_stake > 0, HumanUsdError::InvalidAmount);

        self.staker = staker;
        self.staked_amount = 0;
        self.minimum_stake = minimum_stake;
        self.bump = bump;
        Ok(())
    }
}

impl StakingGate for StakePosition {
    fn has_available_stake(&self, staker: &Pubkey) -> bool {
        *staker == self.staker && self.staked_amount >= self.minimum_stake
    }

    fn stake(&mut self, staker: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*staker, self.staker, HumanUsdError::StakerMismatch);
        self.staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(HumanUsdError::MathOverflow)?;
        Ok(())
    }
}
