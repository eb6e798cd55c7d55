use std::collections::HashMap;
use std::fmt::Debug;

use anchor_lang::prelude::*;

use crate::{
    collaborators::{EscrowFactory, EscrowLaunch, StakingGate, ValueToken},
    errors::HumanUsdError,
    state::{CampaignDataInput, ManifestRef},
};

pub fn assert_error<T: Debug>(result: Result<T>, expected: HumanUsdError) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(error) => assert_eq!(error, anchor_lang::error::Error::from(expected)),
    }
}

pub fn campaign_data_input(fee: u8) -> CampaignDataInput {
    CampaignDataInput {
        recording_oracle: Pubkey::new_unique(),
        reputation_oracle: Pubkey::new_unique(),
        exchange_oracle: Pubkey::new_unique(),
        recording_oracle_fee_percentage: fee,
        reputation_oracle_fee_percentage: fee,
        exchange_oracle_fee_percentage: fee,
        manifest: ManifestRef {
            url: "https://example.com/manifest.json".to_string(),
            hash: "0b2d6c0c1f5cbb6d3ef4a8e4a4fbc0b8f0f2a1e7".to_string(),
        },
    }
}

pub struct MockStaking {
    pub staker: Pubkey,
    pub staked: u64,
    pub minimum: u64,
}

impl MockStaking {
    pub fn new(staker: Pubkey, minimum: u64) -> Self {
        Self {
            staker,
            staked: 0,
            minimum,
        }
    }
}

impl StakingGate for MockStaking {
    fn has_available_stake(&self, staker: &Pubkey) -> bool {
        *staker == self.staker && self.staked >= self.minimum
    }

    fn stake(&mut self, staker: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*staker, self.staker, HumanUsdError::StakerMismatch);
        self.staked = self
            .staked
            .checked_add(amount)
            .ok_or(HumanUsdError::MathOverflow)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockValueToken {
    balances: HashMap<Pubkey, u64>,
}

impl MockValueToken {
    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or_default()
    }
}

impl ValueToken for MockValueToken {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.balances.entry(*to).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or(HumanUsdError::MathOverflow)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockEscrowFactory {
    treasury: HashMap<Pubkey, u64>,
    pub launched: Vec<(Pubkey, EscrowLaunch)>,
    pub fail_create: bool,
}

impl MockEscrowFactory {
    pub fn fund(&mut self, token: Pubkey, amount: u64) {
        *self.treasury.entry(token).or_default() += amount;
    }

    pub fn balance(&self, token: &Pubkey) -> u64 {
        self.treasury.get(token).copied().unwrap_or_default()
    }
}

impl EscrowFactory for MockEscrowFactory {
    fn funding_balance(&self, token: &Pubkey) -> Result<u64> {
        Ok(self.balance(token))
    }

    fn create(&mut self, launch: &EscrowLaunch) -> Result<Pubkey> {
        require!(!self.fail_create, HumanUsdError::EscrowAddressMismatch);

        let balance = self.treasury.entry(launch.token).or_default();
        *balance = balance
            .checked_sub(launch.fund_amount)
            .ok_or(HumanUsdError::MathOverflow)?;

        let escrow = Pubkey::new_unique();
        self.launched.push((escrow, launch.clone()));
        Ok(escrow)
    }
}
