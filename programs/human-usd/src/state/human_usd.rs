use anchor_lang::prelude::*;

use crate::{
    collaborators::{EscrowFactory, EscrowLaunch, StakingGate, ValueToken},
    errors::HumanUsdError,
};

use super::{CampaignManager, ManifestRef};

/// Why a due launch did not happen. The mint itself still goes through.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchDeferral {
    NoCampaignData,
    NoActiveTier,
    InsufficientTreasury,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignLaunch {
    pub campaign_id: u64,
    pub tier_id: u64,
    pub token: Pubkey,
    pub fund_amount: u64,
    pub escrow: Pubkey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Threshold not reached or no campaign manager bound.
    NotDue,
    Deferred(LaunchDeferral),
    Launched(CampaignLaunch),
}

/// Everything a launch attempt reads or drives besides the controller itself.
pub struct LaunchContext<'a, S, E> {
    /// Address of the controller; the staker checked against the gate.
    pub controller: Pubkey,
    pub manager: Option<&'a mut CampaignManager>,
    /// Overrides the configured manifest for the escrow opened by this call.
    pub manifest: Option<ManifestRef>,
    pub staking: &'a S,
    pub escrows: &'a mut E,
}

/// Issuance controller for the HUSD value token.
/// Seeds: [b"human_usd", husd_mint]
#[account]
#[derive(InitSpace)]
pub struct HumanUsd {
    pub owner: Pubkey,
    pub husd_mint: Pubkey,
    /// Stablecoin pulled in 1:1 on every mint
    pub collateral_mint: Pubkey,
    /// Token staked to unlock escrow creation
    pub hmt_mint: Pubkey,
    pub campaign_manager: Option<Pubkey>,
    pub tokens_required_for_campaign: u64,
    pub minted_since_last_launch: u64,
    pub last_campaign_id: u64,
    pub bump: u8,
}

impl HumanUsd {
    pub const PREFIX_SEED: &'static [u8] = b"human_usd";

    pub fn init(
        &mut self,
        owner: Pubkey,
        husd_mint: Pubkey,
        collateral_mint: Pubkey,
        hmt_mint: Pubkey,
        tokens_required_for_campaign: u64,
        bump: u8,
    ) -> Result<()> {
        require!(tokens_required_for_campaign > 0, HumanUsdError::InvalidThreshold);

        self.owner = owner;
        self.husd_mint = husd_mint;
        self.collateral_mint = collateral_mint;
        self.hmt_mint = hmt_mint;
        self.campaign_manager = None;
        self.tokens_required_for_campaign = tokens_required_for_campaign;
        self.minted_since_last_launch = 0;
        self.last_campaign_id = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, HumanUsdError::Unauthorized);
        Ok(())
    }

    pub fn set_campaign_manager(
        &mut self,
        caller: &Pubkey,
        campaign_manager: Pubkey,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.campaign_manager = Some(campaign_manager);
        Ok(())
    }

    pub fn launch_due(&self) -> bool {
        self.campaign_manager.is_some()
            && self.minted_since_last_launch >= self.tokens_required_for_campaign
    }

    pub fn stake_hmt<S: StakingGate>(
        &self,
        caller: &Pubkey,
        controller: &Pubkey,
        amount: u64,
        staking: &mut S,
    ) -> Result<()> {
        self.authorize(caller)?;
        require!(amount > 0, HumanUsdError::InvalidAmount);
        staking.stake(controller, amount)
    }

    /// Mints `amount` to `to` and launches at most one campaign if the threshold is crossed.
    ///
    /// The launch is resolved before anything is minted, so a failed launch
    /// (no stake, missing launch accounts, escrow creation error) fails the
    /// whole call without effect. A missing tier or an underfunded treasury
    /// only defers the launch.
    pub fn mint<V, S, E>(
        &mut self,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u64,
        value_token: &mut V,
        launch: LaunchContext<'_, S, E>,
    ) -> Result<LaunchOutcome>
    where
        V: ValueToken,
        S: StakingGate,
        E: EscrowFactory,
    {
        self.authorize(caller)?;
        require!(amount > 0, HumanUsdError::InvalidAmount);
        if let Some(manifest) = &launch.manifest {
            manifest.validate()?;
        }

        let previous = self.minted_since_last_launch;
        self.minted_since_last_launch = previous
            .checked_add(amount)
            .ok_or(HumanUsdError::MathOverflow)?;

        let outcome = match self.try_launch(launch) {
            Ok(outcome) => outcome,
            Err(error) => {
                self.minted_since_last_launch = previous;
                return Err(error);
            }
        };

        value_token.mint_to(to, amount)?;
        Ok(outcome)
    }

    /// Retries a deferred launch without minting.
    pub fn launch_pending_campaign<S, E>(
        &mut self,
        caller: &Pubkey,
        launch: LaunchContext<'_, S, E>,
    ) -> Result<LaunchOutcome>
    where
        S: StakingGate,
        E: EscrowFactory,
    {
        self.authorize(caller)?;
        require!(
            self.campaign_manager.is_some(),
            HumanUsdError::CampaignManagerNotSet
        );
        require!(self.launch_due(), HumanUsdError::NoLaunchPending);
        if let Some(manifest) = &launch.manifest {
            manifest.validate()?;
        }
        self.try_launch(launch)
    }

    fn try_launch<S, E>(&mut self, launch: LaunchContext<'_, S, E>) -> Result<LaunchOutcome>
    where
        S: StakingGate,
        E: EscrowFactory,
    {
        if !self.launch_due() {
            return Ok(LaunchOutcome::NotDue);
        }

        let LaunchContext {
            controller,
            manager,
            manifest,
            staking,
            escrows,
        } = launch;

        require!(
            staking.has_available_stake(&controller),
            HumanUsdError::InsufficientStake
        );
        let manager = manager.ok_or_else(|| error!(HumanUsdError::LaunchAccountsMissing))?;

        let tier = match manager.locate_next_tier() {
            Ok(index) => manager.selected(index),
            Err(reason) => return Ok(self.defer(reason)),
        };
        let available = escrows.funding_balance(&tier.token)?;
        let campaign_id = self
            .last_campaign_id
            .checked_add(1)
            .ok_or(HumanUsdError::MathOverflow)?;
        let remainder = self
            .minted_since_last_launch
            .checked_sub(self.tokens_required_for_campaign)
            .ok_or(HumanUsdError::MathOverflow)?;

        let cursor = manager.next_tier_index;
        manager.advance_past(tier.id);
        if available < tier.fund_amount {
            return Ok(self.defer(LaunchDeferral::InsufficientTreasury));
        }

        let campaign_data = match &manifest {
            Some(manifest) => manager.campaign_data.with_manifest(manifest),
            None => manager.campaign_data.clone(),
        };
        let request = EscrowLaunch {
            campaign_id,
            token: tier.token,
            fund_amount: tier.fund_amount,
            campaign_data,
        };

        // Accounting is committed before the factory runs.
        let (minted, last_campaign_id) = (self.minted_since_last_launch, self.last_campaign_id);
        self.minted_since_last_launch = remainder;
        self.last_campaign_id = campaign_id;

        match escrows.create(&request) {
            Ok(escrow) => {
                msg!(
                    "Campaign {} launched with {} of {} in escrow {}",
                    campaign_id,
                    tier.fund_amount,
                    tier.token,
                    escrow
                );
                Ok(LaunchOutcome::Launched(CampaignLaunch {
                    campaign_id,
                    tier_id: tier.id,
                    token: tier.token,
                    fund_amount: tier.fund_amount,
                    escrow,
                }))
            }
            Err(error) => {
                self.minted_since_last_launch = minted;
                self.last_campaign_id = last_campaign_id;
                manager.next_tier_index = cursor;
                Err(error)
            }
        }
    }

    fn defer(&self, reason: LaunchDeferral) -> LaunchOutcome {
        msg!(
            "Campaign launch deferred: {:?} ({} minted since last launch)",
            reason,
            self.minted_since_last_launch
        );
        LaunchOutcome::Deferred(reason)
    }
}
