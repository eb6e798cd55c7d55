use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_CAMPAIGN_TIERS, MAX_MANIFEST_HASH_LEN, MAX_MANIFEST_URL_LEN},
    errors::HumanUsdError,
};

use super::LaunchDeferral;

/// A registered (token, amount) pair eligible to fund a campaign.
///
/// Removed tiers keep their slot with a zeroed token and amount so ids stay stable.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignTier {
    pub token: Pubkey,
    pub fund_amount: u64,
    pub active: bool,
}

/// Tier picked for the next launch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedTier {
    pub id: u64,
    pub token: Pubkey,
    pub fund_amount: u64,
}

/// Where the campaign manifest lives and the hash of its content.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestRef {
    pub url: String,
    pub hash: String,
}

impl ManifestRef {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.url.len() <= MAX_MANIFEST_URL_LEN && self.hash.len() <= MAX_MANIFEST_HASH_LEN,
            HumanUsdError::ManifestTooLong
        );
        Ok(())
    }
}

/// Oracle principals, fees and manifest every launched escrow is set up with.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignData {
    pub recording_oracle: Pubkey,
    pub reputation_oracle: Pubkey,
    pub exchange_oracle: Pubkey,
    pub recording_oracle_fee_percentage: u8,
    pub reputation_oracle_fee_percentage: u8,
    pub exchange_oracle_fee_percentage: u8,
    #[max_len(200)]
    pub manifest_url: String,
    #[max_len(66)]
    pub manifest_hash: String,
    pub configured: bool,
}

impl CampaignData {
    pub fn manifest(&self) -> ManifestRef {
        ManifestRef {
            url: self.manifest_url.clone(),
            hash: self.manifest_hash.clone(),
        }
    }

    /// Same oracle setup pointing at a different manifest.
    pub fn with_manifest(&self, manifest: &ManifestRef) -> Self {
        Self {
            manifest_url: manifest.url.clone(),
            manifest_hash: manifest.hash.clone(),
            ..self.clone()
        }
    }
}

// set_campaign_data parameters
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CampaignDataInput {
    pub recording_oracle: Pubkey,
    pub reputation_oracle: Pubkey,
    pub exchange_oracle: Pubkey,
    pub recording_oracle_fee_percentage: u8,
    pub reputation_oracle_fee_percentage: u8,
    pub exchange_oracle_fee_percentage: u8,
    pub manifest: ManifestRef,
}

/// Campaign configuration plus the round-robin tier registry.
#[account]
#[derive(InitSpace)]
pub struct CampaignManager {
    pub owner: Pubkey,
    pub campaign_data: CampaignData,
    /// Index the next tier scan starts from.
    pub next_tier_index: u64,
    #[max_len(64)]
    pub campaign_tiers: Vec<CampaignTier>,
}

impl CampaignManager {
    pub fn init(&mut self, owner: Pubkey) {
        self.owner = owner;
        self.campaign_data = CampaignData::default();
        self.next_tier_index = 0;
        self.campaign_tiers = Vec::new();
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, HumanUsdError::Unauthorized);
        Ok(())
    }

    pub fn set_campaign_data(&mut self, caller: &Pubkey, input: CampaignDataInput) -> Result<()> {
        self.authorize(caller)?;
        require!(!self.campaign_data.configured, HumanUsdError::AlreadyConfigured);
        input.manifest.validate()?;

        self.campaign_data = CampaignData {
            recording_oracle: input.recording_oracle,
            reputation_oracle: input.reputation_oracle,
            exchange_oracle: input.exchange_oracle,
            recording_oracle_fee_percentage: input.recording_oracle_fee_percentage,
            reputation_oracle_fee_percentage: input.reputation_oracle_fee_percentage,
            exchange_oracle_fee_percentage: input.exchange_oracle_fee_percentage,
            manifest_url: input.manifest.url,
            manifest_hash: input.manifest.hash,
            configured: true,
        };
        Ok(())
    }

    pub fn campaign_data(&self) -> &CampaignData {
        &self.campaign_data
    }

    /// Appends an active tier and returns its id.
    pub fn add_campaign_tier(
        &mut self,
        caller: &Pubkey,
        token: Pubkey,
        fund_amount: u64,
    ) -> Result<u64> {
        self.authorize(caller)?;
        require!(fund_amount > 0, HumanUsdError::InvalidAmount);
        require!(
            self.campaign_tiers.len() < MAX_CAMPAIGN_TIERS,
            HumanUsdError::TierRegistryFull
        );

        let id = self.tier_count();
        self.campaign_tiers.push(CampaignTier {
            token,
            fund_amount,
            active: true,
        });
        Ok(id)
    }

    /// Tombstones the tier in place.
    pub fn remove_campaign_tier(&mut self, caller: &Pubkey, id: u64) -> Result<()> {
        self.authorize(caller)?;

        let tier = usize::try_from(id)
            .ok()
            .and_then(|index| self.campaign_tiers.get_mut(index))
            .filter(|tier| tier.active)
            .ok_or_else(|| error!(HumanUsdError::TierNotFound))?;
        *tier = CampaignTier::default();
        Ok(())
    }

    pub fn tier_count(&self) -> u64 {
        self.campaign_tiers.len() as u64
    }

    /// Reads a tier by id. Removed tiers read back as the zero sentinel.
    pub fn tier_at(&self, id: u64) -> Result<&CampaignTier> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.campaign_tiers.get(index))
            .ok_or_else(|| error!(HumanUsdError::TierNotFound))
    }

    /// Tier the next launch would use, without moving the cursor.
    pub fn peek_tier_to_launch(&self) -> Result<SelectedTier> {
        match self.locate_next_tier() {
            Ok(index) => Ok(self.selected(index)),
            Err(LaunchDeferral::NoCampaignData) => err!(HumanUsdError::NoCampaignData),
            Err(_) => err!(HumanUsdError::NoActiveTier),
        }
    }

    /// Returns the next active tier and moves the cursor past it.
    pub fn next_tier_to_launch(&mut self) -> Result<SelectedTier> {
        let tier = self.peek_tier_to_launch()?;
        self.advance_past(tier.id);
        Ok(tier)
    }

    pub(crate) fn locate_next_tier(&self) -> std::result::Result<usize, LaunchDeferral> {
        if !self.campaign_data.configured {
            return Err(LaunchDeferral::NoCampaignData);
        }

        let len = self.campaign_tiers.len();
        if len == 0 {
            return Err(LaunchDeferral::NoActiveTier);
        }

        let start = (self.next_tier_index as usize) % len;
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| self.campaign_tiers[index].active)
            .ok_or(LaunchDeferral::NoActiveTier)
    }

    pub(crate) fn selected(&self, index: usize) -> SelectedTier {
        let tier = &self.campaign_tiers[index];
        SelectedTier {
            id: index as u64,
            token: tier.token,
            fund_amount: tier.fund_amount,
        }
    }

    pub(crate) fn advance_past(&mut self, id: u64) {
        self.next_tier_index = (id + 1) % self.tier_count();
    }
}
