use anchor_lang::prelude::*;

pub mod adapters;
pub mod collaborators;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use instructions::*;
pub use state::*;

declare_id!("BLNP98LtSpvoNRxFFcHZuK3Vh8xCwNYjHCf1e4oKKPsV");

#[program]
pub mod human_usd {
    use super::*;

    /// Create a campaign manager owned by the signer. Campaign data is set separately, once.
    pub fn initialize_campaign_manager(ctx: Context<InitializeCampaignManager>) -> Result<()> {
        initialize_campaign_manager::handler(ctx)
    }

    /// Store the oracle setup and manifest every launched escrow uses. Owner only, one time.
    pub fn set_campaign_data(
        ctx: Context<SetCampaignData>,
        input: CampaignDataInput,
    ) -> Result<()> {
        set_campaign_data::handler(ctx, input)
    }

    /// Register a (token, amount) tier. Returns the new tier id.
    pub fn add_campaign_tier(
        ctx: Context<AddCampaignTier>,
        token: Pubkey,
        fund_amount: u64,
    ) -> Result<u64> {
        add_campaign_tier::handler(ctx, token, fund_amount)
    }

    pub fn remove_campaign_tier(ctx: Context<RemoveCampaignTier>, id: u64) -> Result<()> {
        remove_campaign_tier::handler(ctx, id)
    }

    /// Select the next active tier in round-robin order and advance the cursor.
    pub fn get_campaign_tier_to_launch(
        ctx: Context<GetCampaignTierToLaunch>,
    ) -> Result<SelectedTier> {
        get_campaign_tier_to_launch::handler(ctx)
    }

    /// The tier the next launch would use. Read-only.
    pub fn peek_campaign_tier_to_launch(
        ctx: Context<PeekCampaignTierToLaunch>,
    ) -> Result<SelectedTier> {
        peek_campaign_tier_to_launch::handler(ctx)
    }

    /// Create the HUSD mint, its controller, the collateral vault and the HMT stake position.
    pub fn initialize_human_usd(
        ctx: Context<InitializeHumanUsd>,
        tokens_required_for_campaign: u64,
        minimum_stake: u64,
    ) -> Result<()> {
        initialize_human_usd::handler(ctx, tokens_required_for_campaign, minimum_stake)
    }

    pub fn set_campaign_manager(ctx: Context<SetCampaignManager>) -> Result<()> {
        set_campaign_manager::handler(ctx)
    }

    /// Lock HMT in the controller's stake vault.
    pub fn stake_hmt(ctx: Context<StakeHmt>, amount: u64) -> Result<()> {
        stake_hmt::handler(ctx, amount)
    }

    /// Mint HUSD 1:1 against collateral.
    ///
    /// Crossing the campaign threshold opens and funds one escrow from the
    /// treasury, provided the launch accounts are passed and HMT is staked.
    pub fn mint(ctx: Context<MintHusd>, amount: u64) -> Result<()> {
        mint_husd::handler(ctx, amount, None)
    }

    /// Same as `mint`, but an escrow opened by this call uses the given manifest.
    pub fn mint_with_manifest(
        ctx: Context<MintHusd>,
        amount: u64,
        manifest: ManifestRef,
    ) -> Result<()> {
        mint_husd::handler(ctx, amount, Some(manifest))
    }

    /// Retry a launch that a previous mint deferred.
    pub fn launch_pending_campaign(
        ctx: Context<LaunchPendingCampaign>,
        manifest: Option<ManifestRef>,
    ) -> Result<()> {
        launch_pending_campaign::handler(ctx, manifest)
    }
}
