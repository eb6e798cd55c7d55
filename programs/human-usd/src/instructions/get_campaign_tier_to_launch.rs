use crate::{events::CampaignTierSelected, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetCampaignTierToLaunch<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub campaign_manager: Account<'info, CampaignManager>,
}

impl<'info> GetCampaignTierToLaunch<'info> {
    pub fn validate(&self) -> Result<()> {
        self.campaign_manager.authorize(&self.owner.key())
    }
}

// Advances the cursor; restricted so nobody can skip tiers ahead of a launch.
pub fn handler(ctx: Context<GetCampaignTierToLaunch>) -> Result<SelectedTier> {
    ctx.accounts.validate()?;

    let campaign_manager = &mut ctx.accounts.campaign_manager;
    let tier = campaign_manager.next_tier_to_launch()?;

    emit!(CampaignTierSelected {
        campaign_manager: campaign_manager.key(),
        id: tier.id,
        token: tier.token,
        fund_amount: tier.fund_amount,
    });

    Ok(tier)
}
