use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PeekCampaignTierToLaunch<'info> {
    pub campaign_manager: Account<'info, CampaignManager>,
}

pub fn handler(ctx: Context<PeekCampaignTierToLaunch>) -> Result<SelectedTier> {
    ctx.accounts.campaign_manager.peek_tier_to_launch()
}
