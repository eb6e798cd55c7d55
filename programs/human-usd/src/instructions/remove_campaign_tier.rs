use crate::{events::CampaignTierRemoved, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RemoveCampaignTier<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub campaign_manager: Account<'info, CampaignManager>,
}

pub fn handler(ctx: Context<RemoveCampaignTier>, id: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let campaign_manager = &mut ctx.accounts.campaign_manager;
    campaign_manager.remove_campaign_tier(&owner, id)?;

    emit!(CampaignTierRemoved {
        campaign_manager: campaign_manager.key(),
        id,
    });

    Ok(())
}
