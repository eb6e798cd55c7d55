use crate::{events::CampaignDataSet, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetCampaignData<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub campaign_manager: Account<'info, CampaignManager>,
}

pub fn handler(ctx: Context<SetCampaignData>, input: CampaignDataInput) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let campaign_manager = &mut ctx.accounts.campaign_manager;
    campaign_manager.set_campaign_data(&owner, input)?;

    let data = campaign_manager.campaign_data();
    emit!(CampaignDataSet {
        campaign_manager: campaign_manager.key(),
        recording_oracle: data.recording_oracle,
        reputation_oracle: data.reputation_oracle,
        exchange_oracle: data.exchange_oracle,
        manifest_url: data.manifest_url.clone(),
        manifest_hash: data.manifest_hash.clone(),
    });

    Ok(())
}
