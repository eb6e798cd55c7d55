use crate::{events::CampaignManagerSet, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetCampaignManager<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [HumanUsd::PREFIX_SEED, human_usd.husd_mint.as_ref()],
        bump = human_usd.bump
    )]
    pub human_usd: Account<'info, HumanUsd>,

    pub campaign_manager: Account<'info, CampaignManager>,
}

pub fn handler(ctx: Context<SetCampaignManager>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let campaign_manager = ctx.accounts.campaign_manager.key();
    let human_usd = &mut ctx.accounts.human_usd;
    human_usd.set_campaign_manager(&owner, campaign_manager)?;

    emit!(CampaignManagerSet {
        human_usd: human_usd.key(),
        campaign_manager,
    });

    Ok(())
}
