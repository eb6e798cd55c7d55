use crate::{events::CampaignManagerInitialized, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeCampaignManager<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + CampaignManager::INIT_SPACE,
    )]
    pub campaign_manager: Account<'info, CampaignManager>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeCampaignManager>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.campaign_manager.init(owner);

    emit!(CampaignManagerInitialized {
        campaign_manager: ctx.accounts.campaign_manager.key(),
        owner,
    });

    Ok(())
}
