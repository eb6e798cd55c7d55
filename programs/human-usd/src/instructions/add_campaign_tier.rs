use crate::{events::CampaignTierAdded, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AddCampaignTier<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub campaign_manager: Account<'info, CampaignManager>,
}

pub fn handler(ctx: Context<AddCampaignTier>, token: Pubkey, fund_amount: u64) -> Result<u64> {
    let owner = ctx.accounts.owner.key();
    let campaign_manager = &mut ctx.accounts.campaign_manager;
    let id = campaign_manager.add_campaign_tier(&owner, token, fund_amount)?;

    emit!(CampaignTierAdded {
        campaign_manager: campaign_manager.key(),
        id,
        token,
        fund_amount,
    });

    Ok(id)
}
