use anchor_lang::prelude::*;

use crate::state::{LaunchDeferral, LaunchOutcome};

#[event]
pub struct CampaignManagerInitialized {
    pub campaign_manager: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct CampaignDataSet {
    pub campaign_manager: Pubkey,
    pub recording_oracle: Pubkey,
    pub reputation_oracle: Pubkey,
    pub exchange_oracle: Pubkey,
    pub manifest_url: String,
    pub manifest_hash: String,
}

#[event]
pub struct CampaignTierAdded {
    pub campaign_manager: Pubkey,
    pub id: u64,
    pub token: Pubkey,
    pub fund_amount: u64,
}

#[event]
pub struct CampaignTierRemoved {
    pub campaign_manager: Pubkey,
    pub id: u64,
}

// Cursor moved by an explicit selection
#[event]
pub struct CampaignTierSelected {
    pub campaign_manager: Pubkey,
    pub id: u64,
    pub token: Pubkey,
    pub fund_amount: u64,
}

#[event]
pub struct HumanUsdInitialized {
    pub human_usd: Pubkey,
    pub husd_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub hmt_mint: Pubkey,
    pub tokens_required_for_campaign: u64,
    pub minimum_stake: u64,
}

#[event]
pub struct CampaignManagerSet {
    pub human_usd: Pubkey,
    pub campaign_manager: Pubkey,
}

#[event]
pub struct TokensMinted {
    pub human_usd: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub minted_since_last_launch: u64,
}

#[event]
pub struct CampaignLaunched {
    pub campaign_id: u64,
    pub token: Pubkey,
    pub fund_amount: u64,
    pub escrow: Pubkey,
}

#[event]
pub struct CampaignLaunchDeferred {
    pub human_usd: Pubkey,
    pub reason: LaunchDeferral,
    pub minted_since_last_launch: u64,
}

#[event]
pub struct HmtStaked {
    pub human_usd: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
}

pub(crate) fn emit_launch_outcome(
    human_usd: Pubkey,
    minted_since_last_launch: u64,
    outcome: &LaunchOutcome,
) {
    match outcome {
        LaunchOutcome::NotDue => {}
        LaunchOutcome::Deferred(reason) => {
            emit!(CampaignLaunchDeferred {
                human_usd,
                reason: *reason,
                minted_since_last_launch,
            });
        }
        LaunchOutcome::Launched(launch) => {
            emit!(CampaignLaunched {
                campaign_id: launch.campaign_id,
                token: launch.token,
                fund_amount: launch.fund_amount,
                escrow: launch.escrow,
            });
        }
    }
}
