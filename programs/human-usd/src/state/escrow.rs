use anchor_lang::prelude::*;

use crate::collaborators::EscrowLaunch;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscrowStatus {
    Launched,
    /// Funded and waiting for the oracles to pick it up.
    Pending,
}

/// Funded campaign escrow opened by the controller.
/// Seeds: [b"escrow", human_usd, campaign_id (le bytes)]
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    pub campaign_id: u64,
    pub launcher: Pubkey,
    pub token: Pubkey,
    pub fund_amount: u64,
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
    pub status: EscrowStatus,
    pub bump: u8,
}

impl Escrow {
    pub const PREFIX_SEED: &'static [u8] = b"escrow";

    pub fn from_launch(launch: &EscrowLaunch, launcher: Pubkey, bump: u8) -> Self {
        let data = &launch.campaign_data;
        Self {
            campaign_id: launch.campaign_id,
            launcher,
            token: launch.token,
            fund_amount: launch.fund_amount,
            recording_oracle: data.recording_oracle,
            reputation_oracle: data.reputation_oracle,
            exchange_oracle: data.exchange_oracle,
            recording_oracle_fee_percentage: data.recording_oracle_fee_percentage,
            reputation_oracle_fee_percentage: data.reputation_oracle_fee_percentage,
            exchange_oracle_fee_percentage: data.exchange_oracle_fee_percentage,
            manifest_url: data.manifest_url.clone(),
            manifest_hash: data.manifest_hash.clone(),
            status: EscrowStatus::Pending,
            bump,
        }
    }
}
