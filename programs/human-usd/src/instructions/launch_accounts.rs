use crate::{adapters::TreasuryEscrows, errors::HumanUsdError, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

/// Accounts a campaign launch may need. Callers that expect a launch pass the
/// tier the manager would select next (see `peek_campaign_tier_to_launch`).
#[derive(Accounts)]
pub struct CampaignLaunchAccounts<'info> {
    #[account(mut)]
    pub campaign_manager: Option<Account<'info, CampaignManager>>,

    pub tier_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Controller-owned account holding the tier token
    #[account(mut)]
    pub treasury: Option<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: created at the escrow PDA for the next campaign id; the address is verified
    /// before creation
    #[account(mut)]
    pub escrow: Option<UncheckedAccount<'info>>,

    /// CHECK: associated token account of the escrow, created by the associated token program
    #[account(mut)]
    pub escrow_vault: Option<UncheckedAccount<'info>>,
}

impl<'info> CampaignLaunchAccounts<'info> {
    pub fn validate(&self, human_usd: &HumanUsd) -> Result<()> {
        if let Some(campaign_manager) = &self.campaign_manager {
            require!(
                human_usd.campaign_manager == Some(campaign_manager.key()),
                HumanUsdError::CampaignManagerMismatch
            );
        }
        Ok(())
    }

    pub fn escrows<'a>(
        &self,
        controller: AccountInfo<'info>,
        payer: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        associated_token_program: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [u8]],
    ) -> TreasuryEscrows<'a, 'info> {
        TreasuryEscrows {
            controller,
            payer,
            tier_mint: self.tier_mint.clone(),
            treasury: self.treasury.clone(),
            escrow: self.escrow.as_ref().map(|escrow| escrow.to_account_info()),
            escrow_vault: self
                .escrow_vault
                .as_ref()
                .map(|escrow_vault| escrow_vault.to_account_info()),
            token_program,
            associated_token_program,
            system_program,
            signer_seeds,
        }
    }
}
