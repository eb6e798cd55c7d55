use crate::{events::emit_launch_outcome, instructions::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::{associated_token::AssociatedToken, token_interface::TokenInterface};

#[derive(Accounts)]
pub struct LaunchPendingCampaign<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [HumanUsd::PREFIX_SEED, human_usd.husd_mint.as_ref()],
        bump = human_usd.bump
    )]
    pub human_usd: Account<'info, HumanUsd>,

    #[account(
        seeds = [StakePosition::PREFIX_SEED, human_usd.key().as_ref()],
        bump = stake_position.bump
    )]
    pub stake_position: Account<'info, StakePosition>,

    pub launch: CampaignLaunchAccounts<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<LaunchPendingCampaign>, manifest: Option<ManifestRef>) -> Result<()> {
    let accounts = ctx.accounts;
    accounts.launch.validate(&accounts.human_usd)?;

    let owner = accounts.owner.key();
    let human_usd_key = accounts.human_usd.key();
    let husd_mint_key = accounts.human_usd.husd_mint;
    let bump = [accounts.human_usd.bump];
    let signer_seeds: &[&[u8]] = &[HumanUsd::PREFIX_SEED, husd_mint_key.as_ref(), &bump];

    let mut escrows = accounts.launch.escrows(
        accounts.human_usd.to_account_info(),
        accounts.owner.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.associated_token_program.to_account_info(),
        accounts.system_program.to_account_info(),
        signer_seeds,
    );

    let outcome = accounts.human_usd.launch_pending_campaign(
        &owner,
        LaunchContext {
            controller: human_usd_key,
            manager: accounts
                .launch
                .campaign_manager
                .as_mut()
                .map(|campaign_manager| &mut **campaign_manager),
            manifest,
            staking: &*accounts.stake_position,
            escrows: &mut escrows,
        },
    )?;

    emit_launch_outcome(
        human_usd_key,
        accounts.human_usd.minted_since_last_launch,
        &outcome,
    );

    Ok(())
}
