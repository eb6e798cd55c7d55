use crate::{
    adapters::CollateralizedMint,
    events::{emit_launch_outcome, TokensMinted},
    instructions::*,
    state::*,
};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

#[derive(Accounts)]
pub struct MintHusd<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [HumanUsd::PREFIX_SEED, husd_mint.key().as_ref()],
        bump = human_usd.bump
    )]
    pub human_usd: Account<'info, HumanUsd>,

    #[account(mut, address = human_usd.husd_mint)]
    pub husd_mint: InterfaceAccount<'info, Mint>,

    #[account(address = human_usd.collateral_mint)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_collateral: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = human_usd,
        associated_token::token_program = token_program,
    )]
    pub collateral_vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: any wallet may receive HUSD
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = husd_mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_husd: InterfaceAccount<'info, TokenAccount>,

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

pub fn handler(ctx: Context<MintHusd>, amount: u64, manifest: Option<ManifestRef>) -> Result<()> {
    let accounts = ctx.accounts;
    accounts.launch.validate(&accounts.human_usd)?;

    let owner = accounts.owner.key();
    let recipient = accounts.recipient.key();
    let human_usd_key = accounts.human_usd.key();
    let husd_mint_key = accounts.husd_mint.key();
    let bump = [accounts.human_usd.bump];
    let signer_seeds: &[&[u8]] = &[HumanUsd::PREFIX_SEED, husd_mint_key.as_ref(), &bump];

    let mut value_token = CollateralizedMint {
        depositor: accounts.owner.to_account_info(),
        depositor_collateral: accounts.owner_collateral.to_account_info(),
        collateral_mint: accounts.collateral_mint.clone(),
        collateral_vault: accounts.collateral_vault.to_account_info(),
        husd_mint: accounts.husd_mint.to_account_info(),
        recipient_husd: accounts.recipient_husd.clone(),
        authority: accounts.human_usd.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        signer_seeds,
    };
    let mut escrows = accounts.launch.escrows(
        accounts.human_usd.to_account_info(),
        accounts.owner.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.associated_token_program.to_account_info(),
        accounts.system_program.to_account_info(),
        signer_seeds,
    );

    let outcome = accounts.human_usd.mint(
        &owner,
        &recipient,
        amount,
        &mut value_token,
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

    let minted_since_last_launch = accounts.human_usd.minted_since_last_launch;
    emit!(TokensMinted {
        human_usd: human_usd_key,
        to: recipient,
        amount,
        minted_since_last_launch,
    });
    emit_launch_outcome(human_usd_key, minted_since_last_launch, &outcome);

    Ok(())
}
