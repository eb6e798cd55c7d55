use crate::{
    constants::{TOKEN_NAME, TOKEN_SYMBOL},
    events::HumanUsdInitialized,
    state::*,
};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

#[derive(Accounts)]
pub struct InitializeHumanUsd<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + HumanUsd::INIT_SPACE,
        seeds = [HumanUsd::PREFIX_SEED, husd_mint.key().as_ref()],
        bump
    )]
    pub human_usd: Account<'info, HumanUsd>,

    #[account(
        init,
        payer = owner,
        mint::decimals = collateral_mint.decimals,
        mint::authority = human_usd,
        mint::token_program = token_program,
    )]
    pub husd_mint: InterfaceAccount<'info, Mint>,

    #[account(mint::token_program = token_program)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(mint::token_program = token_program)]
    pub hmt_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = collateral_mint,
        associated_token::authority = human_usd,
        associated_token::token_program = token_program,
    )]
    pub collateral_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = owner,
        space = 8 + StakePosition::INIT_SPACE,
        seeds = [StakePosition::PREFIX_SEED, human_usd.key().as_ref()],
        bump
    )]
    pub stake_position: Account<'info, StakePosition>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = hmt_mint,
        associated_token::authority = stake_position,
        associated_token::token_program = token_program,
    )]
    pub stake_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeHumanUsd>,
    tokens_required_for_campaign: u64,
    minimum_stake: u64,
) -> Result<()> {
    let human_usd_key = ctx.accounts.human_usd.key();
    let husd_mint = ctx.accounts.husd_mint.key();
    let collateral_mint = ctx.accounts.collateral_mint.key();
    let hmt_mint = ctx.accounts.hmt_mint.key();

    ctx.accounts.human_usd.init(
        ctx.accounts.owner.key(),
        husd_mint,
        collateral_mint,
        hmt_mint,
        tokens_required_for_campaign,
        ctx.bumps.human_usd,
    )?;
    ctx.accounts
        .stake_position
        .init(human_usd_key, minimum_stake, ctx.bumps.stake_position)?;

    msg!(
        "{} ({}) issued at {} with {} decimals",
        TOKEN_NAME,
        TOKEN_SYMBOL,
        husd_mint,
        ctx.accounts.husd_mint.decimals
    );

    emit!(HumanUsdInitialized {
        human_usd: human_usd_key,
        husd_mint,
        collateral_mint,
        hmt_mint,
        tokens_required_for_campaign,
        minimum_stake,
    });

    Ok(())
}
