//! Token-program backed implementations of the issuance collaborators.

use anchor_lang::{
    prelude::*,
    system_program::{self, CreateAccount},
};
use anchor_spl::{
    associated_token::{self, Create},
    token_interface::{self, Mint, MintTo, TokenAccount, TransferChecked},
};

use crate::{
    collaborators::{EscrowFactory, EscrowLaunch, ValueToken},
    errors::HumanUsdError,
    state::Escrow,
};

/// Mints HUSD against collateral pulled 1:1 from the depositor.
pub struct CollateralizedMint<'a, 'info> {
    pub depositor: AccountInfo<'info>,
    pub depositor_collateral: AccountInfo<'info>,
    pub collateral_mint: InterfaceAccount<'info, Mint>,
    pub collateral_vault: AccountInfo<'info>,
    pub husd_mint: AccountInfo<'info>,
    pub recipient_husd: InterfaceAccount<'info, TokenAccount>,
    /// Controller PDA; mint authority of HUSD.
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [u8]],
}

impl<'a, 'info> ValueToken for CollateralizedMint<'a, 'info> {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.recipient_husd.owner, *to, HumanUsdError::RecipientMismatch);

        token_interface::transfer_checked(
            CpiContext::new(
                self.token_program.clone(),
                TransferChecked {
                    from: self.depositor_collateral.clone(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.collateral_vault.clone(),
                    authority: self.depositor.clone(),
                },
            ),
            amount,
            self.collateral_mint.decimals,
        )?;

        token_interface::mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.husd_mint.clone(),
                    to: self.recipient_husd.to_account_info(),
                    authority: self.authority.clone(),
                },
                &[self.signer_seeds],
            ),
            amount,
        )
    }
}

/// Opens escrow accounts and funds them from the controller's treasury.
///
/// Every account is optional on the instruction; a launch that needs one
/// that was not passed fails with `LaunchAccountsMissing`.
pub struct TreasuryEscrows<'a, 'info> {
    pub controller: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub tier_mint: Option<InterfaceAccount<'info, Mint>>,
    pub treasury: Option<InterfaceAccount<'info, TokenAccount>>,
    pub escrow: Option<AccountInfo<'info>>,
    pub escrow_vault: Option<AccountInfo<'info>>,
    pub token_program: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [u8]],
}

impl<'a, 'info> TreasuryEscrows<'a, 'info> {
    fn funding_accounts(
        &self,
        token: &Pubkey,
    ) -> Result<(&InterfaceAccount<'info, Mint>, &InterfaceAccount<'info, TokenAccount>)> {
        let (Some(mint), Some(treasury)) = (&self.tier_mint, &self.treasury) else {
            return err!(HumanUsdError::LaunchAccountsMissing);
        };
        require_keys_eq!(mint.key(), *token, HumanUsdError::TierMintMismatch);
        require_keys_eq!(treasury.mint, *token, HumanUsdError::TierMintMismatch);
        require_keys_eq!(
            treasury.owner,
            self.controller.key(),
            HumanUsdError::TreasuryOwnerMismatch
        );
        Ok((mint, treasury))
    }
}

impl<'a, 'info> EscrowFactory for TreasuryEscrows<'a, 'info> {
    fn funding_balance(&self, token: &Pubkey) -> Result<u64> {
        let (_, treasury) = self.funding_accounts(token)?;
        Ok(treasury.amount)
    }

    fn create(&mut self, launch: &EscrowLaunch) -> Result<Pubkey> {
        let (mint, treasury) = self.funding_accounts(&launch.token)?;
        let (Some(escrow), Some(escrow_vault)) = (&self.escrow, &self.escrow_vault) else {
            return err!(HumanUsdError::LaunchAccountsMissing);
        };

        let controller = self.controller.key();
        let campaign_id = launch.campaign_id.to_le_bytes();
        let (address, bump) = Pubkey::find_program_address(
            &[Escrow::PREFIX_SEED, controller.as_ref(), &campaign_id],
            &crate::ID,
        );
        require_keys_eq!(escrow.key(), address, HumanUsdError::EscrowAddressMismatch);

        let space = 8 + Escrow::INIT_SPACE;
        system_program::create_account(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                CreateAccount {
                    from: self.payer.clone(),
                    to: escrow.clone(),
                },
                &[&[Escrow::PREFIX_SEED, controller.as_ref(), &campaign_id, &[bump]]],
            ),
            Rent::get()?.minimum_balance(space),
            space as u64,
            &crate::ID,
        )?;

        {
            let record = Escrow::from_launch(launch, controller, bump);
            let mut data = escrow.try_borrow_mut_data()?;
            let mut writer: &mut [u8] = &mut data[..];
            record.try_serialize(&mut writer)?;
        }

        associated_token::create(CpiContext::new(
            self.associated_token_program.clone(),
            Create {
                payer: self.payer.clone(),
                associated_token: escrow_vault.clone(),
                authority: escrow.clone(),
                mint: mint.to_account_info(),
                system_program: self.system_program.clone(),
                token_program: self.token_program.clone(),
            },
        ))?;

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: treasury.to_account_info(),
                    mint: mint.to_account_info(),
                    to: escrow_vault.clone(),
                    authority: self.controller.clone(),
                },
                &[self.signer_seeds],
            ),
            launch.fund_amount,
            mint.decimals,
        )?;

        Ok(address)
    }
}
