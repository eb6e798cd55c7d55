//! Seams between the issuance state machine and the accounts it drives.
//!
//! On-chain these are backed by token CPIs (see `adapters`); tests plug in
//! in-memory ledgers.

use anchor_lang::prelude::*;

use crate::state::CampaignData;

/// Staking ledger consulted before any escrow is opened.
pub trait StakingGate {
    fn has_available_stake(&self, staker: &Pubkey) -> bool;

    /// Records `amount` of newly locked stake. The tokens are moved by the caller.
    fn stake(&mut self, staker: &Pubkey, amount: u64) -> Result<()>;
}

/// Issues the value token.
pub trait ValueToken {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Parameters for one funded escrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscrowLaunch {
    pub campaign_id: u64,
    pub token: Pubkey,
    pub fund_amount: u64,
    pub campaign_data: CampaignData,
}

/// Opens escrows funded out of the controller treasury.
pub trait EscrowFactory {
    /// Treasury balance of `token` available for funding.
    fn funding_balance(&self, token: &Pubkey) -> Result<u64>;

    /// Creates the escrow, moves `fund_amount` into it and returns its address.
    fn create(&mut self, launch: &EscrowLaunch) -> Result<Pubkey>;
}
