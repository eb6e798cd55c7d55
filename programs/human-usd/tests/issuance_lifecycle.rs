use std::collections::HashMap;

use anchor_lang::prelude::*;
use human_usd::{
    collaborators::{EscrowFactory, EscrowLaunch, StakingGate, ValueToken},
    errors::HumanUsdError,
    CampaignData, CampaignDataInput, CampaignManager, Escrow, EscrowStatus, HumanUsd,
    LaunchContext, LaunchDeferral, LaunchOutcome, ManifestRef, StakePosition,
};

const TOKENS_REQUIRED: u64 = 100_000_000;
const MINIMUM_STAKE: u64 = 2_000_000_000_000_000_000;
const FUND_AMOUNT: u64 = 1_000_000_000_000_000_000;

#[derive(Default)]
struct Ledger {
    balances: HashMap<Pubkey, u64>,
}

impl ValueToken for Ledger {
    fn mint_to(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }
}

/// Treasury holding tier tokens plus the escrows opened from it.
struct Treasury {
    controller: Pubkey,
    balances: HashMap<Pubkey, u64>,
    escrows: Vec<(Pubkey, Escrow)>,
}

impl EscrowFactory for Treasury {
    fn funding_balance(&self, token: &Pubkey) -> Result<u64> {
        Ok(self.balances.get(token).copied().unwrap_or_default())
    }

    fn create(&mut self, launch: &EscrowLaunch) -> Result<Pubkey> {
        let balance = self.balances.entry(launch.token).or_default();
        *balance = balance
            .checked_sub(launch.fund_amount)
            .ok_or(HumanUsdError::MathOverflow)?;

        let (address, bump) = Pubkey::find_program_address(
            &[
                Escrow::PREFIX_SEED,
                self.controller.as_ref(),
                &launch.campaign_id.to_le_bytes(),
            ],
            &human_usd::ID,
        );
        self.escrows
            .push((address, Escrow::from_launch(launch, self.controller, bump)));
        Ok(address)
    }
}

struct Deployment {
    owner: Pubkey,
    controller: Pubkey,
    hmt: Pubkey,
    human_usd: HumanUsd,
    manager: CampaignManager,
    stake: StakePosition,
    ledger: Ledger,
    treasury: Treasury,
}

impl Deployment {
    fn new() -> Self {
        let owner = Pubkey::new_unique();
        let husd_mint = Pubkey::new_unique();
        let hmt = Pubkey::new_unique();
        let (controller, bump) = Pubkey::find_program_address(
            &[HumanUsd::PREFIX_SEED, husd_mint.as_ref()],
            &human_usd::ID,
        );

        let mut human_usd = HumanUsd {
            owner: Pubkey::default(),
            husd_mint: Pubkey::default(),
            collateral_mint: Pubkey::default(),
            hmt_mint: Pubkey::default(),
            campaign_manager: None,
            tokens_required_for_campaign: 0,
            minted_since_last_launch: 0,
            last_campaign_id: 0,
            bump: 0,
        };
        human_usd
            .init(owner, husd_mint, Pubkey::new_unique(), hmt, TOKENS_REQUIRED, bump)
            .unwrap();

        let mut stake = StakePosition {
            staker: Pubkey::default(),
            staked_amount: 0,
            minimum_stake: 0,
            bump: 0,
        };
        stake.init(controller, MINIMUM_STAKE, 0).unwrap();

        let mut manager = CampaignManager {
            owner: Pubkey::default(),
            campaign_data: CampaignData::default(),
            next_tier_index: 0,
            campaign_tiers: Vec::new(),
        };
        manager.init(owner);
        manager
            .set_campaign_data(
                &owner,
                CampaignDataInput {
                    recording_oracle: Pubkey::new_unique(),
                    reputation_oracle: Pubkey::new_unique(),
                    exchange_oracle: Pubkey::new_unique(),
                    recording_oracle_fee_percentage: 10,
                    reputation_oracle_fee_percentage: 10,
                    exchange_oracle_fee_percentage: 10,
                    manifest: ManifestRef {
                        url: "http://localhost:9000/manifests/s3abc.json".to_string(),
                        hash: "abc".to_string(),
                    },
                },
            )
            .unwrap();
        manager.add_campaign_tier(&owner, hmt, FUND_AMOUNT).unwrap();

        Self {
            owner,
            controller,
            hmt,
            human_usd,
            manager,
            stake,
            ledger: Ledger::default(),
            treasury: Treasury {
                controller,
                balances: HashMap::from([(hmt, 2 * FUND_AMOUNT)]),
                escrows: Vec::new(),
            },
        }
    }

    fn mint(&mut self, to: Pubkey, amount: u64) -> Result<LaunchOutcome> {
        let launch = LaunchContext {
            controller: self.controller,
            manager: Some(&mut self.manager),
            manifest: None,
            staking: &self.stake,
            escrows: &mut self.treasury,
        };
        self.human_usd
            .mint(&self.owner, &to, amount, &mut self.ledger, launch)
    }

    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.ledger.balances.get(owner).copied().unwrap_or_default()
    }
}

#[test]
fn test_issuance_lifecycle() {
    let mut deployment = Deployment::new();
    let alice = Pubkey::new_unique();

    // mints before a campaign manager is bound still count toward the threshold
    assert_eq!(
        deployment.mint(alice, TOKENS_REQUIRED / 4).unwrap(),
        LaunchOutcome::NotDue
    );

    let manager_address = Pubkey::new_unique();
    deployment
        .human_usd
        .set_campaign_manager(&deployment.owner, manager_address)
        .unwrap();

    assert_eq!(
        deployment.mint(alice, TOKENS_REQUIRED / 4).unwrap(),
        LaunchOutcome::NotDue
    );
    assert_eq!(deployment.human_usd.minted_since_last_launch, TOKENS_REQUIRED / 2);

    let error = deployment.mint(alice, TOKENS_REQUIRED).unwrap_err();
    assert_eq!(error, HumanUsdError::InsufficientStake.into());
    assert_eq!(deployment.balance_of(&alice), TOKENS_REQUIRED / 2);

    let controller = deployment.controller;
    deployment
        .human_usd
        .stake_hmt(&deployment.owner, &controller, MINIMUM_STAKE, &mut deployment.stake)
        .unwrap();
    assert!(deployment.stake.has_available_stake(&controller));

    let LaunchOutcome::Launched(first) = deployment.mint(alice, TOKENS_REQUIRED).unwrap() else {
        panic!("threshold crossed with stake should launch");
    };
    assert_eq!(first.campaign_id, 1);
    assert_eq!(first.token, deployment.hmt);
    assert_eq!(first.fund_amount, FUND_AMOUNT);
    assert_eq!(deployment.human_usd.minted_since_last_launch, TOKENS_REQUIRED / 2);

    let (address, escrow) = &deployment.treasury.escrows[0];
    assert_eq!(*address, first.escrow);
    assert_eq!(escrow.status, EscrowStatus::Pending);
    assert_eq!(escrow.launcher, controller);
    assert_eq!(escrow.manifest_hash, "abc");
    assert_eq!(deployment.treasury.funding_balance(&deployment.hmt).unwrap(), FUND_AMOUNT);

    let LaunchOutcome::Launched(second) = deployment.mint(alice, TOKENS_REQUIRED).unwrap() else {
        panic!("second threshold should launch");
    };
    assert_eq!(second.campaign_id, 2);
    assert_ne!(second.escrow, first.escrow);
    assert_eq!(deployment.treasury.funding_balance(&deployment.hmt).unwrap(), 0);

    // treasury exhausted: tokens are still minted
    let before = deployment.balance_of(&alice);
    assert_eq!(
        deployment.mint(alice, TOKENS_REQUIRED).unwrap(),
        LaunchOutcome::Deferred(LaunchDeferral::InsufficientTreasury)
    );
    assert_eq!(deployment.balance_of(&alice), before + TOKENS_REQUIRED);
    assert_eq!(deployment.human_usd.last_campaign_id, 2);
    assert_eq!(deployment.treasury.escrows.len(), 2);
}

#[test]
fn test_launches_rotate_through_tiers() {
    let mut deployment = Deployment::new();
    let owner = deployment.owner;
    let controller = deployment.controller;
    let usdt = Pubkey::new_unique();
    deployment.manager.add_campaign_tier(&owner, usdt, 500).unwrap();
    deployment.treasury.balances.insert(usdt, 1_000);
    deployment
        .human_usd
        .set_campaign_manager(&owner, Pubkey::new_unique())
        .unwrap();
    deployment
        .human_usd
        .stake_hmt(&owner, &controller, MINIMUM_STAKE, &mut deployment.stake)
        .unwrap();

    let alice = Pubkey::new_unique();
    let tokens: Vec<Pubkey> = (0..3)
        .map(|_| match deployment.mint(alice, TOKENS_REQUIRED).unwrap() {
            LaunchOutcome::Launched(launch) => launch.token,
            outcome => panic!("expected a launch, got {:?}", outcome),
        })
        .collect();

    assert_eq!(tokens, vec![deployment.hmt, usdt, deployment.hmt]);
    assert_eq!(deployment.treasury.balances[&usdt], 500);
}
