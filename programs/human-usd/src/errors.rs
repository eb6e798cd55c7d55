use anchor_lang::prelude::*;

#[error_code]
pub enum HumanUsdError {
    #[msg("Caller is not the owner")]
    Unauthorized,

    #[msg("Campaign data has already been configured")]
    AlreadyConfigured,

    #[msg("Campaign tier not found")]
    TierNotFound,

    #[msg("No campaign tier to launch")]
    NoActiveTier,

    #[msg("Invalid campaign data")]
    NoCampaignData,

    #[msg("Needs to stake HMT tokens to create an escrow")]
    InsufficientStake,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Tokens required for a campaign must be greater than zero")]
    InvalidThreshold,

    #[msg("Campaign tier registry is full")]
    TierRegistryFull,

    #[msg("Manifest url or hash exceeds the stored length")]
    ManifestTooLong,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Campaign manager has not been set")]
    CampaignManagerNotSet,

    #[msg("Campaign manager does not match the bound campaign manager")]
    CampaignManagerMismatch,

    #[msg("Accounts required to launch a campaign were not provided")]
    LaunchAccountsMissing,

    #[msg("Token mint does not match the campaign tier")]
    TierMintMismatch,

    #[msg("Treasury account is not owned by the controller")]
    TreasuryOwnerMismatch,

    #[msg("Escrow account does not match the campaign escrow address")]
    EscrowAddressMismatch,

    #[msg("Recipient token account does not belong to the recipient")]
    RecipientMismatch,

    #[msg("Stake belongs to a different staker")]
    StakerMismatch,

    #[msg("Not enough tokens minted to launch a campaign")]
    NoLaunchPending,
}
