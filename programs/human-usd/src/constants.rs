/// Value token identity reported on initialization.
pub const TOKEN_NAME: &str = "HumanUSD";
pub const TOKEN_SYMBOL: &str = "HUSD";

// Keep in sync with the #[max_len] attributes in state.
pub const MAX_CAMPAIGN_TIERS: usize = 64;
pub const MAX_MANIFEST_URL_LEN: usize = 200;
pub const MAX_MANIFEST_HASH_LEN: usize = 66;
