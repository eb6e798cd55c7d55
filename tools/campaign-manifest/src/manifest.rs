use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::error::ManifestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    MarketMaking,
}

/// Campaign description read by the exchange oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub chain_id: u64,
    pub requester_address: String,
    pub exchange_name: String,
    pub token: String,
    /// Base units, as a decimal string
    pub fund_amount: String,
    pub duration: u64,
    pub start_block: u64,
    pub end_block: u64,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
}

impl Manifest {
    pub fn market_making(
        chain_id: u64,
        requester_address: impl Into<String>,
        exchange_name: impl Into<String>,
        token: impl Into<String>,
        fund_amount: u128,
        start_block: u64,
        duration: u64,
    ) -> Self {
        Self {
            chain_id,
            requester_address: requester_address.into(),
            exchange_name: exchange_name.into(),
            token: token.into(),
            fund_amount: fund_amount.to_string(),
            duration,
            start_block,
            end_block: start_block.saturating_add(duration),
            campaign_type: CampaignType::MarketMaking,
        }
    }

    /// Compact JSON body, the exact bytes that get hashed and uploaded.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn content_hash(content: &[u8]) -> String {
    hex::encode(Sha1::digest(content))
}
