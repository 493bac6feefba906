use std::{fs, path::Path};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::crypto::Hash;
use crate::error::{FantasyError, FantasyResult};

// Fee required to submit a character creation request (0.01 coin in base units)
pub const ARTIST_FEE: u64 = 10_000_000_000_000_000;

// Words consumed per character: race, class, gender, first name,
// last name and the six ability scores
pub const RANDOM_WORDS_COUNT: u32 = 11;

// Blocks the oracle waits before answering a request
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;

// Gas budget granted to the fulfillment callback
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 2_500_000;

pub const DEFAULT_SUBSCRIPTION_ID: u64 = 1;

// Gas lane used by the local coordinator
pub const DEFAULT_KEY_HASH: Hash = Hash::new([
    0xd8, 0x9b, 0x2b, 0xf1, 0x50, 0xe3, 0xb9, 0xe1, 0x34, 0x46, 0x98, 0x6e, 0x57, 0x1f, 0xb9, 0xca,
    0xb2, 0x4b, 0x13, 0xce, 0xa0, 0xa4, 0x3e, 0xa2, 0x0a, 0x60, 0x49, 0xa8, 0x5c, 0xc8, 0x07, 0xcc,
]);

// Maximum race name length (bytes)
pub const MAX_RACE_NAME_LENGTH: usize = 32;

// Every character starts its life at this level
pub const CHARACTER_START_LEVEL: u8 = 1;

// Functions Helpers
fn default_artist_fee() -> u64 {
    ARTIST_FEE
}

fn default_key_hash() -> Hash {
    DEFAULT_KEY_HASH
}

fn default_subscription_id() -> u64 {
    DEFAULT_SUBSCRIPTION_ID
}

fn default_request_confirmations() -> u16 {
    DEFAULT_REQUEST_CONFIRMATIONS
}

fn default_callback_gas_limit() -> u32 {
    DEFAULT_CALLBACK_GAS_LIMIT
}

fn default_num_words() -> u32 {
    RANDOM_WORDS_COUNT
}

/// Deployment parameters of the character contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FantasyConfig {
    /// Minimum payment accepted by `create_character`
    #[serde(default = "default_artist_fee")]
    pub artist_fee: u64,
    /// Oracle gas lane
    #[serde(default = "default_key_hash")]
    pub key_hash: Hash,
    /// Oracle subscription paying for the requests
    #[serde(default = "default_subscription_id")]
    pub subscription_id: u64,
    #[serde(default = "default_request_confirmations")]
    pub request_confirmations: u16,
    #[serde(default = "default_callback_gas_limit")]
    pub callback_gas_limit: u32,
    /// Random words requested per character
    #[serde(default = "default_num_words")]
    pub num_words: u32,
}

impl Default for FantasyConfig {
    fn default() -> Self {
        Self {
            artist_fee: default_artist_fee(),
            key_hash: default_key_hash(),
            subscription_id: default_subscription_id(),
            request_confirmations: default_request_confirmations(),
            callback_gas_limit: default_callback_gas_limit(),
            num_words: default_num_words(),
        }
    }
}

impl FantasyConfig {
    /// Reject parameters that would make fulfillment impossible
    pub fn validate(&self) -> FantasyResult<()> {
        if self.num_words < RANDOM_WORDS_COUNT {
            return Err(FantasyError::InvalidConfig);
        }
        if self.callback_gas_limit == 0 {
            return Err(FantasyError::InvalidConfig);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Error while parsing config")?;
        config.validate().context("Invalid config")?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Error while reading config file {}", path.display()))?;
        Self::from_json(&content)
    }
}
