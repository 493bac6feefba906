// Randomness Oracle Client
//
// Randomness is obtained in two independent invocations: the consumer
// submits a request and receives a request id, later the oracle calls
// back with the words for that id. Nothing blocks between the two.

mod mock;

pub use mock::*;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::config::FantasyConfig;
use crate::crypto::{Address, Hash};
use crate::error::FantasyResult;

/// Identifier assigned by the oracle to a randomness request
pub type RequestId = U256;

/// Parameters of a randomness request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomWordsRequest {
    pub key_hash: Hash,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

impl From<&FantasyConfig> for RandomWordsRequest {
    fn from(config: &FantasyConfig) -> Self {
        Self {
            key_hash: config.key_hash.clone(),
            subscription_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: config.num_words,
        }
    }
}

/// Words delivered by the oracle for one request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomWordsFulfillment {
    pub request_id: RequestId,
    pub consumer: Address,
    pub words: Vec<U256>,
}

pub trait RandomnessOracle {
    /// Address the fulfillment callbacks originate from
    fn address(&self) -> Address;

    /// Submit a request on behalf of `consumer`
    fn request_random_words(
        &mut self,
        consumer: &Address,
        request: &RandomWordsRequest,
    ) -> FantasyResult<RequestId>;
}
