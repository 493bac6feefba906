use std::collections::HashMap;

use log::{debug, warn};
use primitive_types::U256;

use crate::crypto::{abi_encode_words, keccak256, Address};
use crate::error::{FantasyError, FantasyResult};

use super::{RandomWordsFulfillment, RandomWordsRequest, RandomnessOracle, RequestId};

#[derive(Clone, Debug)]
struct PendingOracleRequest {
    consumer: Address,
    num_words: u32,
}

/// Local coordinator answering requests on demand
///
/// Request ids start at 1. Default words are
/// `keccak256(abi.encode(request_id, index))`.
#[derive(Debug)]
pub struct MockVrfCoordinator {
    address: Address,
    next_request_id: RequestId,
    pending: HashMap<RequestId, PendingOracleRequest>,
}

impl MockVrfCoordinator {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            next_request_id: U256::one(),
            pending: HashMap::new(),
        }
    }

    pub fn is_pending(&self, request_id: &RequestId) -> bool {
        self.pending.contains_key(request_id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Deterministic words for a request
    pub fn default_words(request_id: &RequestId, num_words: u32) -> Vec<U256> {
        (0..num_words)
            .map(|index| {
                let encoded = abi_encode_words(&[*request_id, U256::from(index)]);
                keccak256(&encoded).to_u256()
            })
            .collect()
    }

    /// Answer a request with the default words
    pub fn fulfill_random_words(
        &mut self,
        request_id: &RequestId,
    ) -> FantasyResult<RandomWordsFulfillment> {
        let request = self.take_request(request_id)?;
        let words = Self::default_words(request_id, request.num_words);
        Ok(RandomWordsFulfillment {
            request_id: *request_id,
            consumer: request.consumer,
            words,
        })
    }

    /// Answer a request with caller-chosen words
    pub fn fulfill_random_words_with_override(
        &mut self,
        request_id: &RequestId,
        words: Vec<U256>,
    ) -> FantasyResult<RandomWordsFulfillment> {
        let request = self.take_request(request_id)?;
        if words.len() != request.num_words as usize {
            warn!(
                "Override for request {} carries {} words, {} requested",
                request_id,
                words.len(),
                request.num_words
            );
        }
        Ok(RandomWordsFulfillment {
            request_id: *request_id,
            consumer: request.consumer,
            words,
        })
    }

    fn take_request(&mut self, request_id: &RequestId) -> FantasyResult<PendingOracleRequest> {
        self.pending
            .remove(request_id)
            .ok_or(FantasyError::UnknownRequest)
    }
}

impl RandomnessOracle for MockVrfCoordinator {
    fn address(&self) -> Address {
        self.address
    }

    fn request_random_words(
        &mut self,
        consumer: &Address,
        request: &RandomWordsRequest,
    ) -> FantasyResult<RequestId> {
        let request_id = self.next_request_id;
        if self.pending.contains_key(&request_id) {
            return Err(FantasyError::DuplicateRequest);
        }
        self.next_request_id = request_id
            .checked_add(U256::one())
            .ok_or(FantasyError::Overflow)?;

        debug!(
            "Random words requested: id {}, consumer {}, {} words",
            request_id, consumer, request.num_words
        );
        self.pending.insert(
            request_id,
            PendingOracleRequest {
                consumer: *consumer,
                num_words: request.num_words,
            },
        );
        Ok(request_id)
    }
}
