// Contract Events
// Emitted by successful invocations and returned in their receipt.

use serde::{Deserialize, Serialize};

use crate::character::TokenId;
use crate::crypto::Address;
use crate::oracle::RequestId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum FantasyEvent {
    CharacterGenerationStarted {
        token_id: TokenId,
        started_by: Address,
        request_id: RequestId,
    },
    CharacterGenerated {
        token_id: TokenId,
        owner: Address,
        race: String,
    },
    RaceModuleAdded {
        race_name: String,
        module: Address,
    },
    RaceModuleRemoved {
        race_name: String,
        module: Address,
    },
    RaceModuleUpdated {
        race_name: String,
        previous: Address,
        module: Address,
    },
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    FeesWithdrawn {
        to: Address,
        amount: u64,
    },
}

impl FantasyEvent {
    /// Event name as it appears in receipts
    pub fn name(&self) -> &'static str {
        match self {
            FantasyEvent::CharacterGenerationStarted { .. } => "CharacterGenerationStarted",
            FantasyEvent::CharacterGenerated { .. } => "CharacterGenerated",
            FantasyEvent::RaceModuleAdded { .. } => "RaceModuleAdded",
            FantasyEvent::RaceModuleRemoved { .. } => "RaceModuleRemoved",
            FantasyEvent::RaceModuleUpdated { .. } => "RaceModuleUpdated",
            FantasyEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
            FantasyEvent::FeesWithdrawn { .. } => "FeesWithdrawn",
        }
    }
}

/// Outcome of a successful state-changing invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt<T> {
    pub value: T,
    pub events: Vec<FantasyEvent>,
}

impl<T> Receipt<T> {
    pub fn new(value: T, events: Vec<FantasyEvent>) -> Self {
        Self { value, events }
    }

    /// First event with the given name
    pub fn event(&self, name: &str) -> Option<&FantasyEvent> {
        self.events.iter().find(|event| event.name() == name)
    }
}
