use std::collections::HashMap;

use crate::character::{CharacterToken, TokenId};
use crate::crypto::Address;
use crate::error::FantasyResult;
use crate::events::FantasyEvent;
use crate::oracle::RequestId;
use crate::registry::ModuleRegistry;

use super::FantasyStorage;

/// Committed contract state kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    characters: HashMap<TokenId, CharacterToken>,
    next_token_id: TokenId,
    balances: HashMap<Address, u64>,
    pending_requests: HashMap<RequestId, TokenId>,
    registry: ModuleRegistry,
    owner: Address,
    collected_fees: u64,
    events: Vec<FantasyEvent>,
}

impl MemoryStorage {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            ..Default::default()
        }
    }

    /// Every event emitted since deployment
    pub fn events(&self) -> &[FantasyEvent] {
        &self.events
    }

    pub fn pending_request_count(&self) -> usize {
        self.pending_requests.len()
    }
}

impl FantasyStorage for MemoryStorage {
    fn get_character(&self, token_id: TokenId) -> Option<CharacterToken> {
        self.characters.get(&token_id).cloned()
    }

    fn set_character(&mut self, character: &CharacterToken) -> FantasyResult<()> {
        self.characters
            .insert(character.token_id, character.clone());
        Ok(())
    }

    fn get_next_token_id(&self) -> TokenId {
        self.next_token_id
    }

    fn set_next_token_id(&mut self, token_id: TokenId) -> FantasyResult<()> {
        self.next_token_id = token_id;
        Ok(())
    }

    fn get_balance(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn set_balance(&mut self, owner: &Address, balance: u64) -> FantasyResult<()> {
        if balance == 0 {
            self.balances.remove(owner);
        } else {
            self.balances.insert(*owner, balance);
        }
        Ok(())
    }

    fn get_pending_request(&self, request_id: &RequestId) -> Option<TokenId> {
        self.pending_requests.get(request_id).copied()
    }

    fn set_pending_request(
        &mut self,
        request_id: &RequestId,
        token_id: TokenId,
    ) -> FantasyResult<()> {
        self.pending_requests.insert(*request_id, token_id);
        Ok(())
    }

    fn delete_pending_request(&mut self, request_id: &RequestId) -> FantasyResult<()> {
        self.pending_requests.remove(request_id);
        Ok(())
    }

    fn get_registry(&self) -> ModuleRegistry {
        self.registry.clone()
    }

    fn set_registry(&mut self, registry: &ModuleRegistry) -> FantasyResult<()> {
        self.registry = registry.clone();
        Ok(())
    }

    fn get_owner(&self) -> Address {
        self.owner
    }

    fn set_owner(&mut self, owner: &Address) -> FantasyResult<()> {
        self.owner = *owner;
        Ok(())
    }

    fn get_collected_fees(&self) -> u64 {
        self.collected_fees
    }

    fn set_collected_fees(&mut self, amount: u64) -> FantasyResult<()> {
        self.collected_fees = amount;
        Ok(())
    }

    fn emit_event(&mut self, event: FantasyEvent) {
        self.events.push(event);
    }
}
