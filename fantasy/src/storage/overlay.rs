use std::collections::HashMap;

use crate::character::{CharacterToken, TokenId};
use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::events::FantasyEvent;
use crate::oracle::RequestId;
use crate::registry::ModuleRegistry;

use super::FantasyStorage;

/// Key types for overlay storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FantasyKey {
    Character(TokenId),
    NextTokenId,
    Balance(Address),
    PendingRequest(RequestId),
    Registry,
    Owner,
    CollectedFees,
}

/// Value types for overlay storage
///
/// The `Deleted` variant marks a key as deleted (tombstone).
#[derive(Debug, Clone)]
pub enum FantasyValue {
    Character(CharacterToken),
    NextTokenId(TokenId),
    Balance(u64),
    PendingRequest(TokenId),
    Registry(ModuleRegistry),
    Owner(Address),
    CollectedFees(u64),
    Deleted,
}

/// Writes and events accumulated by one invocation
#[derive(Debug, Clone, Default)]
pub struct FantasyChanges {
    pub changes: HashMap<FantasyKey, FantasyValue>,
    pub events: Vec<FantasyEvent>,
}

impl FantasyChanges {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Write every change into the committed storage
    pub fn apply<S: FantasyStorage + ?Sized>(self, storage: &mut S) -> FantasyResult<()> {
        for (key, value) in self.changes {
            match (key, value) {
                (FantasyKey::Character(_), FantasyValue::Character(character)) => {
                    storage.set_character(&character)?
                }
                (FantasyKey::NextTokenId, FantasyValue::NextTokenId(token_id)) => {
                    storage.set_next_token_id(token_id)?
                }
                (FantasyKey::Balance(owner), FantasyValue::Balance(balance)) => {
                    storage.set_balance(&owner, balance)?
                }
                (FantasyKey::PendingRequest(request_id), FantasyValue::PendingRequest(token_id)) => {
                    storage.set_pending_request(&request_id, token_id)?
                }
                (FantasyKey::PendingRequest(request_id), FantasyValue::Deleted) => {
                    storage.delete_pending_request(&request_id)?
                }
                (FantasyKey::Registry, FantasyValue::Registry(registry)) => {
                    storage.set_registry(&registry)?
                }
                (FantasyKey::Owner, FantasyValue::Owner(owner)) => storage.set_owner(&owner)?,
                (FantasyKey::CollectedFees, FantasyValue::CollectedFees(amount)) => {
                    storage.set_collected_fees(amount)?
                }
                _ => return Err(FantasyError::StorageError),
            }
        }
        for event in self.events {
            storage.emit_event(event);
        }
        Ok(())
    }
}

/// Overlay over the committed storage
///
/// Reads fall through to the base storage, writes stay in the overlay.
/// On success the changes are applied, on failure they are dropped.
pub struct FantasyOverlay<'a, S: FantasyStorage + ?Sized> {
    base: &'a S,
    changes: FantasyChanges,
}

impl<'a, S: FantasyStorage + ?Sized> FantasyOverlay<'a, S> {
    pub fn new(base: &'a S) -> Self {
        Self {
            base,
            changes: FantasyChanges::default(),
        }
    }

    pub fn into_changes(self) -> FantasyChanges {
        self.changes
    }

    fn get(&self, key: &FantasyKey) -> Option<&FantasyValue> {
        self.changes.changes.get(key)
    }

    fn set(&mut self, key: FantasyKey, value: FantasyValue) {
        self.changes.changes.insert(key, value);
    }
}

impl<S: FantasyStorage + ?Sized> FantasyStorage for FantasyOverlay<'_, S> {
    fn get_character(&self, token_id: TokenId) -> Option<CharacterToken> {
        match self.get(&FantasyKey::Character(token_id)) {
            Some(FantasyValue::Character(character)) => Some(character.clone()),
            Some(_) => None,
            None => self.base.get_character(token_id),
        }
    }

    fn set_character(&mut self, character: &CharacterToken) -> FantasyResult<()> {
        self.set(
            FantasyKey::Character(character.token_id),
            FantasyValue::Character(character.clone()),
        );
        Ok(())
    }

    fn get_next_token_id(&self) -> TokenId {
        match self.get(&FantasyKey::NextTokenId) {
            Some(FantasyValue::NextTokenId(token_id)) => *token_id,
            _ => self.base.get_next_token_id(),
        }
    }

    fn set_next_token_id(&mut self, token_id: TokenId) -> FantasyResult<()> {
        self.set(FantasyKey::NextTokenId, FantasyValue::NextTokenId(token_id));
        Ok(())
    }

    fn get_balance(&self, owner: &Address) -> u64 {
        match self.get(&FantasyKey::Balance(*owner)) {
            Some(FantasyValue::Balance(balance)) => *balance,
            _ => self.base.get_balance(owner),
        }
    }

    fn set_balance(&mut self, owner: &Address, balance: u64) -> FantasyResult<()> {
        self.set(FantasyKey::Balance(*owner), FantasyValue::Balance(balance));
        Ok(())
    }

    fn get_pending_request(&self, request_id: &RequestId) -> Option<TokenId> {
        match self.get(&FantasyKey::PendingRequest(*request_id)) {
            Some(FantasyValue::PendingRequest(token_id)) => Some(*token_id),
            Some(_) => None,
            None => self.base.get_pending_request(request_id),
        }
    }

    fn set_pending_request(
        &mut self,
        request_id: &RequestId,
        token_id: TokenId,
    ) -> FantasyResult<()> {
        self.set(
            FantasyKey::PendingRequest(*request_id),
            FantasyValue::PendingRequest(token_id),
        );
        Ok(())
    }

    fn delete_pending_request(&mut self, request_id: &RequestId) -> FantasyResult<()> {
        self.set(FantasyKey::PendingRequest(*request_id), FantasyValue::Deleted);
        Ok(())
    }

    fn get_registry(&self) -> ModuleRegistry {
        match self.get(&FantasyKey::Registry) {
            Some(FantasyValue::Registry(registry)) => registry.clone(),
            _ => self.base.get_registry(),
        }
    }

    fn set_registry(&mut self, registry: &ModuleRegistry) -> FantasyResult<()> {
        self.set(FantasyKey::Registry, FantasyValue::Registry(registry.clone()));
        Ok(())
    }

    fn get_owner(&self) -> Address {
        match self.get(&FantasyKey::Owner) {
            Some(FantasyValue::Owner(owner)) => *owner,
            _ => self.base.get_owner(),
        }
    }

    fn set_owner(&mut self, owner: &Address) -> FantasyResult<()> {
        self.set(FantasyKey::Owner, FantasyValue::Owner(*owner));
        Ok(())
    }

    fn get_collected_fees(&self) -> u64 {
        match self.get(&FantasyKey::CollectedFees) {
            Some(FantasyValue::CollectedFees(amount)) => *amount,
            _ => self.base.get_collected_fees(),
        }
    }

    fn set_collected_fees(&mut self, amount: u64) -> FantasyResult<()> {
        self.set(FantasyKey::CollectedFees, FantasyValue::CollectedFees(amount));
        Ok(())
    }

    fn emit_event(&mut self, event: FantasyEvent) {
        self.changes.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use primitive_types::U256;

    fn owner() -> Address {
        Address::new([1u8; 20])
    }

    #[test]
    fn test_reads_fall_through() {
        let mut base = MemoryStorage::new(owner());
        base.set_collected_fees(10).unwrap();
        base.set_pending_request(&U256::one(), 0).unwrap();

        let overlay = FantasyOverlay::new(&base);
        assert_eq!(overlay.get_owner(), owner());
        assert_eq!(overlay.get_collected_fees(), 10);
        assert_eq!(overlay.get_pending_request(&U256::one()), Some(0));
    }

    #[test]
    fn test_dropped_overlay_leaves_base_untouched() {
        let base = MemoryStorage::new(owner());
        {
            let mut overlay = FantasyOverlay::new(&base);
            overlay.set_collected_fees(99).unwrap();
            overlay
                .set_character(&CharacterToken::pending(0, owner(), U256::one()))
                .unwrap();
            assert_eq!(overlay.get_collected_fees(), 99);
            assert!(overlay.get_character(0).is_some());
        }
        assert_eq!(base.get_collected_fees(), 0);
        assert!(base.get_character(0).is_none());
    }

    #[test]
    fn test_apply_commits_writes_and_deletions() {
        let mut base = MemoryStorage::new(owner());
        base.set_pending_request(&U256::one(), 0).unwrap();

        let changes = {
            let mut overlay = FantasyOverlay::new(&base);
            overlay.delete_pending_request(&U256::one()).unwrap();
            overlay.set_next_token_id(3).unwrap();
            assert_eq!(overlay.get_pending_request(&U256::one()), None);
            overlay.emit_event(FantasyEvent::FeesWithdrawn {
                to: owner(),
                amount: 1,
            });
            overlay.into_changes()
        };
        assert!(!changes.is_empty());
        changes.apply(&mut base).unwrap();

        assert_eq!(base.get_pending_request(&U256::one()), None);
        assert_eq!(base.get_next_token_id(), 3);
        assert_eq!(base.events().len(), 1);
    }

    #[test]
    fn test_mismatched_change_rejected() {
        let mut base = MemoryStorage::new(owner());
        let mut changes = FantasyChanges::default();
        changes
            .changes
            .insert(FantasyKey::Owner, FantasyValue::Deleted);
        assert_eq!(changes.apply(&mut base), Err(FantasyError::StorageError));
    }
}
