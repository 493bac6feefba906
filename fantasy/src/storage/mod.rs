// Contract Storage
//
// Operations are written against `FantasyStorage` so the same logic runs
// on the committed state and on the write overlay used for atomic
// invocations.

mod memory;
mod overlay;

pub use memory::*;
pub use overlay::*;

use crate::character::{CharacterToken, TokenId};
use crate::crypto::Address;
use crate::error::FantasyResult;
use crate::events::FantasyEvent;
use crate::oracle::RequestId;
use crate::registry::ModuleRegistry;

// ========================================
// Storage Trait (for dependency injection)
// ========================================

pub trait FantasyStorage {
    // Character operations
    fn get_character(&self, token_id: TokenId) -> Option<CharacterToken>;
    fn set_character(&mut self, character: &CharacterToken) -> FantasyResult<()>;
    fn get_next_token_id(&self) -> TokenId;
    fn set_next_token_id(&mut self, token_id: TokenId) -> FantasyResult<()>;

    // Balance operations
    fn get_balance(&self, owner: &Address) -> u64;
    fn set_balance(&mut self, owner: &Address, balance: u64) -> FantasyResult<()>;

    // Pending oracle requests
    fn get_pending_request(&self, request_id: &RequestId) -> Option<TokenId>;
    fn set_pending_request(&mut self, request_id: &RequestId, token_id: TokenId)
        -> FantasyResult<()>;
    fn delete_pending_request(&mut self, request_id: &RequestId) -> FantasyResult<()>;

    // Race module registry
    fn get_registry(&self) -> ModuleRegistry;
    fn set_registry(&mut self, registry: &ModuleRegistry) -> FantasyResult<()>;

    // Administration
    fn get_owner(&self) -> Address;
    fn set_owner(&mut self, owner: &Address) -> FantasyResult<()>;
    fn get_collected_fees(&self) -> u64;
    fn set_collected_fees(&mut self, amount: u64) -> FantasyResult<()>;

    // Event log
    fn emit_event(&mut self, event: FantasyEvent);
}
