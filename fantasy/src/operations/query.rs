// Query Operations
// This module contains read-only query functions.

use crate::character::{CharacterOverview, CharacterToken, TokenId};
use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::oracle::RequestId;
use crate::storage::FantasyStorage;

// ========================================
// Token Queries
// ========================================

/// Get the owner of a character
pub fn owner_of<S: FantasyStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> FantasyResult<Address> {
    get_character(storage, token_id).map(|token| token.owner)
}

/// Number of characters owned by `owner`, pending ones included
pub fn balance_of<S: FantasyStorage + ?Sized>(storage: &S, owner: &Address) -> u64 {
    storage.get_balance(owner)
}

/// Number of minted characters
pub fn total_supply<S: FantasyStorage + ?Sized>(storage: &S) -> u64 {
    storage.get_next_token_id()
}

/// Whether the character still waits for its randomness
///
/// Unminted tokens are reported as not pending.
pub fn is_pending_character<S: FantasyStorage + ?Sized>(storage: &S, token_id: TokenId) -> bool {
    storage
        .get_character(token_id)
        .map(|token| token.is_pending())
        .unwrap_or(false)
}

/// Oracle request issued for a character
pub fn request_id_by_token_id<S: FantasyStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> FantasyResult<RequestId> {
    get_character(storage, token_id).map(|token| token.request_id)
}

pub fn get_character<S: FantasyStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> FantasyResult<CharacterToken> {
    storage
        .get_character(token_id)
        .ok_or(FantasyError::TokenNotFound)
}

/// Names, race, class, level and gender of a finalized character
pub fn get_character_overview<S: FantasyStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> FantasyResult<CharacterOverview> {
    get_character(storage, token_id)?.overview()
}

// ========================================
// Registry Queries
// ========================================

pub fn get_race_modules_count<S: FantasyStorage + ?Sized>(storage: &S) -> usize {
    storage.get_registry().count()
}

pub fn get_race_module_address<S: FantasyStorage + ?Sized>(
    storage: &S,
    race_name: &str,
) -> FantasyResult<Address> {
    storage.get_registry().lookup(race_name)
}
