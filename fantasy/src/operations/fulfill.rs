// Randomness Fulfillment
// Second half of the generation flow: the oracle delivers the words and
// the matching race module turns them into traits.

use log::{info, warn};
use primitive_types::U256;

use crate::character::TokenId;
use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::events::FantasyEvent;
use crate::modules::{ModuleResolver, RandomWords};
use crate::oracle::RequestId;
use crate::storage::FantasyStorage;

use super::RuntimeContext;

/// Finalize the character waiting on `request_id`
///
/// # Parameters
/// - `storage`: Storage backend
/// - `modules`: Resolver for deployed race modules
/// - `ctx`: Runtime context, the caller must be the oracle
/// - `oracle`: Address of the randomness oracle
/// - `request_id`: Request being answered
/// - `words`: Random words delivered by the oracle
///
/// # Returns
/// - `Ok(TokenId)`: The finalized token
/// - `Err(FantasyError)`: Error code
pub fn fulfill_random_words<S, R>(
    storage: &mut S,
    modules: &R,
    ctx: &RuntimeContext,
    oracle: &Address,
    request_id: &RequestId,
    words: &[U256],
) -> FantasyResult<TokenId>
where
    S: FantasyStorage + ?Sized,
    R: ModuleResolver + ?Sized,
{
    // Step 1: Only the oracle can fulfill
    if ctx.caller != *oracle {
        warn!(
            "Rejected fulfillment of request {} from {}",
            request_id, ctx.caller
        );
        return Err(FantasyError::Unauthorized);
    }

    // Step 2: Resolve the pending token
    let token_id = storage.get_pending_request(request_id).ok_or_else(|| {
        warn!("Fulfillment for unknown request {}", request_id);
        FantasyError::UnknownRequest
    })?;
    let mut token = storage
        .get_character(token_id)
        .ok_or(FantasyError::TokenNotFound)?;
    if !token.is_pending() {
        return Err(FantasyError::AlreadyFinalized);
    }

    // Step 3: Select the race module
    let words = RandomWords::new(words)?;
    let registry = storage.get_registry();
    let index = words
        .race_index(registry.count())
        .ok_or(FantasyError::UnknownRace)?;
    let (race_name, module_address) = registry.race_at(index)?;
    let module = modules
        .resolve(&module_address)
        .ok_or(FantasyError::ModuleNotDeployed)?;

    // Step 4: Generate and write the traits
    let traits = module.generate(&words)?;
    info!(
        "Character {} generated: {} {} ({}, {:?})",
        token_id, traits.first_name, traits.last_name, race_name, traits.class
    );
    let race = traits.race.clone();
    token.finalize(traits)?;
    storage.set_character(&token)?;

    // Step 5: Clear the request
    storage.delete_pending_request(request_id)?;
    storage.emit_event(FantasyEvent::CharacterGenerated {
        token_id,
        owner: token.owner,
        race,
    });

    Ok(token_id)
}
