// Character Creation
// First half of the generation flow: mint a pending token and ask the
// oracle for randomness.

use log::debug;

use crate::character::{CharacterToken, TokenId};
use crate::config::FantasyConfig;
use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::events::FantasyEvent;
use crate::oracle::{RandomWordsRequest, RandomnessOracle};
use crate::storage::FantasyStorage;

use super::RuntimeContext;

/// Start the generation of a character for the caller
///
/// # Parameters
/// - `storage`: Storage backend
/// - `oracle`: Randomness oracle receiving the request
/// - `ctx`: Runtime context, `ctx.value` is the payment
/// - `config`: Fee and oracle request parameters
/// - `contract`: Address of this contract, the oracle consumer
///
/// # Returns
/// - `Ok(TokenId)`: The new, pending token
/// - `Err(FantasyError)`: Error code
pub fn create_character<S, O>(
    storage: &mut S,
    oracle: &mut O,
    ctx: &RuntimeContext,
    config: &FantasyConfig,
    contract: &Address,
) -> FantasyResult<TokenId>
where
    S: FantasyStorage + ?Sized,
    O: RandomnessOracle + ?Sized,
{
    // Step 1: Check payment
    if ctx.value < config.artist_fee {
        return Err(FantasyError::InsufficientPayment);
    }

    // Step 2: Allocate token ID and account for the payment
    let token_id = storage.get_next_token_id();
    let next_token_id = token_id.checked_add(1).ok_or(FantasyError::Overflow)?;
    let balance = storage
        .get_balance(&ctx.caller)
        .checked_add(1)
        .ok_or(FantasyError::Overflow)?;
    let collected_fees = storage
        .get_collected_fees()
        .checked_add(ctx.value)
        .ok_or(FantasyError::Overflow)?;

    // Step 3: Request randomness
    let request = RandomWordsRequest::from(config);
    let request_id = oracle.request_random_words(contract, &request)?;
    if storage.get_pending_request(&request_id).is_some() {
        return Err(FantasyError::DuplicateRequest);
    }

    // Step 4: Mint pending token
    let token = CharacterToken::pending(token_id, ctx.caller, request_id);
    storage.set_character(&token)?;
    storage.set_next_token_id(next_token_id)?;
    storage.set_balance(&ctx.caller, balance)?;
    storage.set_collected_fees(collected_fees)?;
    storage.set_pending_request(&request_id, token_id)?;

    debug!(
        "Character {} pending for {} (request {})",
        token_id, ctx.caller, request_id
    );
    storage.emit_event(FantasyEvent::CharacterGenerationStarted {
        token_id,
        started_by: ctx.caller,
        request_id,
    });

    Ok(token_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ARTIST_FEE;
    use crate::oracle::MockVrfCoordinator;
    use crate::storage::MemoryStorage;
    use primitive_types::U256;

    fn setup() -> (MemoryStorage, MockVrfCoordinator, Address) {
        let owner = Address::new([1u8; 20]);
        (
            MemoryStorage::new(owner),
            MockVrfCoordinator::new(Address::new([0xcc; 20])),
            Address::new([0xfa; 20]),
        )
    }

    #[test]
    fn test_create_character_mints_pending_token() {
        let (mut storage, mut oracle, contract) = setup();
        let player = Address::new([2u8; 20]);
        let ctx = RuntimeContext::new(player, ARTIST_FEE);

        let token_id = create_character(
            &mut storage,
            &mut oracle,
            &ctx,
            &FantasyConfig::default(),
            &contract,
        )
        .unwrap();

        assert_eq!(token_id, 0);
        let token = storage.get_character(0).unwrap();
        assert!(token.is_pending());
        assert_eq!(token.owner, player);
        assert_eq!(token.request_id, U256::one());
        assert_eq!(storage.get_pending_request(&U256::one()), Some(0));
        assert_eq!(storage.get_balance(&player), 1);
        assert_eq!(storage.get_collected_fees(), ARTIST_FEE);
        assert_eq!(storage.get_next_token_id(), 1);
        assert!(oracle.is_pending(&U256::one()));
    }

    #[test]
    fn test_create_character_requires_fee() {
        let (mut storage, mut oracle, contract) = setup();
        let ctx = RuntimeContext::new(Address::new([2u8; 20]), ARTIST_FEE - 1);

        let result = create_character(
            &mut storage,
            &mut oracle,
            &ctx,
            &FantasyConfig::default(),
            &contract,
        );
        assert_eq!(result, Err(FantasyError::InsufficientPayment));
        assert!(storage.get_character(0).is_none());
        assert_eq!(oracle.pending_count(), 0);
    }
}
