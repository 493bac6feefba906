// Fantasy Operations Module
// This module contains the core business logic of the character contract.
//
// The operations are designed to be runtime-agnostic:
// - Storage operations are abstracted via traits
// - Runtime values (caller, attached payment) are passed as parameters
// - Every state-changing entry point runs through `execute` so a failed
//   invocation leaves no partial state behind

mod admin;
mod create;
mod fulfill;
mod query;

pub use admin::*;
pub use create::*;
pub use fulfill::*;
pub use query::*;

use log::warn;

use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::events::Receipt;
use crate::storage::{FantasyOverlay, FantasyStorage};

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing the caller and the attached payment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: Address,
    /// Amount sent along with the call
    pub value: u64,
}

impl RuntimeContext {
    pub fn new(caller: Address, value: u64) -> Self {
        Self { caller, value }
    }

    /// Context of a call without payment
    pub fn call(caller: Address) -> Self {
        Self::new(caller, 0)
    }
}

// ========================================
// Atomic Execution
// ========================================

/// Run `operation` on an overlay and commit its changes only on success
pub fn execute<S, T, F>(storage: &mut S, operation: F) -> FantasyResult<Receipt<T>>
where
    S: FantasyStorage + ?Sized,
    F: FnOnce(&mut FantasyOverlay<'_, S>) -> FantasyResult<T>,
{
    let (value, changes) = {
        let mut overlay = FantasyOverlay::new(&*storage);
        let value = operation(&mut overlay)?;
        (value, overlay.into_changes())
    };

    let events = changes.events.clone();
    changes.apply(storage)?;
    Ok(Receipt::new(value, events))
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Only the contract owner may administer modules and funds
pub fn check_owner<S: FantasyStorage + ?Sized>(
    storage: &S,
    ctx: &RuntimeContext,
) -> FantasyResult<()> {
    if storage.get_owner() != ctx.caller {
        warn!("Rejected admin call from {}", ctx.caller);
        return Err(FantasyError::Unauthorized);
    }
    Ok(())
}
