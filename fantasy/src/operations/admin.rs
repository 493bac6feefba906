// Administration Operations
// Race module management and contract ownership, restricted to the owner.

use log::info;

use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::events::FantasyEvent;
use crate::modules::ModuleResolver;
use crate::storage::FantasyStorage;

use super::{check_owner, RuntimeContext};

// ========================================
// Race Modules
// ========================================

/// Register the module deployed at `module_address` under its race name
///
/// # Returns
/// - `Ok(String)`: The registered race name
/// - `Err(FantasyError)`: `DuplicateRace` if the race already has a module
pub fn add_race_module<S, R>(
    storage: &mut S,
    modules: &R,
    ctx: &RuntimeContext,
    module_address: &Address,
) -> FantasyResult<String>
where
    S: FantasyStorage + ?Sized,
    R: ModuleResolver + ?Sized,
{
    check_owner(&*storage, ctx)?;
    let module = modules
        .resolve(module_address)
        .ok_or(FantasyError::ModuleNotDeployed)?;
    let race_name = module.race_name().to_string();

    let mut registry = storage.get_registry();
    registry.add(&race_name, *module_address)?;
    storage.set_registry(&registry)?;

    storage.emit_event(FantasyEvent::RaceModuleAdded {
        race_name: race_name.clone(),
        module: *module_address,
    });
    Ok(race_name)
}

/// Unregister a race
///
/// # Returns
/// - `Ok(Address)`: Address of the removed module
/// - `Err(FantasyError)`: `UnknownRace` if the race is not registered
pub fn remove_race_module<S>(
    storage: &mut S,
    ctx: &RuntimeContext,
    race_name: &str,
) -> FantasyResult<Address>
where
    S: FantasyStorage + ?Sized,
{
    check_owner(&*storage, ctx)?;
    let mut registry = storage.get_registry();
    let module = registry.remove(race_name)?;
    storage.set_registry(&registry)?;

    storage.emit_event(FantasyEvent::RaceModuleRemoved {
        race_name: race_name.to_string(),
        module,
    });
    Ok(module)
}

/// Replace the module of the race declared by the new module
///
/// # Returns
/// - `Ok(Address)`: Address of the replaced module
/// - `Err(FantasyError)`: `UnknownRace` if that race has no module yet
pub fn update_race_module<S, R>(
    storage: &mut S,
    modules: &R,
    ctx: &RuntimeContext,
    module_address: &Address,
) -> FantasyResult<Address>
where
    S: FantasyStorage + ?Sized,
    R: ModuleResolver + ?Sized,
{
    check_owner(&*storage, ctx)?;
    let module = modules
        .resolve(module_address)
        .ok_or(FantasyError::ModuleNotDeployed)?;
    let race_name = module.race_name().to_string();

    let mut registry = storage.get_registry();
    let previous = registry.update(&race_name, *module_address)?;
    storage.set_registry(&registry)?;

    storage.emit_event(FantasyEvent::RaceModuleUpdated {
        race_name,
        previous,
        module: *module_address,
    });
    Ok(previous)
}

// ========================================
// Ownership & Funds
// ========================================

pub fn transfer_ownership<S>(
    storage: &mut S,
    ctx: &RuntimeContext,
    new_owner: &Address,
) -> FantasyResult<()>
where
    S: FantasyStorage + ?Sized,
{
    check_owner(&*storage, ctx)?;
    if new_owner.is_zero() {
        return Err(FantasyError::InvalidAddress);
    }

    storage.set_owner(new_owner)?;
    info!("Ownership transferred from {} to {}", ctx.caller, new_owner);
    storage.emit_event(FantasyEvent::OwnershipTransferred {
        previous_owner: ctx.caller,
        new_owner: *new_owner,
    });
    Ok(())
}

/// Pay the collected artist fees out to the owner
pub fn withdraw<S>(storage: &mut S, ctx: &RuntimeContext) -> FantasyResult<u64>
where
    S: FantasyStorage + ?Sized,
{
    check_owner(&*storage, ctx)?;
    let amount = storage.get_collected_fees();
    if amount == 0 {
        return Err(FantasyError::NothingToWithdraw);
    }

    storage.set_collected_fees(0)?;
    info!("Withdrew {} to {}", amount, ctx.caller);
    storage.emit_event(FantasyEvent::FeesWithdrawn {
        to: ctx.caller,
        amount,
    });
    Ok(amount)
}
