// Race Modules
//
// A race module is a separately deployed contract that turns random words
// into race-specific traits. The character contract only knows modules by
// address and resolves them through a `ModuleResolver` at call time.

mod dwarf;
mod human;
mod words;

pub use dwarf::*;
pub use human::*;
pub use words::*;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use log::debug;

use crate::character::{GeneratedCharacter, Gender};
use crate::config::CHARACTER_START_LEVEL;
use crate::crypto::{compute_contract_address, Address};
use crate::error::{FantasyError, FantasyResult};

// ========================================
// Module Interface
// ========================================

pub trait RaceModule: Send + Sync {
    /// Race this module generates, used as registry key
    fn race_name(&self) -> &str;

    /// Derive a full character from the oracle words
    fn generate(&self, words: &RandomWords<'_>) -> FantasyResult<GeneratedCharacter>;
}

impl fmt::Debug for dyn RaceModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RaceModule({})", self.race_name())
    }
}

/// Name pools of a race
pub struct NameTables {
    pub male_first_names: &'static [&'static str],
    pub female_first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
}

impl NameTables {
    fn first_names(&self, gender: Gender) -> &'static [&'static str] {
        match gender {
            Gender::Male => self.male_first_names,
            Gender::Female => self.female_first_names,
        }
    }
}

/// Generation shared by the built-in races: common class, gender and
/// ability rolls, then race names and ability modifiers
pub fn generate_character(
    race_name: &str,
    names: &NameTables,
    ability_modifiers: [i8; 6],
    words: &RandomWords<'_>,
) -> FantasyResult<GeneratedCharacter> {
    let gender = words.gender();
    let first_names = names.first_names(gender);
    let first_name = words
        .pick(WordSlot::FirstName, first_names.len())
        .map(|index| first_names[index])
        .ok_or(FantasyError::Internal)?;
    let last_name = words
        .pick(WordSlot::LastName, names.last_names.len())
        .map(|index| names.last_names[index])
        .ok_or(FantasyError::Internal)?;

    Ok(GeneratedCharacter {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        race: race_name.to_string(),
        class: words.class(),
        level: CHARACTER_START_LEVEL,
        abilities: words.base_abilities().with_modifiers(ability_modifiers),
        gender,
    })
}

// ========================================
// Deployed Modules
// ========================================

/// Resolves a module contract from its address
pub trait ModuleResolver {
    fn resolve(&self, address: &Address) -> Option<Arc<dyn RaceModule>>;
}

#[derive(Default)]
struct DeploymentsState {
    modules: HashMap<Address, Arc<dyn RaceModule>>,
    nonces: HashMap<Address, u64>,
}

/// Table of module contracts deployed on the chain
#[derive(Default)]
pub struct ModuleDeployments {
    state: Mutex<DeploymentsState>,
}

impl ModuleDeployments {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DeploymentsState) -> R,
    {
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut state)
    }

    /// Deploy a module and return its contract address
    pub fn deploy(&self, deployer: &Address, module: Arc<dyn RaceModule>) -> Address {
        self.with_state(|state| {
            let nonce = state.nonces.entry(*deployer).or_insert(0);
            let address = compute_contract_address(deployer, *nonce);
            *nonce += 1;
            debug!(
                "Deployed {} module at {} (deployer {})",
                module.race_name(),
                address,
                deployer
            );
            state.modules.insert(address, module);
            address
        })
    }

    pub fn len(&self) -> usize {
        self.with_state(|state| state.modules.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModuleResolver for ModuleDeployments {
    fn resolve(&self, address: &Address) -> Option<Arc<dyn RaceModule>> {
        self.with_state(|state| state.modules.get(address).cloned())
    }
}
