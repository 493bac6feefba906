// Race Module Registry
//
// Maps race names to the address of the module contract generating that
// race. Entries keep their insertion order: the race of a new character is
// selected by position, so removing an entry shifts the later ones down
// instead of swapping the last entry into the hole.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MAX_RACE_NAME_LENGTH;
use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRegistry {
    modules: IndexMap<String, Address>,
}

/// Validate a race name used as registry key
pub fn validate_race_name(race_name: &str) -> FantasyResult<()> {
    if race_name.is_empty() || race_name.len() > MAX_RACE_NAME_LENGTH {
        return Err(FantasyError::InvalidRaceName);
    }
    Ok(())
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new race
    pub fn add(&mut self, race_name: &str, module: Address) -> FantasyResult<()> {
        validate_race_name(race_name)?;
        if self.modules.contains_key(race_name) {
            return Err(FantasyError::DuplicateRace);
        }
        debug!("Registering race {} at {}", race_name, module);
        self.modules.insert(race_name.to_string(), module);
        Ok(())
    }

    /// Unregister a race and return the address it pointed to
    pub fn remove(&mut self, race_name: &str) -> FantasyResult<Address> {
        let address = self
            .modules
            .shift_remove(race_name)
            .ok_or(FantasyError::UnknownRace)?;
        debug!("Removed race {} (was {})", race_name, address);
        Ok(address)
    }

    /// Point an existing race to a new module, returning the previous address
    pub fn update(&mut self, race_name: &str, module: Address) -> FantasyResult<Address> {
        let slot = self
            .modules
            .get_mut(race_name)
            .ok_or(FantasyError::UnknownRace)?;
        let previous = std::mem::replace(slot, module);
        debug!("Updated race {}: {} -> {}", race_name, previous, module);
        Ok(previous)
    }

    pub fn lookup(&self, race_name: &str) -> FantasyResult<Address> {
        self.modules
            .get(race_name)
            .copied()
            .ok_or(FantasyError::UnknownRace)
    }

    pub fn contains(&self, race_name: &str) -> bool {
        self.modules.contains_key(race_name)
    }

    pub fn count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Entry at `index` in registration order
    pub fn race_at(&self, index: usize) -> FantasyResult<(&str, Address)> {
        self.modules
            .get_index(index)
            .map(|(name, address)| (name.as_str(), *address))
            .ok_or(FantasyError::UnknownRace)
    }

    pub fn race_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Address)> {
        self.modules
            .iter()
            .map(|(name, address)| (name.as_str(), *address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn address(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_add_then_lookup() {
        let mut registry = ModuleRegistry::new();
        registry.add("Human", address(1)).unwrap();
        registry.add("Dwarf", address(2)).unwrap();

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.lookup("Human"), Ok(address(1)));
        assert_eq!(registry.lookup("Dwarf"), Ok(address(2)));
    }

    #[test]
    fn test_add_duplicate_race() {
        let mut registry = ModuleRegistry::new();
        registry.add("Human", address(1)).unwrap();
        assert_eq!(
            registry.add("Human", address(3)),
            Err(FantasyError::DuplicateRace)
        );
        assert_eq!(registry.lookup("Human"), Ok(address(1)));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut registry = ModuleRegistry::new();
        assert_eq!(registry.remove("Human"), Err(FantasyError::UnknownRace));

        registry.add("Human", address(1)).unwrap();
        assert_eq!(registry.remove("Human"), Ok(address(1)));
        assert_eq!(registry.count(), 0);
        assert_eq!(registry.lookup("Human"), Err(FantasyError::UnknownRace));
    }

    #[test]
    fn test_update_keeps_slot() {
        let mut registry = ModuleRegistry::new();
        assert_eq!(
            registry.update("Human", address(1)),
            Err(FantasyError::UnknownRace)
        );

        registry.add("Human", address(1)).unwrap();
        registry.add("Dwarf", address(2)).unwrap();
        assert_eq!(registry.update("Human", address(3)), Ok(address(1)));

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.lookup("Human"), Ok(address(3)));
        assert_eq!(registry.lookup("Dwarf"), Ok(address(2)));
        assert_eq!(registry.race_at(0), Ok(("Human", address(3))));
    }

    #[test]
    fn test_removal_preserves_order() {
        let mut registry = ModuleRegistry::new();
        registry.add("Human", address(1)).unwrap();
        registry.add("Dwarf", address(2)).unwrap();
        registry.add("Elf", address(3)).unwrap();

        registry.remove("Human").unwrap();
        let names: Vec<&str> = registry.race_names().collect();
        assert_eq!(names, vec!["Dwarf", "Elf"]);
        assert_eq!(registry.race_at(1), Ok(("Elf", address(3))));
        assert_eq!(registry.race_at(2), Err(FantasyError::UnknownRace));
    }

    #[test]
    fn test_invalid_race_names() {
        let mut registry = ModuleRegistry::new();
        assert_eq!(registry.add("", address(1)), Err(FantasyError::InvalidRaceName));
        let long_name = "x".repeat(MAX_RACE_NAME_LENGTH + 1);
        assert_eq!(
            registry.add(&long_name, address(1)),
            Err(FantasyError::InvalidRaceName)
        );
        assert!(registry.is_empty());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add(u8, u8),
        Remove(u8),
        Update(u8, u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6, any::<u8>()).prop_map(|(race, addr)| Op::Add(race, addr)),
            (0u8..6).prop_map(Op::Remove),
            (0u8..6, any::<u8>()).prop_map(|(race, addr)| Op::Update(race, addr)),
        ]
    }

    proptest! {
        #[test]
        fn prop_count_matches_resolvable_names(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut registry = ModuleRegistry::new();
            let mut model: std::collections::HashMap<String, Address> = Default::default();

            for op in ops {
                match op {
                    Op::Add(race, addr) => {
                        let name = format!("Race{}", race);
                        let result = registry.add(&name, address(addr));
                        if model.contains_key(&name) {
                            prop_assert_eq!(result, Err(FantasyError::DuplicateRace));
                        } else {
                            prop_assert!(result.is_ok());
                            model.insert(name, address(addr));
                        }
                    }
                    Op::Remove(race) => {
                        let name = format!("Race{}", race);
                        let result = registry.remove(&name);
                        match model.remove(&name) {
                            Some(previous) => prop_assert_eq!(result, Ok(previous)),
                            None => prop_assert_eq!(result, Err(FantasyError::UnknownRace)),
                        }
                    }
                    Op::Update(race, addr) => {
                        let name = format!("Race{}", race);
                        let count_before = registry.count();
                        let result = registry.update(&name, address(addr));
                        match model.get_mut(&name) {
                            Some(slot) => {
                                prop_assert_eq!(result, Ok(*slot));
                                *slot = address(addr);
                            }
                            None => prop_assert_eq!(result, Err(FantasyError::UnknownRace)),
                        }
                        prop_assert_eq!(registry.count(), count_before);
                    }
                }

                prop_assert_eq!(registry.count(), model.len());
                for (name, addr) in &model {
                    prop_assert_eq!(registry.lookup(name), Ok(*addr));
                }
            }
        }
    }
}
