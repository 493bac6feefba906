use crate::character::GeneratedCharacter;
use crate::error::FantasyResult;

use super::{generate_character, NameTables, RaceModule, RandomWords};

pub const DWARF_RACE_NAME: &str = "Dwarf";

// strength, endurance, dexterity, intellect, mind, charisma
const DWARF_MODIFIERS: [i8; 6] = [0, 2, -1, 0, 0, 0];

const DWARF_NAMES: NameTables = NameTables {
    male_first_names: &[
        "Balin", "Dorn", "Gimrak", "Harbek", "Korgan", "Rurik", "Thorin", "Vondal",
    ],
    female_first_names: &[
        "Annika", "Ansa", "Bardryn", "Dagnal", "Eldeth", "Gunnloda", "Helja", "Kathra",
    ],
    last_names: &[
        "Goldhorn",
        "Thunderhammer",
        "Ironfist",
        "Stonebeard",
        "Battlehammer",
        "Deepdelver",
        "Fireforge",
        "Rockseeker",
    ],
};

/// Dwarves are tougher and clumsier than the base roll
#[derive(Debug, Clone, Copy, Default)]
pub struct DwarfModule;

impl RaceModule for DwarfModule {
    fn race_name(&self) -> &str {
        DWARF_RACE_NAME
    }

    fn generate(&self, words: &RandomWords<'_>) -> FantasyResult<GeneratedCharacter> {
        generate_character(DWARF_RACE_NAME, &DWARF_NAMES, DWARF_MODIFIERS, words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterClass, Gender};
    use primitive_types::U256;

    fn generate(values: [u64; 11]) -> GeneratedCharacter {
        let words: Vec<U256> = values.iter().map(|v| U256::from(*v)).collect();
        let words = RandomWords::new(&words).unwrap();
        DwarfModule.generate(&words).unwrap()
    }

    #[test]
    fn test_annika_goldhorn() {
        let character = generate([1, 0, 1, 0, 0, 6, 4, 4, 12, 2, 9]);
        assert_eq!(character.first_name, "Annika");
        assert_eq!(character.last_name, "Goldhorn");
        assert_eq!(character.race, "Dwarf");
        assert_eq!(character.class, CharacterClass::Barbarian);
        assert_eq!(character.gender, Gender::Female);
        assert_eq!(character.abilities.to_array(), [9, 9, 6, 15, 5, 12]);
    }

    #[test]
    fn test_ansa_thunderhammer() {
        let character = generate([1, 12, 3, 1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(character.first_name, "Ansa");
        assert_eq!(character.last_name, "Thunderhammer");
        assert_eq!(character.class, CharacterClass::Barbarian);
        assert_eq!(character.level, 1);
        assert_eq!(character.gender, Gender::Female);
        // endurance gains 2, dexterity stays clamped at the minimum
        assert_eq!(character.abilities.to_array(), [3, 5, 3, 3, 3, 3]);
    }
}
