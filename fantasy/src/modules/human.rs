use crate::character::GeneratedCharacter;
use crate::error::FantasyResult;

use super::{generate_character, NameTables, RaceModule, RandomWords};

pub const HUMAN_RACE_NAME: &str = "Human";

const HUMAN_NAMES: NameTables = NameTables {
    male_first_names: &[
        "Marcel", "Aldric", "Bertram", "Cedric", "Edmund", "Gareth", "Roland", "Tristan",
    ],
    female_first_names: &[
        "Adela", "Brienne", "Catrin", "Elise", "Isolde", "Maren", "Rowena", "Sabine",
    ],
    last_names: &[
        "McSword",
        "Ashford",
        "Blackwood",
        "Fairweather",
        "Holloway",
        "Redmane",
        "Stormrider",
        "Whitmore",
    ],
};

/// Humans roll their abilities without racial adjustment
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanModule;

impl RaceModule for HumanModule {
    fn race_name(&self) -> &str {
        HUMAN_RACE_NAME
    }

    fn generate(&self, words: &RandomWords<'_>) -> FantasyResult<GeneratedCharacter> {
        generate_character(HUMAN_RACE_NAME, &HUMAN_NAMES, [0; 6], words)
    }
}
