// Random Words Layout
// Each character consumes a fixed number of oracle words, one per trait.

use primitive_types::U256;

use crate::character::{AbilityScores, CharacterClass, Gender, MIN_ABILITY_SCORE};
use crate::config::RANDOM_WORDS_COUNT;
use crate::error::{FantasyError, FantasyResult};

/// Distinct values a single ability roll can take (3..=18)
const ABILITY_ROLL_RANGE: u64 = 16;

/// Position of each trait inside the word list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum WordSlot {
    Race = 0,
    Class = 1,
    Gender = 2,
    FirstName = 3,
    LastName = 4,
    Strength = 5,
    Endurance = 6,
    Dexterity = 7,
    Intellect = 8,
    Mind = 9,
    Charisma = 10,
}

impl WordSlot {
    pub const ABILITIES: [WordSlot; 6] = [
        WordSlot::Strength,
        WordSlot::Endurance,
        WordSlot::Dexterity,
        WordSlot::Intellect,
        WordSlot::Mind,
        WordSlot::Charisma,
    ];
}

/// Validated view over the words delivered by the oracle
#[derive(Clone, Copy, Debug)]
pub struct RandomWords<'a> {
    words: &'a [U256],
}

impl<'a> RandomWords<'a> {
    pub fn new(words: &'a [U256]) -> FantasyResult<Self> {
        if words.len() < RANDOM_WORDS_COUNT as usize {
            return Err(FantasyError::InsufficientRandomWords);
        }
        Ok(Self { words })
    }

    pub fn word(&self, slot: WordSlot) -> U256 {
        self.words[slot as usize]
    }

    /// Reduce the slot's word to an index in `0..len`
    pub fn pick(&self, slot: WordSlot, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = self.word(slot) % U256::from(len as u64);
        Some(index.low_u64() as usize)
    }

    /// Index of the race among `count` registered modules
    pub fn race_index(&self, count: usize) -> Option<usize> {
        self.pick(WordSlot::Race, count)
    }

    pub fn class(&self) -> CharacterClass {
        let index = self
            .pick(WordSlot::Class, CharacterClass::ALL.len())
            .unwrap_or_default();
        CharacterClass::ALL[index]
    }

    pub fn gender(&self) -> Gender {
        let index = self
            .pick(WordSlot::Gender, Gender::ALL.len())
            .unwrap_or_default();
        Gender::ALL[index]
    }

    /// Unmodified ability scores, each in 3..=18
    pub fn base_abilities(&self) -> AbilityScores {
        let mut values = [0u8; 6];
        for (value, slot) in values.iter_mut().zip(WordSlot::ABILITIES) {
            let roll = self.word(slot) % U256::from(ABILITY_ROLL_RANGE);
            *value = MIN_ABILITY_SCORE + roll.low_u64() as u8;
        }
        AbilityScores::from_array(values)
    }
}
