// Character Types
// On-chain representation of a minted character and its generated traits.

use serde::{Deserialize, Serialize};

use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::oracle::RequestId;

/// Sequential token identifier, first token is 0
pub type TokenId = u64;

// ========================================
// Class & Gender
// ========================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CharacterClass {
    Barbarian = 0,
    Bard = 1,
    Cleric = 2,
    Druid = 3,
    Fighter = 4,
    Monk = 5,
    Paladin = 6,
    Ranger = 7,
    Rogue = 8,
    Sorcerer = 9,
    Warlock = 10,
    Wizard = 11,
}

impl CharacterClass {
    /// All classes in discriminant order
    pub const ALL: [CharacterClass; 12] = [
        CharacterClass::Barbarian,
        CharacterClass::Bard,
        CharacterClass::Cleric,
        CharacterClass::Druid,
        CharacterClass::Fighter,
        CharacterClass::Monk,
        CharacterClass::Paladin,
        CharacterClass::Ranger,
        CharacterClass::Rogue,
        CharacterClass::Sorcerer,
        CharacterClass::Warlock,
        CharacterClass::Wizard,
    ];

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Gender {
    Male = 0,
    Female = 1,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn id(&self) -> u8 {
        *self as u8
    }
}

// ========================================
// Ability Scores
// ========================================

/// Lowest possible ability score
pub const MIN_ABILITY_SCORE: u8 = 3;

/// Highest possible ability score
pub const MAX_ABILITY_SCORE: u8 = 18;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub endurance: u8,
    pub dexterity: u8,
    pub intellect: u8,
    pub mind: u8,
    pub charisma: u8,
}

impl AbilityScores {
    pub fn from_array(values: [u8; 6]) -> Self {
        let [strength, endurance, dexterity, intellect, mind, charisma] = values;
        Self {
            strength,
            endurance,
            dexterity,
            intellect,
            mind,
            charisma,
        }
    }

    pub fn to_array(self) -> [u8; 6] {
        [
            self.strength,
            self.endurance,
            self.dexterity,
            self.intellect,
            self.mind,
            self.charisma,
        ]
    }

    /// Apply signed per-ability modifiers, clamped to the legal score range
    pub fn with_modifiers(self, modifiers: [i8; 6]) -> Self {
        let mut values = self.to_array();
        for (value, modifier) in values.iter_mut().zip(modifiers) {
            let adjusted = (*value as i16 + modifier as i16)
                .clamp(MIN_ABILITY_SCORE as i16, MAX_ABILITY_SCORE as i16);
            *value = adjusted as u8;
        }
        Self::from_array(values)
    }
}

// ========================================
// Generated Traits
// ========================================

/// Everything a race module derives from a set of random words
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCharacter {
    pub first_name: String,
    pub last_name: String,
    pub race: String,
    pub class: CharacterClass,
    pub level: u8,
    pub abilities: AbilityScores,
    pub gender: Gender,
}

// ========================================
// Character Token
// ========================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterState {
    /// Minted, waiting for the oracle
    Pending,
    /// Traits written, terminal
    Finalized(GeneratedCharacter),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterToken {
    pub token_id: TokenId,
    pub owner: Address,
    pub request_id: RequestId,
    pub state: CharacterState,
}

impl CharacterToken {
    /// Create a freshly minted token awaiting randomness
    pub fn pending(token_id: TokenId, owner: Address, request_id: RequestId) -> Self {
        Self {
            token_id,
            owner,
            request_id,
            state: CharacterState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, CharacterState::Pending)
    }

    pub fn traits(&self) -> Option<&GeneratedCharacter> {
        match &self.state {
            CharacterState::Pending => None,
            CharacterState::Finalized(traits) => Some(traits),
        }
    }

    /// Write the generated traits; a token is finalized exactly once
    pub fn finalize(&mut self, traits: GeneratedCharacter) -> FantasyResult<()> {
        if !self.is_pending() {
            return Err(FantasyError::AlreadyFinalized);
        }
        self.state = CharacterState::Finalized(traits);
        Ok(())
    }

    pub fn overview(&self) -> FantasyResult<CharacterOverview> {
        let traits = self.traits().ok_or(FantasyError::TokenNotFound)?;
        Ok(CharacterOverview {
            first_name: traits.first_name.clone(),
            last_name: traits.last_name.clone(),
            race: traits.race.clone(),
            class: traits.class,
            level: traits.level,
            gender: traits.gender,
        })
    }
}

/// Short summary of a finalized character
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterOverview {
    pub first_name: String,
    pub last_name: String,
    pub race: String,
    pub class: CharacterClass,
    pub level: u8,
    pub gender: Gender,
}
