pub mod character;
pub mod config;
pub mod contract;
pub mod crypto;
pub mod error;
pub mod events;
pub mod modules;
pub mod operations;
pub mod oracle;
pub mod registry;
pub mod storage;

pub use character::{CharacterOverview, CharacterToken, GeneratedCharacter, TokenId};
pub use config::FantasyConfig;
pub use contract::Fantasy;
pub use crypto::{Address, Hash};
pub use error::{FantasyError, FantasyResult};
pub use events::{FantasyEvent, Receipt};
pub use operations::RuntimeContext;
pub use oracle::{MockVrfCoordinator, RandomWordsFulfillment, RandomnessOracle, RequestId};
