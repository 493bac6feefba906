// Fantasy Contract
//
// Entry points of the deployed character contract. State-changing calls
// are executed atomically and return a receipt with their events; queries
// read the committed state.

use std::sync::Arc;

use log::{debug, warn};

use crate::character::{CharacterOverview, CharacterToken, TokenId};
use crate::config::FantasyConfig;
use crate::crypto::Address;
use crate::error::{FantasyError, FantasyResult};
use crate::events::Receipt;
use crate::modules::ModuleResolver;
use crate::operations::{self, execute, RuntimeContext};
use crate::oracle::{RandomWordsFulfillment, RandomnessOracle, RequestId};
use crate::storage::{FantasyStorage, MemoryStorage};

pub struct Fantasy<O, S = MemoryStorage>
where
    O: RandomnessOracle,
    S: FantasyStorage,
{
    address: Address,
    config: FantasyConfig,
    storage: S,
    oracle: O,
    modules: Arc<dyn ModuleResolver + Send + Sync>,
}

impl<O: RandomnessOracle> Fantasy<O, MemoryStorage> {
    /// Deploy a contract owned by `deployer` with empty state
    pub fn deploy(
        deployer: Address,
        address: Address,
        config: FantasyConfig,
        oracle: O,
        modules: Arc<dyn ModuleResolver + Send + Sync>,
    ) -> FantasyResult<Self> {
        Self::with_storage(
            address,
            config,
            MemoryStorage::new(deployer),
            oracle,
            modules,
        )
    }
}

impl<O, S> Fantasy<O, S>
where
    O: RandomnessOracle,
    S: FantasyStorage,
{
    pub fn with_storage(
        address: Address,
        config: FantasyConfig,
        storage: S,
        oracle: O,
        modules: Arc<dyn ModuleResolver + Send + Sync>,
    ) -> FantasyResult<Self> {
        config.validate()?;
        debug!(
            "Fantasy contract at {} (owner {}, artist fee {})",
            address,
            storage.get_owner(),
            config.artist_fee
        );
        Ok(Self {
            address,
            config,
            storage,
            oracle,
            modules,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn config(&self) -> &FantasyConfig {
        &self.config
    }

    pub fn artist_fee(&self) -> u64 {
        self.config.artist_fee
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    // ========================================
    // Character generation
    // ========================================

    pub fn create_character(&mut self, ctx: &RuntimeContext) -> FantasyResult<Receipt<TokenId>> {
        let oracle = &mut self.oracle;
        let config = &self.config;
        let address = &self.address;
        execute(&mut self.storage, |storage| {
            operations::create_character(storage, oracle, ctx, config, address)
        })
    }

    /// Callback entry point of the randomness oracle
    pub fn raw_fulfill_random_words(
        &mut self,
        ctx: &RuntimeContext,
        fulfillment: &RandomWordsFulfillment,
    ) -> FantasyResult<Receipt<TokenId>> {
        if fulfillment.consumer != self.address {
            warn!(
                "Fulfillment of request {} addressed to {}",
                fulfillment.request_id, fulfillment.consumer
            );
            return Err(FantasyError::UnknownRequest);
        }

        let oracle = self.oracle.address();
        let modules = self.modules.as_ref();
        execute(&mut self.storage, |storage| {
            operations::fulfill_random_words(
                storage,
                modules,
                ctx,
                &oracle,
                &fulfillment.request_id,
                &fulfillment.words,
            )
        })
    }

    // ========================================
    // Administration
    // ========================================

    pub fn add_race_module(
        &mut self,
        ctx: &RuntimeContext,
        module_address: &Address,
    ) -> FantasyResult<Receipt<String>> {
        let modules = self.modules.as_ref();
        execute(&mut self.storage, |storage| {
            operations::add_race_module(storage, modules, ctx, module_address)
        })
    }

    pub fn remove_race_module(
        &mut self,
        ctx: &RuntimeContext,
        race_name: &str,
    ) -> FantasyResult<Receipt<Address>> {
        execute(&mut self.storage, |storage| {
            operations::remove_race_module(storage, ctx, race_name)
        })
    }

    pub fn update_race_module(
        &mut self,
        ctx: &RuntimeContext,
        module_address: &Address,
    ) -> FantasyResult<Receipt<Address>> {
        let modules = self.modules.as_ref();
        execute(&mut self.storage, |storage| {
            operations::update_race_module(storage, modules, ctx, module_address)
        })
    }

    pub fn transfer_ownership(
        &mut self,
        ctx: &RuntimeContext,
        new_owner: &Address,
    ) -> FantasyResult<Receipt<()>> {
        execute(&mut self.storage, |storage| {
            operations::transfer_ownership(storage, ctx, new_owner)
        })
    }

    pub fn withdraw(&mut self, ctx: &RuntimeContext) -> FantasyResult<Receipt<u64>> {
        execute(&mut self.storage, |storage| operations::withdraw(storage, ctx))
    }

    // ========================================
    // Queries
    // ========================================

    pub fn owner(&self) -> Address {
        self.storage.get_owner()
    }

    pub fn collected_fees(&self) -> u64 {
        self.storage.get_collected_fees()
    }

    pub fn owner_of(&self, token_id: TokenId) -> FantasyResult<Address> {
        operations::owner_of(&self.storage, token_id)
    }

    pub fn balance_of(&self, owner: &Address) -> u64 {
        operations::balance_of(&self.storage, owner)
    }

    pub fn total_supply(&self) -> u64 {
        operations::total_supply(&self.storage)
    }

    pub fn is_pending_character(&self, token_id: TokenId) -> bool {
        operations::is_pending_character(&self.storage, token_id)
    }

    pub fn request_id_by_token_id(&self, token_id: TokenId) -> FantasyResult<RequestId> {
        operations::request_id_by_token_id(&self.storage, token_id)
    }

    pub fn get_character(&self, token_id: TokenId) -> FantasyResult<CharacterToken> {
        operations::get_character(&self.storage, token_id)
    }

    pub fn get_character_overview(&self, token_id: TokenId) -> FantasyResult<CharacterOverview> {
        operations::get_character_overview(&self.storage, token_id)
    }

    pub fn get_race_modules_count(&self) -> usize {
        operations::get_race_modules_count(&self.storage)
    }

    pub fn get_race_module_address(&self, race_name: &str) -> FantasyResult<Address> {
        operations::get_race_module_address(&self.storage, race_name)
    }
}
