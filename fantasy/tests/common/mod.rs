#![allow(dead_code)]

use std::sync::Arc;

use fantasy::character::GeneratedCharacter;
use fantasy::config::ARTIST_FEE;
use fantasy::modules::{
    generate_character, DwarfModule, HumanModule, ModuleDeployments, NameTables, RaceModule,
    RandomWords, HUMAN_RACE_NAME,
};
use fantasy::{
    Address, Fantasy, FantasyConfig, FantasyResult, MockVrfCoordinator, Receipt, RequestId,
    RuntimeContext, TokenId,
};
use primitive_types::U256;

pub type TestFantasy = Fantasy<MockVrfCoordinator>;

pub const FANTASY_ADDRESS: Address = Address::new([0xfa; 20]);
pub const COORDINATOR_ADDRESS: Address = Address::new([0xcc; 20]);

/// Local accounts, the first one deploys everything
pub fn accounts() -> Vec<Address> {
    (1..=5u8).map(|i| Address::new([i; 20])).collect()
}

pub fn deployer() -> Address {
    accounts()[0]
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Deployment {
    pub fantasy: TestFantasy,
    pub deployments: Arc<ModuleDeployments>,
    pub human_module: Option<Address>,
    pub dwarf_module: Option<Address>,
}

/// Deploy the coordinator and the contract, optionally registering the
/// Human and Dwarf modules in that order
pub fn deploy_fantasy_with_dependencies(with_modules: bool) -> Deployment {
    init_logger();
    let deployments = Arc::new(ModuleDeployments::new());
    let fantasy = Fantasy::deploy(
        deployer(),
        FANTASY_ADDRESS,
        FantasyConfig::default(),
        MockVrfCoordinator::new(COORDINATOR_ADDRESS),
        deployments.clone(),
    )
    .unwrap();

    let mut deployment = Deployment {
        fantasy,
        deployments,
        human_module: None,
        dwarf_module: None,
    };
    if with_modules {
        deployment.human_module = Some(deployment.deploy_and_add(Arc::new(HumanModule)));
        deployment.dwarf_module = Some(deployment.deploy_and_add(Arc::new(DwarfModule)));
    }
    deployment
}

impl Deployment {
    /// Deploy a module without registering it
    pub fn deploy_module(&self, module: Arc<dyn RaceModule>) -> Address {
        self.deployments.deploy(&deployer(), module)
    }

    pub fn deploy_and_add(&mut self, module: Arc<dyn RaceModule>) -> Address {
        let address = self.deploy_module(module);
        self.fantasy
            .add_race_module(&RuntimeContext::call(deployer()), &address)
            .unwrap();
        address
    }

    pub fn create_character(&mut self, account: Address) -> FantasyResult<Receipt<TokenId>> {
        self.fantasy
            .create_character(&RuntimeContext::new(account, ARTIST_FEE))
    }

    /// Answer the request of `token_id` with the coordinator's default words
    pub fn fulfill(&mut self, token_id: TokenId) -> FantasyResult<Receipt<TokenId>> {
        let request_id = self.fantasy.request_id_by_token_id(token_id)?;
        let fulfillment = self
            .fantasy
            .oracle_mut()
            .fulfill_random_words(&request_id)?;
        self.fantasy
            .raw_fulfill_random_words(&RuntimeContext::call(COORDINATOR_ADDRESS), &fulfillment)
    }

    /// Answer the request of `token_id` with chosen words
    pub fn fulfill_with(
        &mut self,
        token_id: TokenId,
        words: [u64; 11],
    ) -> FantasyResult<Receipt<TokenId>> {
        let request_id: RequestId = self.fantasy.request_id_by_token_id(token_id)?;
        let words = words.iter().map(|w| U256::from(*w)).collect();
        let fulfillment = self
            .fantasy
            .oracle_mut()
            .fulfill_random_words_with_override(&request_id, words)?;
        self.fantasy
            .raw_fulfill_random_words(&RuntimeContext::call(COORDINATOR_ADDRESS), &fulfillment)
    }

    /// Mint and finalize a character in one go
    pub fn create_character_and_finish_generation(
        &mut self,
        account: Address,
        words: [u64; 11],
    ) -> TokenId {
        let token_id = self.create_character(account).unwrap().value;
        self.fulfill_with(token_id, words).unwrap();
        token_id
    }
}

const MOCK_HUMAN_NAMES: NameTables = NameTables {
    male_first_names: &["Mock"],
    female_first_names: &["Mockette"],
    last_names: &["Testborn"],
};

/// Second implementation of the Human race, used to replace the real one
pub struct MockHumanModule;

impl RaceModule for MockHumanModule {
    fn race_name(&self) -> &str {
        HUMAN_RACE_NAME
    }

    fn generate(&self, words: &RandomWords<'_>) -> FantasyResult<GeneratedCharacter> {
        generate_character(HUMAN_RACE_NAME, &MOCK_HUMAN_NAMES, [0; 6], words)
    }
}
