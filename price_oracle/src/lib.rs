#![no_std]

multiversx_sc::imports!();

pub mod engine;
pub mod resolvers;
pub mod settings;
pub mod sources;
pub mod storage;
pub mod views;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait PriceOracle:
    storage::Storage
    + sources::SourceRegistryModule
    + settings::SettingsModule
    + engine::EngineModule
    + views::ViewsModule
    + resolvers::feed::FeedResolverModule
    + resolvers::twap::TwapResolverModule
    + resolvers::extension::ExtensionResolverModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Initializes the oracle.
    ///
    /// # Arguments
    /// - `base_currency`: Unit of account every price is expressed in. Prices at `(1, 1, NoError)`.
    /// - `safe_price_view`: Contract answering time-window average queries for DEX pairs.
    #[init]
    fn init(
        &self,
        base_currency: EgldOrEsdtTokenIdentifier,
        safe_price_view: ManagedAddress,
    ) {
        require!(base_currency.is_valid(), ERROR_INVALID_BASE_CURRENCY);
        self.base_currency().set(&base_currency);
        self.set_safe_price_view(safe_price_view);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces the contract queried by time-window average sources.
    #[only_owner]
    #[endpoint(setSafePriceView)]
    fn set_safe_price_view(&self, safe_price_view: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&safe_price_view),
            ERROR_INVALID_SAFE_PRICE_VIEW
        );
        self.safe_price_view().set(&safe_price_view);
    }
}
