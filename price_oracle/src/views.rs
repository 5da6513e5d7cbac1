multiversx_sc::imports!();

use common_errors::ERROR_EXTENSION_NOT_APPROVED;
use common_structs::{EditProposal, PriceResult};

use crate::{engine, resolvers, settings, storage};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + engine::EngineModule
    + settings::SettingsModule
    + resolvers::feed::FeedResolverModule
    + resolvers::twap::TwapResolverModule
    + resolvers::extension::ExtensionResolverModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Price of one unit of `asset` in the base currency, as `(upper, lower, error_code)`.
    ///
    /// Data problems are reported through the error code, never as a failed call.
    /// Fails only for unregistered assets and misconfigured pricing cycles.
    #[view(getPrice)]
    fn get_price(&self, asset: EgldOrEsdtTokenIdentifier) -> PriceResult<Self::Api> {
        self.price_of(&asset, &ManagedVec::new())
    }

    /// Single conservative scalar: the lower bound, or the upper one when the lower bound is unknown.
    #[view(getConservativePrice)]
    fn get_conservative_price(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.price_of(&asset, &ManagedVec::new())
            .conservative_price()
    }

    #[view(getPrices)]
    fn get_prices(
        &self,
        assets: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> MultiValueEncoded<PriceResult<Self::Api>> {
        let mut prices = MultiValueEncoded::new();
        for asset in assets {
            prices.push(self.price_of(&asset, &ManagedVec::new()));
        }
        prices
    }

    /// Result of a single source, without reconciliation against a second one.
    #[view(resolveSource)]
    fn resolve_source_view(&self, source_id: u64) -> PriceResult<Self::Api> {
        let source = self.get_source(source_id);
        self.resolve_source(source_id, &ManagedVec::from_single_item(source.asset))
    }

    /// Entry point for approved extensions pricing their constituents.
    /// `pricing_path` must be the path the extension received from the engine.
    #[view(getPriceForExtension)]
    fn get_price_for_extension(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        pricing_path: ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        let caller = self.blockchain().get_caller();
        require!(
            self.extensions().contains(&caller),
            ERROR_EXTENSION_NOT_APPROVED
        );

        self.price_of(&asset, &pricing_path)
    }

    #[view(isAssetRegistered)]
    fn is_asset_registered(&self, asset: EgldOrEsdtTokenIdentifier) -> bool {
        let mapper = self.asset_setting(&asset);
        !mapper.is_empty() && mapper.get().is_registered()
    }

    /// Key under which an edit with this content is tracked.
    #[view(getEditHash)]
    fn get_edit_hash(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        primary_source_id: u64,
        secondary_source_id: u64,
        allowed_divergence_bps: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.edit_hash(&EditProposal {
            asset,
            primary_source_id,
            secondary_source_id,
            allowed_divergence_bps,
        })
    }
}
