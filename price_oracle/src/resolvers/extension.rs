multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_errors::ERROR_EXTENSION_NOT_APPROVED;
use common_proxies::proxy_price_extension;
use common_structs::PriceResult;

use crate::storage;

#[multiversx_sc::module]
pub trait ExtensionResolverModule: storage::Storage + common_math::SharedMathModule {
    /// Hands the opaque setup data to an approved extension. A failing setup fails the registration.
    fn setup_extension(
        &self,
        source_id: u64,
        asset: &EgldOrEsdtTokenIdentifier,
        handle: &ManagedAddress,
        data: ManagedBuffer,
    ) {
        require!(self.extensions().contains(handle), ERROR_EXTENSION_NOT_APPROVED);

        self.tx()
            .to(handle)
            .typed(proxy_price_extension::PriceExtensionProxy)
            .setup(asset, source_id, data)
            .sync_call();
    }

    /// Asks the extension for its price. `pricing_path` travels with the call so the extension
    /// can price constituents through `getPriceForExtension` without looping.
    fn read_extension(
        &self,
        source_id: u64,
        handle: &ManagedAddress,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        if !self.extensions().contains(handle) {
            return PriceResult::bad();
        }

        let result = self
            .tx()
            .to(handle)
            .typed(proxy_price_extension::PriceExtensionProxy)
            .get_price(source_id, pricing_path.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.normalize_extension_result(result)
    }

    /// Brings an extension answer to WAD and rejects results that break the bound ordering.
    fn normalize_extension_result(&self, result: PriceResult<Self::Api>) -> PriceResult<Self::Api> {
        if result.is_bad() {
            return PriceResult::bad();
        }

        let upper = result.upper.rescale(WAD_PRECISION);
        let lower = result.lower.rescale(WAD_PRECISION);
        if upper == self.wad_zero() || lower > upper {
            return PriceResult::bad();
        }

        PriceResult::new(upper, lower, result.error_code)
    }
}
