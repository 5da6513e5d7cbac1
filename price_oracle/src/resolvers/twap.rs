multiversx_sc::imports!();

use common_constants::MIN_TWAP_WINDOW_SECONDS;
use common_errors::{
    ERROR_ASSET_NOT_IN_POOL, ERROR_INVALID_SAFE_PRICE_VIEW, ERROR_WINDOW_TOO_SHORT,
};
use common_proxies::proxy_xexchange_pair;
use common_structs::{PairState, TwapConfig, TwapSetup};

use super::Reading;
use crate::storage;

#[multiversx_sc::module]
pub trait TwapResolverModule: storage::Storage + common_math::SharedMathModule {
    /// Matches the priced asset to one side of the pair and stores the window configuration.
    fn setup_twap(
        &self,
        source_id: u64,
        asset: &EgldOrEsdtTokenIdentifier,
        handle: &ManagedAddress,
        setup: TwapSetup,
    ) -> TwapConfig<Self::Api> {
        require!(
            setup.window_seconds >= MIN_TWAP_WINDOW_SECONDS,
            ERROR_WINDOW_TOO_SHORT
        );
        require!(!self.safe_price_view().is_empty(), ERROR_INVALID_SAFE_PRICE_VIEW);

        let first_token = self
            .tx()
            .to(handle)
            .typed(proxy_xexchange_pair::PairProxy)
            .first_token_id()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let second_token = self
            .tx()
            .to(handle)
            .typed(proxy_xexchange_pair::PairProxy)
            .second_token_id()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let (base_token, quote_token) =
            if *asset == EgldOrEsdtTokenIdentifier::esdt(first_token.clone()) {
                (first_token, second_token)
            } else if *asset == EgldOrEsdtTokenIdentifier::esdt(second_token.clone()) {
                (second_token, first_token)
            } else {
                sc_panic!(ERROR_ASSET_NOT_IN_POOL)
            };

        let config = TwapConfig {
            window_seconds: setup.window_seconds,
            base_decimals: setup.base_decimals,
            quote_decimals: setup.quote_decimals,
            base_token,
            quote_token,
        };
        self.twap_config(source_id).set(&config);

        config
    }

    /// Average value of one base token over the window, in quote token units.
    fn read_twap(&self, source_id: u64, handle: &ManagedAddress) -> Reading<Self::Api> {
        if self.pair_state(handle.clone()).get() != PairState::Active {
            return Reading::Unavailable;
        }

        let config = self.twap_config(source_id).get();
        let one_token = BigUint::from(10u64).pow(config.base_decimals as u32);

        let quoted = self
            .safe_price_proxy(self.safe_price_view().get())
            .get_safe_price_by_timestamp_offset(
                handle,
                config.window_seconds,
                EsdtTokenPayment::new(config.base_token.clone(), 0, one_token),
            )
            .returns(ReturnsResult)
            .sync_call_readonly();

        if quoted.amount == BigUint::zero() || quoted.token_identifier != config.quote_token {
            return Reading::Unavailable;
        }

        let value = self.raw_to_wad(quoted.amount, config.quote_decimals);
        let quote_asset = EgldOrEsdtTokenIdentifier::esdt(config.quote_token);
        if quote_asset == self.base_currency().get() {
            Reading::InBase(value)
        } else {
            Reading::Quoted(value, quote_asset)
        }
    }

    #[proxy]
    fn safe_price_proxy(&self, sc_address: ManagedAddress) -> safe_price_proxy::ProxyTo<Self::Api>;
}

mod safe_price_proxy {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait SafePriceContract {
        #[view(getSafePriceByTimestampOffset)]
        fn get_safe_price_by_timestamp_offset(
            &self,
            pair_address: ManagedAddress,
            timestamp_offset: u64,
            input_payment: EsdtTokenPayment,
        ) -> EsdtTokenPayment;
    }
}
