multiversx_sc::imports!();

use common_constants::{
    BPS, DEFAULT_HEARTBEAT_SECONDS, FEED_MAX_BUFFER_BPS, FEED_MIN_BUFFER_BPS, MAX_FEED_BOUND,
};
use common_errors::{
    ERROR_BUFFERED_MIN_OVERFLOW, ERROR_FEED_BOUND_TOO_LOOSE, ERROR_INVALID_HEARTBEAT,
    ERROR_MIN_EXCEEDS_MAX,
};
use common_proxies::proxy_price_feed;
use common_structs::{FeedConfig, FeedSetup};

use super::Reading;
use crate::storage;

#[multiversx_sc::module]
pub trait FeedResolverModule: storage::Storage + common_math::SharedMathModule {
    /// Validates the bounds of a direct feed against the provider's declared range and stores them.
    ///
    /// The provider range is tightened by 10% on both ends. Zero bounds adopt the tightened range,
    /// explicit bounds may only be stricter. A zero heartbeat selects the 24h default.
    fn setup_direct_feed(
        &self,
        source_id: u64,
        handle: &ManagedAddress,
        setup: FeedSetup<Self::Api>,
    ) -> FeedConfig<Self::Api> {
        let (provider_min, provider_max) = self
            .tx()
            .to(handle)
            .typed(proxy_price_feed::PriceFeedProxy)
            .answer_bounds()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();

        let decimals = self
            .tx()
            .to(handle)
            .typed(proxy_price_feed::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let bps = BigUint::from(BPS);
        let bound_width = BigUint::from(MAX_FEED_BOUND);

        let buffered_min =
            self.mul_div_down(&provider_min, &BigUint::from(FEED_MIN_BUFFER_BPS), &bps);
        require!(buffered_min <= bound_width, ERROR_BUFFERED_MIN_OVERFLOW);

        let mut buffered_max =
            self.mul_div_down(&provider_max, &BigUint::from(FEED_MAX_BUFFER_BPS), &bps);
        if buffered_max > bound_width {
            buffered_max = bound_width;
        }

        let min_answer = if setup.min_answer == BigUint::zero() {
            buffered_min
        } else {
            require!(setup.min_answer >= buffered_min, ERROR_FEED_BOUND_TOO_LOOSE);
            setup.min_answer
        };

        let max_answer = if setup.max_answer == BigUint::zero() {
            buffered_max
        } else {
            require!(setup.max_answer <= buffered_max, ERROR_FEED_BOUND_TOO_LOOSE);
            setup.max_answer
        };

        require!(min_answer < max_answer, ERROR_MIN_EXCEEDS_MAX);

        let heartbeat = if setup.heartbeat == 0 {
            DEFAULT_HEARTBEAT_SECONDS
        } else {
            require!(
                setup.heartbeat <= DEFAULT_HEARTBEAT_SECONDS,
                ERROR_INVALID_HEARTBEAT
            );
            setup.heartbeat
        };

        let config = FeedConfig {
            min_answer,
            max_answer,
            heartbeat,
            decimals,
            quote_is_base_currency: setup.quote_asset == self.base_currency().get(),
            quote_asset: setup.quote_asset,
        };
        self.feed_config(source_id).set(&config);

        config
    }

    /// Latest feed answer in WAD, or `Unavailable` when paused, out of bounds or stale.
    fn read_direct_feed(&self, source_id: u64, handle: &ManagedAddress) -> Reading<Self::Api> {
        if self.feed_paused_state(handle.clone()).get() {
            return Reading::Unavailable;
        }

        let config = self.feed_config(source_id).get();
        let round = self
            .tx()
            .to(handle)
            .typed(proxy_price_feed::PriceFeedProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call_readonly();

        if round.answer < config.min_answer || round.answer > config.max_answer {
            return Reading::Unavailable;
        }

        let now = self.blockchain().get_block_timestamp();
        if now.saturating_sub(round.updated_at) > config.heartbeat {
            return Reading::Unavailable;
        }

        let value = self.raw_to_wad(round.answer, config.decimals);
        if config.quote_is_base_currency {
            Reading::InBase(value)
        } else {
            Reading::Quoted(value, config.quote_asset)
        }
    }
}
