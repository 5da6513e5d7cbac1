#![no_std]

multiversx_sc::imports!();

pub mod pricing;
pub mod storage;

use common_errors::{
    ERROR_ASSET_NOT_POOL_SHARE, ERROR_INVALID_EXTENSION_DATA, ERROR_INVALID_POOL_COINS,
    ERROR_INVALID_SOURCE_HANDLE, ERROR_ONLY_ORACLE, ERROR_SOURCE_CONFIG_NOT_FOUND,
};
use common_proxies::proxy_curve_pool;
use common_structs::{LpCurve, LpSetupArgs, PriceResult};
use storage::LpPoolConfig;

/// Prices pool share tokens of constant-function pools from the prices of their coins.
#[multiversx_sc::contract]
pub trait LpExtension:
    storage::Storage + pricing::PricingModule + common_math::SharedMathModule
{
    #[init]
    fn init(&self, oracle: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&oracle),
            ERROR_INVALID_SOURCE_HANDLE
        );
        self.oracle().set(&oracle);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Binds a source of the oracle to a pool.
    ///
    /// # Arguments
    /// - `asset`: The pool share token being priced.
    /// - `source_id`: Oracle source identifier, used to key the pool configuration.
    /// - `data`: Top-encoded `LpSetupArgs`.
    #[endpoint(setup)]
    fn setup(&self, asset: EgldOrEsdtTokenIdentifier, source_id: u64, data: ManagedBuffer) {
        self.require_oracle();

        let args = match LpSetupArgs::<Self::Api>::top_decode(data) {
            Ok(args) => args,
            Err(_) => sc_panic!(ERROR_INVALID_EXTENSION_DATA),
        };

        let lp_token = self
            .tx()
            .to(&args.pool)
            .typed(proxy_curve_pool::CurvePoolProxy)
            .lp_token_identifier()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(
            asset == EgldOrEsdtTokenIdentifier::esdt(lp_token),
            ERROR_ASSET_NOT_POOL_SHARE
        );

        let coins = self
            .tx()
            .to(&args.pool)
            .typed(proxy_curve_pool::CurvePoolProxy)
            .coins()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let coin_count_valid = match args.curve {
            LpCurve::StableSwap => coins.len() >= 2,
            LpCurve::TriCrypto => coins.len() == 3,
        };
        require!(coin_count_valid, ERROR_INVALID_POOL_COINS);

        self.pool_config(source_id).set(LpPoolConfig {
            asset,
            pool: args.pool,
            curve: args.curve,
            coins,
        });
    }

    /// Price of one pool share in the base currency of the oracle.
    /// `pricing_path` is forwarded untouched when pricing the pool coins.
    #[view(getPrice)]
    fn get_price(
        &self,
        source_id: u64,
        pricing_path: ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        self.require_oracle();

        let mapper = self.pool_config(source_id);
        require!(!mapper.is_empty(), ERROR_SOURCE_CONFIG_NOT_FOUND);
        let config = mapper.get();

        match config.curve {
            LpCurve::StableSwap => self.stable_swap_share_price(&config, &pricing_path),
            LpCurve::TriCrypto => self.tri_crypto_share_price(&config, &pricing_path),
        }
    }

    fn require_oracle(&self) {
        require!(
            self.blockchain().get_caller() == self.oracle().get(),
            ERROR_ONLY_ORACLE
        );
    }
}
