multiversx_sc::imports!();

use common_constants::{WAD, WAD_PRECISION};
use common_proxies::{proxy_curve_pool, proxy_price_oracle};
use common_structs::{PriceErrorCode, PriceResult};

use crate::storage::{self, LpPoolConfig};

#[multiversx_sc::module]
pub trait PricingModule: storage::Storage + common_math::SharedMathModule {
    /// `virtual_price * min(coin prices)`. Any bad coin makes the share bad.
    fn stable_swap_share_price(
        &self,
        config: &LpPoolConfig<Self::Api>,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        let virtual_price = self.pool_virtual_price(&config.pool);
        let zero = self.wad_zero();

        let mut min_upper: Option<ManagedDecimal<Self::Api, NumDecimals>> = None;
        let mut min_lower = zero.clone();
        let mut lower_known = true;
        let mut error_code = PriceErrorCode::NoError;

        for coin in config.coins.iter() {
            let price =
                self.coin_price(EgldOrEsdtTokenIdentifier::esdt(coin.clone_value()), pricing_path);
            if price.is_bad() {
                return PriceResult::bad();
            }
            error_code = error_code.max(price.error_code);

            min_upper = Some(match min_upper {
                Some(current) => self.get_min(current, price.upper.clone()),
                None => price.upper.clone(),
            });

            if !price.has_lower() {
                lower_known = false;
            } else if min_lower == zero || price.lower < min_lower {
                min_lower = price.lower.clone();
            }
        }

        let upper = match min_upper {
            Some(min_upper) => self.mul_down(&virtual_price, &min_upper, WAD_PRECISION),
            None => return PriceResult::bad(),
        };
        let lower = if lower_known {
            self.mul_down(&virtual_price, &min_lower, WAD_PRECISION)
        } else {
            zero
        };

        PriceResult::new(upper, lower, error_code)
    }

    /// Share value in coin 0 is `3 * virtual_price * cbrt(p1 * p2)`, with `p1` and `p2` the
    /// pool oracle prices of coins 1 and 2 in coin 0. The result is then priced through coin 0.
    fn tri_crypto_share_price(
        &self,
        config: &LpPoolConfig<Self::Api>,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        let virtual_price = self.pool_virtual_price(&config.pool);
        let p1 = self.pool_price_oracle(&config.pool, 0);
        let p2 = self.pool_price_oracle(&config.pool, 1);

        let root = self.cube_root_wad(&self.mul_down(&p1, &p2, WAD_PRECISION));
        let three = self.to_decimal_wad(BigUint::from(3 * WAD));
        let share_in_coin0 = self.mul_down(
            &three,
            &self.mul_down(&virtual_price, &root, WAD_PRECISION),
            WAD_PRECISION,
        );

        let coin0 = config.coins.get(0).clone_value();
        let coin0_price = self.coin_price(EgldOrEsdtTokenIdentifier::esdt(coin0), pricing_path);
        if coin0_price.is_bad() {
            return PriceResult::bad();
        }

        let upper = self.mul_down(&share_in_coin0, &coin0_price.upper, WAD_PRECISION);
        let lower = if coin0_price.has_lower() {
            self.mul_down(&share_in_coin0, &coin0_price.lower, WAD_PRECISION)
        } else {
            self.wad_zero()
        };

        PriceResult::new(upper, lower, coin0_price.error_code)
    }

    fn coin_price(
        &self,
        coin: EgldOrEsdtTokenIdentifier,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        self.tx()
            .to(self.oracle().get())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_price_for_extension(coin, pricing_path.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn pool_virtual_price(&self, pool: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self
            .tx()
            .to(pool)
            .typed(proxy_curve_pool::CurvePoolProxy)
            .virtual_price()
            .returns(ReturnsResult)
            .sync_call_readonly();
        self.to_decimal_wad(raw)
    }

    fn pool_price_oracle(
        &self,
        pool: &ManagedAddress,
        index: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self
            .tx()
            .to(pool)
            .typed(proxy_curve_pool::CurvePoolProxy)
            .price_oracle(index)
            .returns(ReturnsResult)
            .sync_call_readonly();
        self.to_decimal_wad(raw)
    }
}
