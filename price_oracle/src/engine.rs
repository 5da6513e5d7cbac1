multiversx_sc::imports!();

use common_constants::{MAX_PRICING_DEPTH, WAD_PRECISION};
use common_errors::{
    ERROR_ASSET_NOT_REGISTERED, ERROR_PRICING_CYCLE_DETECTED, ERROR_SOURCE_NOT_FOUND,
};
use common_structs::{PriceErrorCode, PriceResult, Source, SourceKind};

use crate::{
    resolvers::{self, Reading},
    storage,
};

#[multiversx_sc::module]
pub trait EngineModule:
    storage::Storage
    + resolvers::feed::FeedResolverModule
    + resolvers::twap::TwapResolverModule
    + resolvers::extension::ExtensionResolverModule
    + common_math::SharedMathModule
{
    /// Price of one unit of `asset` in the base currency.
    ///
    /// `pricing_path` holds the assets already being priced higher up in the current call.
    /// Meeting one of them again, or walking deeper than `MAX_PRICING_DEPTH`, is a configuration cycle.
    fn price_of(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        if *asset == self.base_currency().get() {
            return PriceResult::identity(self.wad());
        }

        require!(
            !pricing_path.contains(asset) && pricing_path.len() < MAX_PRICING_DEPTH,
            ERROR_PRICING_CYCLE_DETECTED
        );

        let setting_mapper = self.asset_setting(asset);
        require!(!setting_mapper.is_empty(), ERROR_ASSET_NOT_REGISTERED);
        let setting = setting_mapper.get();
        require!(setting.is_registered(), ERROR_ASSET_NOT_REGISTERED);

        let mut path = pricing_path.clone();
        path.push(asset.clone());

        let primary = self.resolve_source(setting.primary_source_id, &path);
        if !setting.has_secondary() {
            return primary;
        }

        let secondary = self.resolve_source(setting.secondary_source_id, &path);
        self.reconcile(primary, secondary, setting.allowed_divergence_bps)
    }

    fn get_source(&self, source_id: u64) -> Source<Self::Api> {
        let mapper = self.sources(source_id);
        require!(!mapper.is_empty(), ERROR_SOURCE_NOT_FOUND);
        mapper.get()
    }

    /// Resolves one source to a base currency price. Never fails on bad data, only on bad configuration.
    fn resolve_source(
        &self,
        source_id: u64,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        let source = self.get_source(source_id);

        match source.kind {
            SourceKind::DirectFeed => {
                let reading = self.read_direct_feed(source_id, &source.handle);
                self.convert_reading(reading, pricing_path)
            },
            SourceKind::TimeWindowAverage => {
                let reading = self.read_twap(source_id, &source.handle);
                self.convert_reading(reading, pricing_path)
            },
            SourceKind::Extension => self.read_extension(source_id, &source.handle, pricing_path),
        }
    }

    /// Expresses a reading in the base currency, pricing its quote asset when needed.
    /// A bad quote makes the whole reading bad.
    fn convert_reading(
        &self,
        reading: Reading<Self::Api>,
        pricing_path: &ManagedVec<EgldOrEsdtTokenIdentifier>,
    ) -> PriceResult<Self::Api> {
        let zero = self.wad_zero();

        match reading {
            Reading::Unavailable => PriceResult::bad(),
            Reading::InBase(value) => {
                if value == zero {
                    return PriceResult::bad();
                }
                PriceResult::new(value, zero, PriceErrorCode::NoError)
            },
            Reading::Quoted(value, quote_asset) => {
                let quote = self.price_of(&quote_asset, pricing_path);
                if quote.is_bad() {
                    return PriceResult::bad();
                }

                let upper = self.mul_down(&value, &quote.upper, WAD_PRECISION);
                if upper == zero {
                    return PriceResult::bad();
                }

                let lower = if quote.has_lower() {
                    self.mul_down(&value, &quote.lower, WAD_PRECISION)
                } else {
                    zero
                };

                PriceResult::new(upper, lower, quote.error_code)
            },
        }
    }

    /// Combines the primary and secondary results of an asset.
    ///
    /// - both bad: `(0, 0, Bad)`
    /// - one bad: the other one, at least `Caution`
    /// - otherwise: merged bounds with the worse error code, and `Caution` when
    ///   `lower < upper * (1 - divergence)`
    fn reconcile(
        &self,
        primary: PriceResult<Self::Api>,
        secondary: PriceResult<Self::Api>,
        allowed_divergence_bps: u64,
    ) -> PriceResult<Self::Api> {
        match (primary.is_bad(), secondary.is_bad()) {
            (true, true) => PriceResult::bad(),
            (true, false) => secondary.with_error_at_least(PriceErrorCode::Caution),
            (false, true) => primary.with_error_at_least(PriceErrorCode::Caution),
            (false, false) => {
                let (upper, lower) = self.merge_bounds(&primary, &secondary);
                let mut error_code = primary.error_code.max(secondary.error_code);

                if error_code == PriceErrorCode::NoError {
                    let min_acceptable_lower = self.apply_haircut_bps(&upper, allowed_divergence_bps);
                    if lower < min_acceptable_lower {
                        error_code = PriceErrorCode::Caution;
                    }
                }

                PriceResult::new(upper, lower, error_code)
            },
        }
    }

    /// Widest interval supported by both results.
    /// A known lower bound is never allowed above the smaller of the two upper bounds.
    fn merge_bounds(
        &self,
        a: &PriceResult<Self::Api>,
        b: &PriceResult<Self::Api>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let upper = self.get_max(a.upper.clone(), b.upper.clone());
        let min_upper = self.get_min(a.upper.clone(), b.upper.clone());

        let lower = match (a.has_lower(), b.has_lower()) {
            (false, false) => min_upper,
            (true, true) => self.get_min(a.lower.clone(), b.lower.clone()),
            (true, false) => self.get_min(a.lower.clone(), min_upper),
            (false, true) => self.get_min(b.lower.clone(), min_upper),
        };

        (upper, lower)
    }
}
