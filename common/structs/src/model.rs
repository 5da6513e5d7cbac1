#![no_std]

use common_constants::WAD_PRECISION;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Confidence attached to a price. Ordered by severity, so the worse of two codes is their `max`.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
pub enum PriceErrorCode {
    NoError,
    Caution,
    Bad,
}

/// Price of one unit of an asset in the base currency, WAD scaled.
/// A zero `lower` means the lower bound is unknown, not that the price is zero.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PriceResult<M: ManagedTypeApi> {
    pub upper: ManagedDecimal<M, NumDecimals>,
    pub lower: ManagedDecimal<M, NumDecimals>,
    pub error_code: PriceErrorCode,
}

impl<M: ManagedTypeApi> PriceResult<M> {
    pub fn new(
        upper: ManagedDecimal<M, NumDecimals>,
        lower: ManagedDecimal<M, NumDecimals>,
        error_code: PriceErrorCode,
    ) -> Self {
        PriceResult {
            upper,
            lower,
            error_code,
        }
    }

    /// `(0, 0, Bad)`, the only shape a bad result may take.
    pub fn bad() -> Self {
        PriceResult {
            upper: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
            lower: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
            error_code: PriceErrorCode::Bad,
        }
    }

    /// Price of the base currency in itself.
    pub fn identity(one: ManagedDecimal<M, NumDecimals>) -> Self {
        PriceResult {
            upper: one.clone(),
            lower: one,
            error_code: PriceErrorCode::NoError,
        }
    }

    pub fn is_bad(&self) -> bool {
        self.error_code == PriceErrorCode::Bad
    }

    pub fn has_lower(&self) -> bool {
        self.lower.into_raw_units() > &BigUint::zero()
    }

    /// Raises the error code to at least `floor`. Never lowers it.
    pub fn with_error_at_least(mut self, floor: PriceErrorCode) -> Self {
        if floor == PriceErrorCode::Bad {
            return Self::bad();
        }
        self.error_code = self.error_code.max(floor);
        self
    }

    /// Single scalar for callers that need one number: `lower`, or `upper` when `lower` is unknown.
    pub fn conservative_price(&self) -> ManagedDecimal<M, NumDecimals> {
        if self.has_lower() {
            self.lower.clone()
        } else {
            self.upper.clone()
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SourceKind {
    DirectFeed,
    TimeWindowAverage,
    Extension,
}

/// Immutable once registered. `handle` is the feed, the pool or the extension contract.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Source<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub kind: SourceKind,
    pub handle: ManagedAddress<M>,
}

/// Arguments of a direct feed registration. Zero bounds and heartbeat select the defaults.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct FeedSetup<M: ManagedTypeApi> {
    pub max_answer: BigUint<M>,
    pub min_answer: BigUint<M>,
    pub heartbeat: u64,
    pub quote_asset: EgldOrEsdtTokenIdentifier<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TwapSetup {
    pub window_seconds: u64,
    pub base_decimals: NumDecimals,
    pub quote_decimals: NumDecimals,
}

/// Kind-specific registration arguments. The variant selects the source kind.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum SourceConfig<M: ManagedTypeApi> {
    DirectFeed(FeedSetup<M>),
    TimeWindowAverage(TwapSetup),
    Extension(ManagedBuffer<M>),
}

impl<M: ManagedTypeApi> SourceConfig<M> {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceConfig::DirectFeed(_) => SourceKind::DirectFeed,
            SourceConfig::TimeWindowAverage(_) => SourceKind::TimeWindowAverage,
            SourceConfig::Extension(_) => SourceKind::Extension,
        }
    }
}

/// Stored direct feed configuration, bounds expressed in raw feed units.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct FeedConfig<M: ManagedTypeApi> {
    pub min_answer: BigUint<M>,
    pub max_answer: BigUint<M>,
    pub heartbeat: u64,
    pub decimals: NumDecimals,
    pub quote_is_base_currency: bool,
    pub quote_asset: EgldOrEsdtTokenIdentifier<M>,
}

/// Stored time-window average configuration. `base_token` is the priced asset side of the pool.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TwapConfig<M: ManagedTypeApi> {
    pub window_seconds: u64,
    pub base_decimals: NumDecimals,
    pub quote_decimals: NumDecimals,
    pub base_token: TokenIdentifier<M>,
    pub quote_token: TokenIdentifier<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug, Default)]
pub struct AssetSetting {
    pub primary_source_id: u64,
    pub secondary_source_id: u64,
    pub allowed_divergence_bps: u64,
}

impl AssetSetting {
    pub fn is_registered(&self) -> bool {
        self.primary_source_id != 0
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary_source_id != 0
    }
}

/// Full content of an asset setting edit. Its encoding is hashed to key the proposal.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct EditProposal<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub primary_source_id: u64,
    pub secondary_source_id: u64,
    pub allowed_divergence_bps: u64,
}

impl<M: ManagedTypeApi> EditProposal<M> {
    pub fn setting(&self) -> AssetSetting {
        AssetSetting {
            primary_source_id: self.primary_source_id,
            secondary_source_id: self.secondary_source_id,
            allowed_divergence_bps: self.allowed_divergence_bps,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditState {
    Unproposed,
    Pending(u64),
    Committed,
    Cancelled,
}

impl EditState {
    pub fn is_pending(&self) -> bool {
        matches!(self, EditState::Pending(_))
    }
}

/// Latest reading published by a direct feed, in raw feed units.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct FeedRound<M: ManagedTypeApi> {
    pub round_id: u64,
    pub answer: BigUint<M>,
    pub updated_at: u64,
}

/// Mirrors the DEX pair state layout, read straight from the pair storage.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PairState {
    Inactive,
    Active,
    PartialActive,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LpCurve {
    StableSwap,
    TriCrypto,
}

/// Setup data understood by the pool share extension.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LpSetupArgs<M: ManagedTypeApi> {
    pub pool: ManagedAddress<M>,
    pub curve: LpCurve,
}
