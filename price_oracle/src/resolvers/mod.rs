multiversx_sc::imports!();

pub mod extension;
pub mod feed;
pub mod twap;

/// Raw outcome of reading a feed or a pool, before it is expressed in the base currency.
pub enum Reading<M: ManagedTypeApi> {
    /// Stale, out of bounds or otherwise unusable.
    Unavailable,
    /// Price of one unit already denominated in the base currency.
    InBase(ManagedDecimal<M, NumDecimals>),
    /// Price of one unit denominated in another asset, which must be priced in turn.
    Quoted(ManagedDecimal<M, NumDecimals>, EgldOrEsdtTokenIdentifier<M>),
}
