#![no_std]

/// Fixed-point scale for every price handled by the oracle. 1 WAD = 1 unit of the base currency.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%

/// Maximum allowed divergence between the primary and the secondary source (20%)
pub const MAX_DIVERGENCE_BPS: u64 = 2_000;

/// Delay between proposing and committing an asset setting edit (7 days)
pub const EDIT_TIMELOCK_SECONDS: u64 = 7 * SECONDS_PER_DAY;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Shortest averaging window accepted for a time-window average source (5 minutes)
pub const MIN_TWAP_WINDOW_SECONDS: u64 = 5 * SECONDS_PER_MINUTE;

/// Staleness bound applied to a direct feed registered without one, also its upper limit (24 hours)
pub const DEFAULT_HEARTBEAT_SECONDS: u64 = SECONDS_PER_DAY;

/// Provider bounds are tightened by 10% on both ends: min * 110%, max * 90%
pub const FEED_MIN_BUFFER_BPS: u64 = 11_000;
pub const FEED_MAX_BUFFER_BPS: u64 = 9_000;

/// Feed bounds are kept within 128 bits
pub const MAX_FEED_BOUND: u128 = u128::MAX;

/// Longest chain of assets a single price resolution may walk through
pub const MAX_PRICING_DEPTH: usize = 5;

pub const MAX_CUBE_ROOT_ITERATIONS: usize = 255;

/// Relative convergence threshold of the cube root solver, 1e-18 expressed against WAD
pub const CUBE_ROOT_RELATIVE_TOLERANCE: u128 = WAD;
