#![no_std]

pub static ERROR_INVALID_PRIMARY_SOURCE: &[u8] = b"Invalid primary source.";

pub static ERROR_SOURCE_ASSET_MISMATCH: &[u8] = b"Source was not registered for this asset.";

pub static ERROR_DIVERGENCE_TOO_LARGE: &[u8] = b"Allowed divergence exceeds the protocol maximum.";

pub static ERROR_ASSET_ALREADY_REGISTERED: &[u8] = b"Asset already registered.";

pub static ERROR_ASSET_NOT_REGISTERED: &[u8] = b"Asset not registered.";

pub static ERROR_SOURCE_NOT_FOUND: &[u8] = b"Source not found.";

pub static ERROR_SOURCE_SETUP_INVALID: &[u8] = b"Source setup invalid, initial price is bad.";

pub static ERROR_BUFFERED_MIN_OVERFLOW: &[u8] = b"Buffered feed minimum overflows the bound width.";

pub static ERROR_MIN_EXCEEDS_MAX: &[u8] = b"Feed minimum must be lower than the maximum.";

pub static ERROR_FEED_BOUND_TOO_LOOSE: &[u8] =
    b"Feed bound is looser than the buffered provider bound.";

pub static ERROR_INVALID_HEARTBEAT: &[u8] = b"Feed heartbeat exceeds the maximum allowed.";

pub static ERROR_ASSET_NOT_IN_POOL: &[u8] = b"Asset is not one of the pool tokens.";

pub static ERROR_WINDOW_TOO_SHORT: &[u8] = b"Averaging window is too short.";

pub static ERROR_EDIT_ALREADY_PROPOSED: &[u8] = b"Edit already proposed.";

pub static ERROR_EDIT_NOT_MATURE: &[u8] = b"Edit timelock has not expired.";

pub static ERROR_EDIT_NOT_PROPOSED: &[u8] = b"Edit not proposed.";

pub static ERROR_PRICING_CYCLE_DETECTED: &[u8] = b"Pricing cycle detected.";

pub static ERROR_EXTENSION_NOT_APPROVED: &[u8] = b"Extension not approved.";

pub static ERROR_EXTENSION_ALREADY_APPROVED: &[u8] = b"Extension already approved.";

pub static ERROR_INVALID_BASE_CURRENCY: &[u8] = b"Invalid base currency.";

pub static ERROR_INVALID_SAFE_PRICE_VIEW: &[u8] = b"Invalid safe price view address.";

pub static ERROR_INVALID_SOURCE_HANDLE: &[u8] = b"Invalid source handle, must be a smart contract.";

pub static ERROR_CUBE_ROOT_NOT_CONVERGED: &[u8] = b"Cube root did not converge.";

pub static ERROR_ONLY_ORACLE: &[u8] = b"Only the price oracle can call this endpoint.";

pub static ERROR_INVALID_EXTENSION_DATA: &[u8] = b"Invalid extension setup data.";

pub static ERROR_ASSET_NOT_POOL_SHARE: &[u8] = b"Asset is not the pool share token.";

pub static ERROR_INVALID_POOL_COINS: &[u8] = b"Pool coin count does not match the curve.";

pub static ERROR_SOURCE_CONFIG_NOT_FOUND: &[u8] = b"Extension source config not found.";
