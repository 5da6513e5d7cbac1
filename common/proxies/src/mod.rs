#![no_std]

pub mod proxy_curve_pool;
pub mod proxy_price_extension;
pub mod proxy_price_feed;
pub mod proxy_price_oracle;
pub mod proxy_xexchange_pair;
