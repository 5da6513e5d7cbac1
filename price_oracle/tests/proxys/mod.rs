pub mod proxy_curve_pool_mock;
pub mod proxy_feed_mock;
pub mod proxy_lp_extension;
