multiversx_sc::imports!();

use common_structs::{AssetSetting, EditState, FeedConfig, PairState, Source, TwapConfig};

#[multiversx_sc::module]
pub trait Storage {
    /// Asset every price is denominated in.
    #[view(getBaseCurrency)]
    #[storage_mapper("base_currency")]
    fn base_currency(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Contract exposing `getSafePriceByTimestampOffset` for DEX pairs.
    #[view(getSafePriceView)]
    #[storage_mapper("safe_price_view")]
    fn safe_price_view(&self) -> SingleValueMapper<ManagedAddress>;

    /// Last allocated source identifier. Identifiers start at 1, 0 means unset.
    #[view(getSourceCount)]
    #[storage_mapper("source_count")]
    fn source_count(&self) -> SingleValueMapper<u64>;

    #[view(getSource)]
    #[storage_mapper("sources")]
    fn sources(&self, source_id: u64) -> SingleValueMapper<Source<Self::Api>>;

    #[view(getFeedConfig)]
    #[storage_mapper("feed_config")]
    fn feed_config(&self, source_id: u64) -> SingleValueMapper<FeedConfig<Self::Api>>;

    #[view(getTwapConfig)]
    #[storage_mapper("twap_config")]
    fn twap_config(&self, source_id: u64) -> SingleValueMapper<TwapConfig<Self::Api>>;

    /// Primary and secondary sources of an asset, with the divergence they may show.
    ///
    /// # Arguments
    /// - `asset`: The priced asset.
    ///
    /// # Returns
    /// - `AssetSetting`: Empty while the asset is not registered.
    #[view(getAssetSetting)]
    #[storage_mapper("asset_setting")]
    fn asset_setting(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<AssetSetting>;

    /// Lifecycle of an asset setting edit, keyed by the keccak256 of its encoded content.
    #[view(getEditState)]
    #[storage_mapper("edit_state")]
    fn edit_state(&self, edit_hash: &ManagedByteArray<Self::Api, 32>) -> SingleValueMapper<EditState>;

    /// Extension contracts trusted to price sources and call back into the engine.
    #[view(getExtensions)]
    #[storage_mapper("extensions")]
    fn extensions(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn feed_paused_state(&self, feed_address: ManagedAddress) -> SingleValueMapper<bool, ManagedAddress>;

    #[storage_mapper_from_address("state")]
    fn pair_state(&self, pair_address: ManagedAddress) -> SingleValueMapper<PairState, ManagedAddress>;
}
