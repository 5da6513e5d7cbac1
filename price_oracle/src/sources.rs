multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_SOURCE_HANDLE, ERROR_SOURCE_SETUP_INVALID};
use common_structs::{Source, SourceConfig};

use crate::{engine, resolvers, storage};

#[multiversx_sc::module]
pub trait SourceRegistryModule:
    storage::Storage
    + engine::EngineModule
    + resolvers::feed::FeedResolverModule
    + resolvers::twap::TwapResolverModule
    + resolvers::extension::ExtensionResolverModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Registers a new price source for an asset.
    ///
    /// # Arguments
    /// - `asset`: The asset the source prices.
    /// - `handle`: Feed, pair or extension contract backing the source.
    /// - `config`: Kind-specific setup, its variant selects the source kind.
    ///
    /// # Returns
    /// - `u64`: The new source identifier. Every call allocates a fresh one.
    ///
    /// The source is resolved once after setup and the registration fails if it is bad.
    #[only_owner]
    #[endpoint(registerSource)]
    fn register_source(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        handle: ManagedAddress,
        config: SourceConfig<Self::Api>,
    ) -> u64 {
        require!(
            self.blockchain().is_smart_contract(&handle),
            ERROR_INVALID_SOURCE_HANDLE
        );

        let source_id = self.source_count().update(|count| {
            *count += 1;
            *count
        });
        let kind = config.kind();

        match config {
            SourceConfig::DirectFeed(setup) => {
                self.setup_direct_feed(source_id, &handle, setup);
            },
            SourceConfig::TimeWindowAverage(setup) => {
                self.setup_twap(source_id, &asset, &handle, setup);
            },
            SourceConfig::Extension(data) => {
                self.setup_extension(source_id, &asset, &handle, data);
            },
        }

        let source = Source {
            asset,
            kind,
            handle,
        };
        self.sources(source_id).set(&source);

        let initial = self.resolve_source(
            source_id,
            &ManagedVec::from_single_item(source.asset.clone()),
        );
        require!(!initial.is_bad(), ERROR_SOURCE_SETUP_INVALID);

        self.register_source_event(source_id, &source.asset, kind, &source.handle);

        source_id
    }
}
