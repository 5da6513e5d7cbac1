multiversx_sc::imports!();

use common_constants::{EDIT_TIMELOCK_SECONDS, MAX_DIVERGENCE_BPS};
use common_errors::{
    ERROR_ASSET_ALREADY_REGISTERED, ERROR_ASSET_NOT_REGISTERED, ERROR_DIVERGENCE_TOO_LARGE,
    ERROR_EDIT_ALREADY_PROPOSED, ERROR_EDIT_NOT_MATURE, ERROR_EDIT_NOT_PROPOSED,
    ERROR_EXTENSION_ALREADY_APPROVED, ERROR_EXTENSION_NOT_APPROVED, ERROR_INVALID_PRIMARY_SOURCE,
    ERROR_INVALID_SOURCE_HANDLE, ERROR_SOURCE_ASSET_MISMATCH,
};
use common_structs::{AssetSetting, EditProposal, EditState};

use crate::storage;

#[multiversx_sc::module]
pub trait SettingsModule: storage::Storage + common_events::EventsModule {
    /// Assigns the sources of an asset for the first time.
    ///
    /// # Arguments
    /// - `asset`: The asset to register.
    /// - `primary_source_id`: Source consulted first, must be non zero.
    /// - `secondary_source_id`: Optional second source, 0 when unset.
    /// - `allowed_divergence_bps`: Tolerated gap between the two sources, at most 20%.
    ///
    /// Later changes go through `proposeEdit` and `commitEdit`.
    #[only_owner]
    #[endpoint(registerAsset)]
    fn register_asset(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        primary_source_id: u64,
        secondary_source_id: u64,
        allowed_divergence_bps: u64,
    ) {
        require!(
            self.asset_setting(&asset).is_empty(),
            ERROR_ASSET_ALREADY_REGISTERED
        );

        self.validate_and_write_setting(
            &asset,
            AssetSetting {
                primary_source_id,
                secondary_source_id,
                allowed_divergence_bps,
            },
        );
        self.register_asset_event(&asset);
    }

    /// Starts the timelock for an edit of a registered asset. Returns the edit hash.
    #[only_owner]
    #[endpoint(proposeEdit)]
    fn propose_edit(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        primary_source_id: u64,
        secondary_source_id: u64,
        allowed_divergence_bps: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        require!(
            !self.asset_setting(&asset).is_empty(),
            ERROR_ASSET_NOT_REGISTERED
        );

        let proposal = EditProposal {
            asset,
            primary_source_id,
            secondary_source_id,
            allowed_divergence_bps,
        };
        let edit_hash = self.edit_hash(&proposal);
        require!(
            !self.current_edit_state(&edit_hash).is_pending(),
            ERROR_EDIT_ALREADY_PROPOSED
        );

        let unlock_timestamp = self.blockchain().get_block_timestamp() + EDIT_TIMELOCK_SECONDS;
        self.edit_state(&edit_hash)
            .set(EditState::Pending(unlock_timestamp));

        self.propose_edit_event(&edit_hash, unlock_timestamp, &proposal);

        edit_hash
    }

    /// Applies a matured edit. The new setting is validated again against the current sources.
    #[only_owner]
    #[endpoint(commitEdit)]
    fn commit_edit(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        primary_source_id: u64,
        secondary_source_id: u64,
        allowed_divergence_bps: u64,
    ) {
        let proposal = EditProposal {
            asset,
            primary_source_id,
            secondary_source_id,
            allowed_divergence_bps,
        };
        let edit_hash = self.edit_hash(&proposal);

        let unlock_timestamp = match self.current_edit_state(&edit_hash) {
            EditState::Pending(unlock_timestamp) => unlock_timestamp,
            _ => sc_panic!(ERROR_EDIT_NOT_PROPOSED),
        };
        require!(
            self.blockchain().get_block_timestamp() >= unlock_timestamp,
            ERROR_EDIT_NOT_MATURE
        );

        self.edit_state(&edit_hash).set(EditState::Committed);
        self.validate_and_write_setting(&proposal.asset, proposal.setting());

        self.commit_edit_event(&edit_hash, &proposal.asset);
    }

    /// Discards a pending edit.
    #[only_owner]
    #[endpoint(cancelEdit)]
    fn cancel_edit(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        primary_source_id: u64,
        secondary_source_id: u64,
        allowed_divergence_bps: u64,
    ) {
        let proposal = EditProposal {
            asset,
            primary_source_id,
            secondary_source_id,
            allowed_divergence_bps,
        };
        let edit_hash = self.edit_hash(&proposal);
        require!(
            self.current_edit_state(&edit_hash).is_pending(),
            ERROR_EDIT_NOT_PROPOSED
        );

        self.edit_state(&edit_hash).set(EditState::Cancelled);

        self.cancel_edit_event(&edit_hash, &proposal.asset);
    }

    /// Trusts a contract as a pricing extension.
    #[only_owner]
    #[endpoint(addExtension)]
    fn add_extension(&self, extension: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&extension),
            ERROR_INVALID_SOURCE_HANDLE
        );
        require!(
            self.extensions().insert(extension.clone()),
            ERROR_EXTENSION_ALREADY_APPROVED
        );

        self.add_extension_event(&extension);
    }

    /// Revokes an extension. Its sources resolve as bad from now on.
    #[only_owner]
    #[endpoint(removeExtension)]
    fn remove_extension(&self, extension: ManagedAddress) {
        require!(
            self.extensions().swap_remove(&extension),
            ERROR_EXTENSION_NOT_APPROVED
        );

        self.remove_extension_event(&extension);
    }

    fn validate_and_write_setting(&self, asset: &EgldOrEsdtTokenIdentifier, setting: AssetSetting) {
        require!(setting.primary_source_id != 0, ERROR_INVALID_PRIMARY_SOURCE);
        self.require_source_of_asset(setting.primary_source_id, asset);

        if setting.has_secondary() {
            self.require_source_of_asset(setting.secondary_source_id, asset);
            require!(
                setting.allowed_divergence_bps <= MAX_DIVERGENCE_BPS,
                ERROR_DIVERGENCE_TOO_LARGE
            );
        }

        self.asset_setting(asset).set(&setting);

        self.update_asset_setting_event(
            asset,
            setting.primary_source_id,
            setting.secondary_source_id,
            setting.allowed_divergence_bps,
        );
    }

    fn require_source_of_asset(&self, source_id: u64, asset: &EgldOrEsdtTokenIdentifier) {
        let mapper = self.sources(source_id);
        require!(
            !mapper.is_empty() && mapper.get().asset == *asset,
            ERROR_SOURCE_ASSET_MISMATCH
        );
    }

    fn current_edit_state(&self, edit_hash: &ManagedByteArray<Self::Api, 32>) -> EditState {
        let mapper = self.edit_state(edit_hash);
        if mapper.is_empty() {
            EditState::Unproposed
        } else {
            mapper.get()
        }
    }

    fn edit_hash(&self, proposal: &EditProposal<Self::Api>) -> ManagedByteArray<Self::Api, 32> {
        let encoded = self.serializer().top_encode_to_managed_buffer(proposal);
        self.crypto().keccak256(&encoded)
    }
}
