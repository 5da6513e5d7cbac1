#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("register_source")]
    fn register_source_event(
        &self,
        #[indexed] source_id: u64,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] kind: SourceKind,
        #[indexed] handle: &ManagedAddress,
    );

    #[event("register_asset")]
    fn register_asset_event(&self, #[indexed] asset: &EgldOrEsdtTokenIdentifier);

    // Emitted for both the first registration and every committed edit
    #[event("update_asset_setting")]
    fn update_asset_setting_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] primary_source_id: u64,
        #[indexed] secondary_source_id: u64,
        #[indexed] allowed_divergence_bps: u64,
    );

    #[event("propose_edit")]
    fn propose_edit_event(
        &self,
        #[indexed] edit_hash: &ManagedByteArray<Self::Api, 32>,
        #[indexed] unlock_timestamp: u64,
        proposal: &EditProposal<Self::Api>,
    );

    #[event("commit_edit")]
    fn commit_edit_event(
        &self,
        #[indexed] edit_hash: &ManagedByteArray<Self::Api, 32>,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("cancel_edit")]
    fn cancel_edit_event(
        &self,
        #[indexed] edit_hash: &ManagedByteArray<Self::Api, 32>,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("add_extension")]
    fn add_extension_event(&self, #[indexed] extension: &ManagedAddress);

    #[event("remove_extension")]
    fn remove_extension_event(&self, #[indexed] extension: &ManagedAddress);
}
