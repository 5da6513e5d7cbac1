multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::LpCurve;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LpPoolConfig<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub pool: ManagedAddress<M>,
    pub curve: LpCurve,
    pub coins: ManagedVec<M, TokenIdentifier<M>>,
}

#[multiversx_sc::module]
pub trait Storage {
    #[view(getOracle)]
    #[storage_mapper("oracle")]
    fn oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPoolConfig)]
    #[storage_mapper("pool_config")]
    fn pool_config(&self, source_id: u64) -> SingleValueMapper<LpPoolConfig<Self::Api>>;
}
