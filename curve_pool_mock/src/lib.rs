#![no_std]

multiversx_sc::imports!();

/// Constant-function pool used in tests. Exposes the views the pool share extension reads.
#[multiversx_sc::contract]
pub trait CurvePoolMock {
    #[init]
    fn init(&self, lp_token: TokenIdentifier, coins: MultiValueEncoded<TokenIdentifier>) {
        self.lp_token_identifier().set(&lp_token);
        self.coins().set(&coins.to_vec());
        self.virtual_price()
            .set(BigUint::from(1_000_000_000_000_000_000u64));
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setVirtualPrice)]
    fn set_virtual_price(&self, virtual_price: BigUint) {
        self.virtual_price().set(virtual_price);
    }

    /// Price of coin `index + 1` expressed in coin 0, WAD scaled.
    #[only_owner]
    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, index: usize, price: BigUint) {
        self.price_oracle(index).set(price);
    }

    #[view(getLpTokenIdentifier)]
    #[storage_mapper("lp_token_identifier")]
    fn lp_token_identifier(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getCoins)]
    #[storage_mapper("coins")]
    fn coins(&self) -> SingleValueMapper<ManagedVec<TokenIdentifier>>;

    #[view(getVirtualPrice)]
    #[storage_mapper("virtual_price")]
    fn virtual_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self, index: usize) -> SingleValueMapper<BigUint>;
}
