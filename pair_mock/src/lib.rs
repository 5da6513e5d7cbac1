#![no_std]

multiversx_sc::imports!();

use common_structs::PairState;

/// Two-token DEX pair used in tests, keeping the storage layout of the real pair.
/// It also serves the safe price view, quoting any pair it is pointed at from that pair's reserves.
#[multiversx_sc::contract]
pub trait PairMock {
    #[init]
    fn init(&self, first_token_id: TokenIdentifier, second_token_id: TokenIdentifier) {
        self.first_token_id().set(&first_token_id);
        self.second_token_id().set(&second_token_id);
        self.state().set(PairState::Active);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setReserves)]
    fn set_reserves(&self, first_reserve: BigUint, second_reserve: BigUint) {
        self.pair_reserve(&self.first_token_id().get())
            .set(first_reserve);
        self.pair_reserve(&self.second_token_id().get())
            .set(second_reserve);
    }

    #[only_owner]
    #[endpoint(setState)]
    fn set_state(&self, state: PairState) {
        self.state().set(state);
    }

    /// Spot quote of `input_payment` against the reserves of `pair_address`.
    #[view(getSafePriceByTimestampOffset)]
    fn get_safe_price_by_timestamp_offset(
        &self,
        pair_address: ManagedAddress,
        _timestamp_offset: u64,
        input_payment: EsdtTokenPayment,
    ) -> EsdtTokenPayment {
        let first_token = self.first_token_id_of(pair_address.clone()).get();
        let second_token = self.second_token_id_of(pair_address.clone()).get();

        let output_token = if input_payment.token_identifier == first_token {
            second_token
        } else if input_payment.token_identifier == second_token {
            first_token
        } else {
            sc_panic!("Invalid input token")
        };

        let reserve_in = self
            .reserve_of(pair_address.clone(), &input_payment.token_identifier)
            .get();
        let reserve_out = self.reserve_of(pair_address, &output_token).get();

        let amount = if reserve_in == BigUint::zero() {
            BigUint::zero()
        } else {
            input_payment.amount * reserve_out / reserve_in
        };

        EsdtTokenPayment::new(output_token, 0, amount)
    }

    #[view(getFirstTokenId)]
    #[storage_mapper("first_token_id")]
    fn first_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getSecondTokenId)]
    #[storage_mapper("second_token_id")]
    fn second_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getState)]
    #[storage_mapper("state")]
    fn state(&self) -> SingleValueMapper<PairState>;

    #[view(getReserve)]
    #[storage_mapper("reserve")]
    fn pair_reserve(&self, token_id: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper_from_address("first_token_id")]
    fn first_token_id_of(
        &self,
        pair_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("second_token_id")]
    fn second_token_id_of(
        &self,
        pair_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("reserve")]
    fn reserve_of(
        &self,
        pair_address: ManagedAddress,
        token_id: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;
}
