#![no_std]

multiversx_sc::imports!();

use common_structs::FeedRound;

/// Direct price feed used in tests. Publishes one answer at a time, pausable by the owner.
#[multiversx_sc::contract]
pub trait FeedMock: multiversx_sc_modules::pause::PauseModule {
    #[init]
    fn init(&self, decimals: usize, min_answer: BigUint, max_answer: BigUint) {
        self.decimals().set(decimals);
        self.answer_bounds().set((min_answer, max_answer));
        self.latest_round().set(FeedRound {
            round_id: 0,
            answer: BigUint::zero(),
            updated_at: 0,
        });
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setLatestAnswer)]
    fn set_latest_answer(&self, answer: BigUint, updated_at: u64) {
        self.latest_round().update(|round| {
            round.round_id += 1;
            round.answer = answer;
            round.updated_at = updated_at;
        });
    }

    #[view(latestRoundData)]
    fn latest_round_data(&self) -> FeedRound<Self::Api> {
        self.latest_round().get()
    }

    #[view(getAnswerBounds)]
    fn get_answer_bounds(&self) -> MultiValue2<BigUint, BigUint> {
        self.answer_bounds().get().into()
    }

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<usize>;

    #[storage_mapper("answer_bounds")]
    fn answer_bounds(&self) -> SingleValueMapper<(BigUint, BigUint)>;

    #[storage_mapper("latest_round")]
    fn latest_round(&self) -> SingleValueMapper<FeedRound<Self::Api>>;
}
