#![no_std]

use common_constants::{
    BPS, CUBE_ROOT_RELATIVE_TOLERANCE, MAX_CUBE_ROOT_ITERATIONS, WAD, WAD_PRECISION,
};
use common_errors::ERROR_CUBE_ROOT_NOT_CONVERGED;

multiversx_sc::imports!();

/// Fixed-point helpers. Every operation truncates toward zero, so derived prices never round up.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    /// `value * numerator / denominator` on raw integers.
    fn mul_div_down(&self, value: &BigUint, numerator: &BigUint, denominator: &BigUint) -> BigUint {
        value * numerator / denominator
    }

    /// `value * (100% - bps)`, the lowest value still within `bps` of `value`.
    fn apply_haircut_bps(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        bps: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let kept = BigUint::from(BPS - bps.min(BPS));
        let raw = self.mul_div_down(value.into_raw_units(), &kept, &BigUint::from(BPS));

        self.to_decimal(raw, value.scale())
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn wad(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    /// Raw amount with `decimals` places converted to a WAD decimal, truncating extra places.
    fn raw_to_wad(
        &self,
        value: BigUint,
        decimals: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, decimals).rescale(WAD_PRECISION)
    }

    fn get_min(
        self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(
        self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a
        } else {
            b
        }
    }

    /// Cube root of a WAD value, WAD scaled: `cbrt(x * 1e36)`.
    fn cube_root_wad(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.cube_root_wad_bounded(
            value.rescale(WAD_PRECISION).into_raw_units(),
            MAX_CUBE_ROOT_ITERATIONS,
        );

        self.to_decimal_wad(raw)
    }

    /// Newton iteration `y = (2y + t / y^2) / 3` on `t = x * 1e36`, starting above the root.
    /// Stops once two iterates differ by at most 1 unit or by less than 1e-18 relative.
    /// Hitting `max_iterations` is a hard failure.
    fn cube_root_wad_bounded(&self, x: &BigUint, max_iterations: usize) -> BigUint {
        if x == &BigUint::zero() {
            return BigUint::zero();
        }

        let wad = BigUint::from(WAD);
        let target = x * &wad * &wad;
        let one = BigUint::from(1u64);
        let two = BigUint::from(2u64);
        let three = BigUint::from(3u64);
        let tolerance = BigUint::from(CUBE_ROOT_RELATIVE_TOLERANCE);

        let mut guess = one.clone();
        while &guess * &guess * &guess < target {
            guess *= &two;
        }

        for _ in 0..max_iterations {
            let next = (&guess * &two + &target / &(&guess * &guess)) / &three;
            let diff = if next > guess {
                &next - &guess
            } else {
                &guess - &next
            };

            if diff <= one || &diff * &tolerance < next {
                return next;
            }

            guess = next;
        }

        sc_panic!(ERROR_CUBE_ROOT_NOT_CONVERGED)
    }
}
