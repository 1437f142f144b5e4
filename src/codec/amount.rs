use crate::error::MarshalError;
use candid::Nat;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest decimal exponent the major-unit representation can carry
/// exactly (`rust_decimal` scale limit).
pub const MAX_DECIMALS: u8 = 28;

/// to_major_units
/// `minor / 10^decimals`, exact. Minor amounts beyond the decimal mantissa
/// (96 bits) cannot be represented and are reported, never truncated.
pub fn to_major_units(minor: &Nat, decimals: u8) -> Result<Decimal, MarshalError> {
    check_decimals(decimals)?;

    let units = minor.0.to_i128().ok_or_else(|| mantissa_loss(minor))?;

    Decimal::try_from_i128_with_scale(units, u32::from(decimals))
        .map_err(|_| mantissa_loss(minor))
}

/// to_minor_units
/// `major * 10^decimals`, rounded half-to-even when `major` carries more
/// fractional digits than `decimals` allows. Minor-unit amounts are
/// non-negative; negative majors are rejected.
pub fn to_minor_units(major: Decimal, decimals: u8) -> Result<Nat, MarshalError> {
    check_decimals(decimals)?;

    let factor = Decimal::from_i128_with_scale(10i128.pow(u32::from(decimals)), 0);
    let scaled = major
        .checked_mul(factor)
        .ok_or_else(|| MarshalError::PrecisionLoss {
            value: major.to_string(),
            context: "major amount exceeds the decimal mantissa",
        })?;

    let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    if rounded < Decimal::ZERO {
        return Err(MarshalError::PrecisionLoss {
            value: major.to_string(),
            context: "negative amount has no minor-unit representation",
        });
    }

    let units = rounded.to_u128().ok_or_else(|| MarshalError::PrecisionLoss {
        value: major.to_string(),
        context: "major amount exceeds the minor-unit range",
    })?;

    Ok(Nat::from(units))
}

fn check_decimals(decimals: u8) -> Result<(), MarshalError> {
    if decimals > MAX_DECIMALS {
        return Err(MarshalError::PrecisionLoss {
            value: decimals.to_string(),
            context: "decimal exponent exceeds the representable scale",
        });
    }

    Ok(())
}

fn mantissa_loss(minor: &Nat) -> MarshalError {
    MarshalError::PrecisionLoss {
        value: minor.to_string(),
        context: "minor units exceed the decimal mantissa",
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e8s_convert_to_major_units() {
        let major = to_major_units(&Nat::from(123_450_000u64), 8).unwrap();

        assert_eq!(major, Decimal::new(12_345, 4)); // 1.2345
        assert_eq!(to_minor_units(major, 8).unwrap(), Nat::from(123_450_000u64));
    }

    #[test]
    fn minor_major_minor_is_exact() {
        for minor in [0u64, 1, 99, 10_000_000, u64::MAX] {
            for decimals in [0u8, 2, 8, 12] {
                let nat = Nat::from(minor);
                let major = to_major_units(&nat, decimals).unwrap();

                assert_eq!(to_minor_units(major, decimals).unwrap(), nat);
            }
        }
    }

    #[test]
    fn excess_fraction_rounds_half_to_even() {
        assert_eq!(
            to_minor_units(Decimal::new(25, 1), 0).unwrap(), // 2.5
            Nat::from(2u64)
        );
        assert_eq!(
            to_minor_units(Decimal::new(35, 1), 0).unwrap(), // 3.5
            Nat::from(4u64)
        );
    }

    #[test]
    fn rejects_negative_and_oversized_amounts() {
        assert!(matches!(
            to_minor_units(Decimal::new(-1, 0), 8),
            Err(MarshalError::PrecisionLoss { .. })
        ));

        let oversized = Nat::from(u128::MAX);
        assert!(matches!(
            to_major_units(&oversized, 8),
            Err(MarshalError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn rejects_unrepresentable_exponents() {
        assert!(to_major_units(&Nat::from(1u64), MAX_DECIMALS + 1).is_err());
    }
}
