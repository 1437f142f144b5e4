use crate::error::MarshalError;
use candid::{Int, Nat};
use num_traits::ToPrimitive;

//
// Checked promotion of arbitrary-precision wire integers into the domain's
// bounded types. The source UI coerced these into 64-bit floats without a
// range check; here an out-of-range value is always reported.
//

pub fn nat_to_u64(value: &Nat, context: &'static str) -> Result<u64, MarshalError> {
    value.0.to_u64().ok_or_else(|| MarshalError::PrecisionLoss {
        value: value.to_string(),
        context,
    })
}

pub fn nat_to_u128(value: &Nat, context: &'static str) -> Result<u128, MarshalError> {
    value.0.to_u128().ok_or_else(|| MarshalError::PrecisionLoss {
        value: value.to_string(),
        context,
    })
}

pub fn int_to_i64(value: &Int, context: &'static str) -> Result<i64, MarshalError> {
    value.0.to_i64().ok_or_else(|| MarshalError::PrecisionLoss {
        value: value.to_string(),
        context,
    })
}

///
/// TESTS
///
