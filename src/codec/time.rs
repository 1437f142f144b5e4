use crate::error::MarshalError;
use candid::Nat;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;

/// to_instant
/// Interprets `ticks` as nanoseconds since the Unix epoch. The instant
/// keeps full nanosecond precision (divisor 1, nothing discarded); ticks
/// past the representable range (~year 2262) fail instead of truncating.
pub fn to_instant(ticks: &Nat, context: &'static str) -> Result<DateTime<Utc>, MarshalError> {
    let nanos = ticks.0.to_i64().ok_or_else(|| MarshalError::PrecisionLoss {
        value: ticks.to_string(),
        context,
    })?;

    Ok(DateTime::from_timestamp_nanos(nanos))
}

/// from_instant
/// Inverse of [`to_instant`]. Pre-epoch instants have no non-negative tick
/// representation and are rejected.
pub fn from_instant(instant: DateTime<Utc>) -> Result<Nat, MarshalError> {
    let nanos = instant
        .timestamp_nanos_opt()
        .filter(|nanos| *nanos >= 0)
        .ok_or_else(|| MarshalError::PrecisionLoss {
            value: instant.to_rfc3339(),
            context: "instant outside the nanosecond tick range",
        })?;

    Ok(Nat::from(nanos.unsigned_abs()))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_roundtrip_exactly() {
        let ticks = Nat::from(1_700_000_000_123_456_789u64);
        let instant = to_instant(&ticks, "createdAt").unwrap();

        assert_eq!(instant.timestamp(), 1_700_000_000);
        assert_eq!(from_instant(instant).unwrap(), ticks);
    }

    #[test]
    fn epoch_is_representable() {
        let instant = to_instant(&Nat::from(0u64), "createdAt").unwrap();

        assert_eq!(from_instant(instant).unwrap(), Nat::from(0u64));
    }

    #[test]
    fn rejects_ticks_beyond_the_instant_range() {
        let far_future = Nat::from(u128::from(u64::MAX) * 1_000);

        assert!(matches!(
            to_instant(&far_future, "createdAt"),
            Err(MarshalError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn rejects_pre_epoch_instants() {
        let before = DateTime::from_timestamp(-1, 0).unwrap();

        assert!(matches!(
            from_instant(before),
            Err(MarshalError::PrecisionLoss { .. })
        ));
    }
}
