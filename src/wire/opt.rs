use crate::{error::MarshalError, wire::WireValue};

/// decode_opt
/// Decodes an optional-as-sequence field: a sequence of length 0 is absent,
/// length 1 is present, anything longer is malformed.
pub fn decode_opt<'a>(
    value: &'a WireValue,
    field: &str,
) -> Result<Option<&'a WireValue>, MarshalError> {
    match value.as_seq(field)? {
        [] => Ok(None),
        [inner] => Ok(Some(inner)),
        more => Err(MarshalError::MalformedOptional { len: more.len() }),
    }
}

/// decode_opt_with
/// Mapped form of [`decode_opt`]; the mapper runs only when a value is
/// present and its failure aborts the whole decode.
pub fn decode_opt_with<T, F>(
    value: &WireValue,
    field: &str,
    f: F,
) -> Result<Option<T>, MarshalError>
where
    F: FnOnce(&WireValue) -> Result<T, MarshalError>,
{
    decode_opt(value, field)?.map(f).transpose()
}

/// encode_opt
/// Exact inverse of [`decode_opt`].
#[must_use]
pub fn encode_opt(value: Option<WireValue>) -> WireValue {
    WireValue::Seq(value.into_iter().collect())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_absent_and_present() {
        let absent = encode_opt(None);
        assert_eq!(decode_opt(&absent, "x").unwrap(), None);

        let present = encode_opt(Some(WireValue::nat(9)));
        assert_eq!(decode_opt(&present, "x").unwrap(), Some(&WireValue::nat(9)));
    }

    #[test]
    fn rejects_overlong_sequences() {
        let bad = WireValue::Seq(vec![WireValue::nat(1), WireValue::nat(2)]);

        assert_eq!(
            decode_opt(&bad, "x"),
            Err(MarshalError::MalformedOptional { len: 2 })
        );
    }

    #[test]
    fn mapped_form_propagates_inner_failure() {
        let present = encode_opt(Some(WireValue::text("oops")));
        let result = decode_opt_with(&present, "x", |v| v.as_nat("x").cloned());

        assert!(matches!(result, Err(MarshalError::MalformedRecord { .. })));
    }
}
