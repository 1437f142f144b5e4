use crate::{error::MarshalError, wire::WireValue};

/// decode_variant
/// Decodes a single-key tagged object against a closed tag set. The object
/// must carry exactly one key and that key must be one of `tags`; the
/// returned tag borrows from `tags` so callers can match on it
/// exhaustively. The payload is the key's value (`Null` for unit cases).
pub fn decode_variant<'a, 't>(
    value: &'a WireValue,
    field: &str,
    tags: &'t [&'static str],
) -> Result<(&'t str, &'a WireValue), MarshalError> {
    let map = value.as_record(field)?;

    let unrecognized = || MarshalError::UnrecognizedVariant {
        expected: tags.join(" | "),
        found: map.keys().cloned().collect::<Vec<_>>().join(", "),
    };

    if map.len() != 1 {
        return Err(unrecognized());
    }

    let Some((key, payload)) = map.iter().next() else {
        return Err(unrecognized());
    };

    let tag = tags
        .iter()
        .find(|tag| **tag == key.as_str())
        .ok_or_else(unrecognized)?;

    Ok((tag, payload))
}

/// encode_variant
/// Builds the single-key object for `tag`; tags without a payload carry the
/// unit marker.
#[must_use]
pub fn encode_variant(tag: &'static str, payload: Option<WireValue>) -> WireValue {
    WireValue::record([(tag, payload.unwrap_or(WireValue::Null))])
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: [&str; 3] = ["A", "B", "C"];

    #[test]
    fn decodes_each_known_tag() {
        for tag in TAGS {
            let encoded = encode_variant(tag, None);
            let (decoded, payload) = decode_variant(&encoded, "v", &TAGS).unwrap();

            assert_eq!(decoded, tag);
            assert_eq!(payload, &WireValue::Null);
        }
    }

    #[test]
    fn carries_payloads_through() {
        let encoded = encode_variant("B", Some(WireValue::nat(12)));
        let (tag, payload) = decode_variant(&encoded, "v", &TAGS).unwrap();

        assert_eq!(tag, "B");
        assert_eq!(payload, &WireValue::nat(12));
    }

    #[test]
    fn rejects_empty_unknown_and_ambiguous_objects() {
        let empty = WireValue::record([]);
        let unknown = encode_variant("D", None);
        let ambiguous = WireValue::record([("A", WireValue::Null), ("B", WireValue::Null)]);

        for bad in [empty, unknown, ambiguous] {
            assert!(matches!(
                decode_variant(&bad, "v", &TAGS),
                Err(MarshalError::UnrecognizedVariant { .. })
            ));
        }
    }
}
