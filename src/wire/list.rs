use crate::{
    error::MarshalError,
    wire::{WireValue, decode_opt, encode_opt},
};

/// decode_list_with
/// Unpacks a cons-list (nested `[head, tail]` pairs behind an optional
/// wrapper, terminated by the empty marker), applying `f` to each head.
/// Element order is preserved. The unpack loop carries a step counter
/// bounded by the input's node count, so any properly terminated list
/// decodes in full while wire data that never reaches the empty marker
/// fails with `ListCycle`.
pub fn decode_list_with<T, F>(
    value: &WireValue,
    field: &str,
    f: F,
) -> Result<Vec<T>, MarshalError>
where
    F: FnMut(&WireValue) -> Result<T, MarshalError>,
{
    decode_list_bounded(value, field, node_count(value), f)
}

fn decode_list_bounded<T, F>(
    value: &WireValue,
    field: &str,
    bound: usize,
    mut f: F,
) -> Result<Vec<T>, MarshalError>
where
    F: FnMut(&WireValue) -> Result<T, MarshalError>,
{
    let mut items = Vec::new();
    let mut cursor = value;

    for _ in 0..bound {
        let Some(pair) = decode_opt(cursor, field)? else {
            return Ok(items);
        };

        let [head, tail] = pair.as_seq(field)? else {
            return Err(MarshalError::malformed(field, "a [head, tail] cons pair"));
        };

        items.push(f(head)?);
        cursor = tail;
    }

    Err(MarshalError::ListCycle { steps: bound })
}

// Iterative node count (explicit stack, no recursion into the tree). Every
// unpack step descends past at least two nodes, so the count is a safe
// termination bound proportional to input size.
fn node_count(value: &WireValue) -> usize {
    let mut count = 0;
    let mut stack = vec![value];

    while let Some(node) = stack.pop() {
        count += 1;
        match node {
            WireValue::Seq(items) => stack.extend(items.iter()),
            WireValue::Record(map) => stack.extend(map.values()),
            _ => {}
        }
    }

    count
}

/// encode_list
/// Exact inverse of [`decode_list_with`]: builds the nested pair structure
/// from the back of the sequence; an empty input yields the empty marker
/// directly.
#[must_use]
pub fn encode_list(items: Vec<WireValue>) -> WireValue {
    let mut list = encode_opt(None);

    for item in items.into_iter().rev() {
        list = encode_opt(Some(WireValue::Seq(vec![item, list])));
    }

    list
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_texts(value: &WireValue) -> Result<Vec<String>, MarshalError> {
        decode_list_with(value, "items", |v| Ok(v.as_text("items")?.to_string()))
    }

    #[test]
    fn roundtrips_preserving_order() {
        let encoded = encode_list(vec![
            WireValue::text("p1"),
            WireValue::text("p2"),
            WireValue::text("p3"),
        ]);

        assert_eq!(decode_texts(&encoded).unwrap(), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn empty_list_is_the_empty_marker() {
        let encoded = encode_list(Vec::new());

        assert_eq!(encoded, WireValue::Seq(Vec::new()));
        assert!(decode_texts(&encoded).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_pairs() {
        let bad = encode_opt(Some(WireValue::Seq(vec![WireValue::text("lonely")])));

        assert!(matches!(
            decode_texts(&bad),
            Err(MarshalError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn long_terminated_lists_decode_in_full() {
        let len = 10_001usize;
        let mut long = encode_list(vec![WireValue::nat(1); len]);
        let decoded = decode_list_with(&long, "items", |v| v.as_nat("items").cloned()).unwrap();

        assert_eq!(decoded.len(), len);

        // Unwind the nesting by hand; dropping 10k+ levels recursively would
        // exhaust the test thread's stack.
        while let WireValue::Seq(mut items) = long {
            long = items.pop().unwrap_or(WireValue::Null);
        }
    }

    #[test]
    fn exhausting_the_step_bound_fails_as_a_cycle() {
        let encoded = encode_list(vec![WireValue::nat(0); 3]);
        let result = decode_list_bounded(&encoded, "items", 2, |v| v.as_nat("items").cloned());

        assert_eq!(result, Err(MarshalError::ListCycle { steps: 2 }));
    }
}
