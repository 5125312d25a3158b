use kvrecord_primitives::{Codec, CodecError};

///
/// Helpers for `VAR_ARRAY(name, element_schema, count_expr)` fields (spec
/// §3/§4.B): an array whose element count is carried by an earlier sibling
/// field rather than a self-describing length prefix. Because the count
/// lives outside the array's own bytes, a blanket `Codec` impl for `Vec<T>`
/// would be wrong here (it would need to invent its own prefix) — these
/// free functions are composed by hand into a record's `Codec::decode`,
/// where the count field has already been read.
///

/// Byte count of `items` encoded back to back, with no length prefix.
pub fn encoded_len_var_array<T: Codec>(items: &[T]) -> usize {
    items.iter().map(Codec::encoded_len).sum()
}

/// Write `items` back to back into `out`, advancing past each element.
pub fn encode_var_array<T: Codec>(items: &[T], out: &mut [u8]) {
    let mut offset = 0;
    for item in items {
        item.encode(&mut out[offset..]);
        offset += item.encoded_len();
    }
}

/// Read exactly `count` elements from the front of `input`. A `count` of
/// zero yields an empty `Vec` and leaves the cursor unchanged, per spec
/// §4.B.
pub fn decode_var_array<T: Codec>(
    input: &[u8],
    count: usize,
) -> Result<(Vec<T>, usize), CodecError> {
    let mut offset = 0;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let (value, consumed) = T::decode(&input[offset..])?;
        items.push(value);
        offset += consumed;
    }
    Ok((items, offset))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Round-trip holds for any count and any element values (spec §8).
        #[test]
        fn roundtrip(values in proptest::collection::vec(any::<u32>(), 0..32)) {
            let mut buf = vec![0u8; encoded_len_var_array(&values)];
            encode_var_array(&values, &mut buf);
            let (decoded, consumed) = decode_var_array::<u32>(&buf, values.len()).unwrap();
            prop_assert_eq!(consumed, buf.len());
            prop_assert_eq!(decoded, values);
        }

        /// Decoding stops exactly at `count` elements regardless of what
        /// trailing bytes follow in the buffer.
        #[test]
        fn ignores_trailing_bytes(
            values in proptest::collection::vec(any::<u16>(), 0..32),
            trailing in proptest::collection::vec(any::<u8>(), 0..8),
        ) {
            let mut buf = vec![0u8; encoded_len_var_array(&values)];
            encode_var_array(&values, &mut buf);
            buf.extend(trailing);
            let (decoded, consumed) = decode_var_array::<u16>(&buf, values.len()).unwrap();
            prop_assert_eq!(decoded, values);
            prop_assert_eq!(consumed, encoded_len_var_array(&values));
        }
    }
}
