use crate::{codec::Codec, error::CodecError};

// `FIXED_ARRAY(name, tag, count)` from spec §3: an inline array of known
// compile-time count, encoded as `count` consecutive elements with no
// length prefix. A Rust array length is already compile-time known, so the
// const-generic blanket impl below is the direct translation.
impl<T: Codec + Copy + Default, const N: usize> Codec for [T; N] {
    fn encoded_len(&self) -> usize {
        self.iter().map(Codec::encoded_len).sum()
    }

    fn encode(&self, out: &mut [u8]) {
        let mut offset = 0;
        for item in self {
            item.encode(&mut out[offset..]);
            offset += item.encoded_len();
        }
    }

    fn decode(input: &[u8]) -> Result<(Self, usize), CodecError> {
        let mut offset = 0;
        let mut items = [T::default(); N];
        for slot in &mut items {
            let (value, n) = T::decode(&input[offset..])?;
            *slot = value;
            offset += n;
        }
        Ok((items, offset))
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{decode_exact, encode_to_vec};

    #[test]
    fn roundtrip_fixed_array() {
        let value: [u16; 4] = [10, 20, 30, 40];
        let bytes = encode_to_vec(&value);
        assert_eq!(bytes.len(), 8);
        assert_eq!(decode_exact::<[u16; 4]>(&bytes).unwrap(), value);
    }
}
