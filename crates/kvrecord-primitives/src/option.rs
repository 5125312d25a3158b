use crate::{codec::Codec, error::CodecError};

// Absent/present sub-structures (spec §4.B) are `Option<T>` in Rust — a
// textbook sum type, per Design Notes §9 — with the 0/1 discriminator byte
// as its serialization.
impl<T: Codec> Codec for Option<T> {
    fn encoded_len(&self) -> usize {
        1 + self.as_ref().map_or(0, Codec::encoded_len)
    }

    fn encode(&self, out: &mut [u8]) {
        match self {
            None => out[0] = 0,
            Some(value) => {
                out[0] = 1;
                value.encode(&mut out[1..]);
            }
        }
    }

    fn decode(input: &[u8]) -> Result<(Self, usize), CodecError> {
        if input.is_empty() {
            return Err(CodecError::BufferTooShort {
                needed: 1,
                available: 0,
            });
        }
        match input[0] {
            0 => Ok((None, 1)),
            1 => {
                let (value, n) = T::decode(&input[1..])?;
                Ok((Some(value), 1 + n))
            }
            _ => Err(CodecError::Malformed("invalid optional discriminator byte")),
        }
    }
}
