use crate::{codec::Codec, error::CodecError};
use derive_more::Display;

///
/// Size
///
/// Machine-independent size value. Always encoded as an 8-byte big-endian
/// `u64` regardless of the host's native `usize` width, so serialized
/// records are portable across 32-bit and 64-bit builds.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Size(pub u64);

impl From<u64> for Size {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Size> for u64 {
    fn from(value: Size) -> Self {
        value.0
    }
}

impl Codec for Size {
    fn encoded_len(&self) -> usize {
        self.0.encoded_len()
    }

    fn encode(&self, out: &mut [u8]) {
        self.0.encode(out);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize), CodecError> {
        let (value, n) = u64::decode(input)?;
        Ok((Self(value), n))
    }
}
