use crate::{codec::Codec, error::CodecError};

// Unsigned integers are already order-preserving under big-endian byte
// comparison, so encode/decode is a direct `to_be_bytes`/`from_be_bytes`.
macro_rules! impl_unsigned_codec {
    ($ty:ty, $width:expr) => {
        impl Codec for $ty {
            fn encoded_len(&self) -> usize {
                $width
            }

            fn encode(&self, out: &mut [u8]) {
                out[..$width].copy_from_slice(&self.to_be_bytes());
            }

            fn decode(input: &[u8]) -> Result<(Self, usize), CodecError> {
                if input.len() < $width {
                    return Err(CodecError::BufferTooShort {
                        needed: $width,
                        available: input.len(),
                    });
                }
                let mut buf = [0u8; $width];
                buf.copy_from_slice(&input[..$width]);
                Ok((<$ty>::from_be_bytes(buf), $width))
            }
        }
    };
}

impl_unsigned_codec!(u8, 1);
impl_unsigned_codec!(u16, 2);
impl_unsigned_codec!(u32, 4);
impl_unsigned_codec!(u64, 8);

// Signed integers flip the MSB of their big-endian two's-complement
// representation, biasing the whole range so that byte-lexicographic order
// matches numeric order (the same trick `icydb-core`'s ordered-key encoder
// uses for `Int`/`Int128`: `value.cast_unsigned() ^ sign_bit`).
macro_rules! impl_signed_codec {
    ($ty:ty, $uty:ty, $width:expr) => {
        impl Codec for $ty {
            fn encoded_len(&self) -> usize {
                $width
            }

            fn encode(&self, out: &mut [u8]) {
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                let biased = (*self as $uty) ^ sign_bit;
                out[..$width].copy_from_slice(&biased.to_be_bytes());
            }

            fn decode(input: &[u8]) -> Result<(Self, usize), CodecError> {
                if input.len() < $width {
                    return Err(CodecError::BufferTooShort {
                        needed: $width,
                        available: input.len(),
                    });
                }
                let mut buf = [0u8; $width];
                buf.copy_from_slice(&input[..$width]);
                let sign_bit: $uty = 1 << (<$uty>::BITS - 1);
                let biased = <$uty>::from_be_bytes(buf);
                Ok(((biased ^ sign_bit) as $ty, $width))
            }
        }
    };
}

impl_signed_codec!(i8, u8, 1);
impl_signed_codec!(i16, u16, 2);
impl_signed_codec!(i32, u32, 4);
impl_signed_codec!(i64, u64, 8);
