use crate::{codec::Codec, error::CodecError};

const NSEC_BITS: u32 = 30;
const NSEC_MASK: i64 = (1i64 << NSEC_BITS) - 1;

///
/// Timespec
///
/// Wall-clock instant: signed seconds plus nanoseconds in `[0, 2^30)`. The
/// legal range for `sec` is `[-2^33, 2^33)`; out-of-range values are
/// truncated to their bitfields rather than rejected, matching the source
/// ("by design, matches the source" — spec §4.A).
///
/// `sec` and `nsec` are packed into the high 34 bits and low 30 bits of one
/// `i64` (`sec * 2^30 + nsec`), then encoded with the same sign-bit-flip
/// `i64` codec already used for plain signed integers — the packed value is
/// exactly the two's-complement integer that orders the same way the pair
/// `(sec, nsec)` orders chronologically, so no separate order-preservation
/// logic is needed here.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Timespec {
    pub sec: i64,
    pub nsec: u32,
}

impl Timespec {
    #[must_use]
    pub const fn new(sec: i64, nsec: u32) -> Self {
        Self { sec, nsec }
    }
}

impl Codec for Timespec {
    fn encoded_len(&self) -> usize {
        8
    }

    fn encode(&self, out: &mut [u8]) {
        let nsec_bits = i64::from(self.nsec) & NSEC_MASK;
        let combined = (self.sec << NSEC_BITS) | nsec_bits;
        combined.encode(out);
    }

    fn decode(input: &[u8]) -> Result<(Self, usize), CodecError> {
        let (combined, n) = i64::decode(input)?;
        let nsec = (combined & NSEC_MASK) as u32;
        let sec = combined >> NSEC_BITS;
        Ok((Self { sec, nsec }, n))
    }
}
