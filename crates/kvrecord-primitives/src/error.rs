use thiserror::Error as ThisError;

///
/// CodecError
///
/// Failure surfaced while decoding primitive or composite bytes. Encoding is
/// infallible given a large-enough output buffer (the `Codec` contract), so
/// this enum only covers the decode direction plus the one `Malformed`
/// escape hatch for composite schemas that want to reject truncated input
/// instead of the undefined behavior the source format allows.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CodecError {
    #[error("buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort { needed: usize, available: usize },

    #[error("malformed encoding: {0}")]
    Malformed(&'static str),
}
