use kvrecord_primitives::CodecError;
use thiserror::Error as ThisError;

///
/// BackendError
///
/// Failure surfaced by a `Backend`/`Transaction` implementation (spec
/// §4.D). `NotFound` is the expected outcome of a missing-key `get`/`del`,
/// not an I/O failure — it is still returned through `Result` because Rust
/// has no separate "expected absence" channel, but callers should not treat
/// it as exceptional.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BackendError {
    #[error("key not found")]
    NotFound,

    #[error("key already exists")]
    Exists,

    #[error("backend io error: {0}")]
    Io(String),
}

///
/// StoreError
///
/// Failure surfaced by the indexed-record layer (spec §7). Codec failures
/// and backend failures are disjoint recovery stories — a malformed record
/// can't be retried, a backend I/O error might be — so they stay separate
/// variants rather than one grab-bag enum, mirroring the teacher's own
/// split between a store-level and an internal error type.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("not found")]
    NotFound,

    #[error("malformed encoding: {0}")]
    Malformed(#[from] CodecError),

    #[error(transparent)]
    Backend(BackendError),
}

impl StoreError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<BackendError> for StoreError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound => Self::NotFound,
            other => Self::Backend(other),
        }
    }
}
