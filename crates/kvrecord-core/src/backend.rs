use crate::error::BackendError;

///
/// Backend
///
/// Opens transactions against a named set of ordered-KV tables (spec
/// §4.D). The source's `open(path) -> Handle` / `close(handle)` pair
/// collapses to a constructor plus `Drop` — idiomatic Rust RAII replaces
/// the explicit close operation the C-shaped spec lists.
///
pub trait Backend {
    type Txn: Transaction;

    /// Start a transaction. Nested transactions are not supported (spec
    /// §4.D); a backend that cannot satisfy `read_only` exactly may widen
    /// it, but must never grant writes when `read_only` is requested.
    fn begin(&self, read_only: bool) -> Result<Self::Txn, BackendError>;
}

///
/// Transaction
///
/// All point operations and cursors happen inside one `Transaction`;
/// calling any operation without one is a programming error the type
/// system rules out by construction. `commit`/`abort` consume `self`,
/// which is what makes "an operation outside a transaction" inexpressible
/// — there is no transaction handle left to call after either.
///
pub trait Transaction: Sized {
    type Cursor: RecordCursor;

    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), BackendError>;

    /// `NotFound`, not an error, when `key` is absent from `table`.
    fn get(&self, table: &str, key: &[u8]) -> Result<Vec<u8>, BackendError>;

    /// `NotFound`, not an error, when `key` is absent from `table`.
    fn del(&mut self, table: &str, key: &[u8]) -> Result<(), BackendError>;

    /// Position a cursor at the first key `>= start` (or at the beginning
    /// of `table` if `start` is omitted).
    fn cursor(&self, table: &str, start: Option<&[u8]>) -> Result<Self::Cursor, BackendError>;

    fn commit(self) -> Result<(), BackendError>;

    /// Discards writes made in this transaction where the backend supports
    /// rollback. The reference in-memory backend cannot undo already-
    /// applied writes and documents `abort` there as a no-op (spec §9).
    fn abort(self) -> Result<(), BackendError>;
}

///
/// RecordCursor
///
/// A positioned iterator over one table within one transaction. Cursors
/// yield entries in strictly ascending byte-lexicographic key order (spec
/// §4.D); `advance` past the last entry returns `NotFound` and leaves the
/// cursor exhausted.
///
pub trait RecordCursor {
    fn current(&self) -> Option<(&[u8], &[u8])>;

    fn advance(&mut self) -> Result<(), BackendError>;
}
