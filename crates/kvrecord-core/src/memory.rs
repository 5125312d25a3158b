use crate::{
    backend::{Backend, RecordCursor, Transaction},
    error::BackendError,
};
use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

type TableMap = HashMap<String, Vec<(Vec<u8>, Vec<u8>)>>;

///
/// MemoryBackend
///
/// Reference in-memory backend (spec §4.F): one flat map of table name to
/// a sorted `Vec<(key, value)>`. Point ops binary-search the vector;
/// insertions and deletions shift the tail, which is `O(n)` per write —
/// acceptable for a reference implementation, not for production load.
///
/// Transactions apply writes immediately against the shared table map;
/// there is no MVCC or locking, matching spec §5's admission that this
/// backend is not safe against concurrent read-write transactions.
///
#[derive(Clone, Default)]
pub struct MemoryBackend {
    tables: Rc<RefCell<TableMap>>,
}

impl MemoryBackend {
    /// `path` is accepted for interface parity with spec §4.D's
    /// `open(path) -> Handle` and ignored, as the spec allows for an
    /// in-memory backend.
    #[must_use]
    pub fn open(_path: &str) -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    type Txn = MemoryTxn;

    fn begin(&self, read_only: bool) -> Result<Self::Txn, BackendError> {
        Ok(MemoryTxn {
            tables: Rc::clone(&self.tables),
            read_only,
        })
    }
}

///
/// MemoryTxn
///
/// Writes go straight through to the shared table map as they happen.
/// `abort` is a documented no-op (spec §9, "Backend abort with no
/// rollback") — a production backend must provide true rollback, which
/// this reference implementation explicitly does not attempt.
///
pub struct MemoryTxn {
    tables: Rc<RefCell<TableMap>>,
    read_only: bool,
}

impl MemoryTxn {
    fn require_writable(&self) -> Result<(), BackendError> {
        if self.read_only {
            return Err(BackendError::Io(
                "write attempted on a read-only transaction".to_string(),
            ));
        }
        Ok(())
    }
}

impl Drop for MemoryTxn {
    /// Spec §4.D's `close` becomes ordinary Rust `Drop` rather than an
    /// explicit call: a transaction that is neither `commit`ted nor
    /// `abort`ted releases its handle onto the shared table map here. The
    /// in-memory backend holds no resource beyond the `Rc` itself (no file
    /// descriptor, no lock to release), so there is nothing to do beyond
    /// what the field's own drop glue already performs — this impl exists
    /// to make the close-to-`Drop` translation explicit rather than
    /// implicit.
    fn drop(&mut self) {}
}

impl Transaction for MemoryTxn {
    type Cursor = MemoryCursor;

    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        self.require_writable()?;
        let mut tables = self.tables.borrow_mut();
        let entries = tables.entry(table.to_string()).or_default();
        match entries.binary_search_by(|(k, _)| k.as_slice().cmp(key)) {
            Ok(idx) => entries[idx].1 = value.to_vec(),
            Err(idx) => entries.insert(idx, (key.to_vec(), value.to_vec())),
        }
        Ok(())
    }

    fn get(&self, table: &str, key: &[u8]) -> Result<Vec<u8>, BackendError> {
        let tables = self.tables.borrow();
        let entries = tables.get(table).ok_or(BackendError::NotFound)?;
        match entries.binary_search_by(|(k, _)| k.as_slice().cmp(key)) {
            Ok(idx) => Ok(entries[idx].1.clone()),
            Err(_) => Err(BackendError::NotFound),
        }
    }

    fn del(&mut self, table: &str, key: &[u8]) -> Result<(), BackendError> {
        self.require_writable()?;
        let mut tables = self.tables.borrow_mut();
        let entries = tables.get_mut(table).ok_or(BackendError::NotFound)?;
        match entries.binary_search_by(|(k, _)| k.as_slice().cmp(key)) {
            Ok(idx) => {
                entries.remove(idx);
                Ok(())
            }
            Err(_) => Err(BackendError::NotFound),
        }
    }

    fn cursor(&self, table: &str, start: Option<&[u8]>) -> Result<Self::Cursor, BackendError> {
        let tables = self.tables.borrow();
        let entries = tables.get(table).cloned().unwrap_or_default();
        let index = match start {
            Some(key) => entries.partition_point(|(k, _)| k.as_slice() < key),
            None => 0,
        };
        Ok(MemoryCursor { entries, index })
    }

    fn commit(self) -> Result<(), BackendError> {
        Ok(())
    }

    fn abort(self) -> Result<(), BackendError> {
        // No rollback: writes already landed in the shared table map.
        Ok(())
    }
}

///
/// MemoryCursor
///
/// A snapshot of the table taken at `cursor_open` time plus an integer
/// index into it — the reference backend's answer to spec §4.D/§4.F's
/// "table pointer and integer index". Taking the snapshot up front (rather
/// than a live view into the shared map) sidesteps aliasing a
/// `RefCell`-borrowed table across a cursor's lifetime; since this backend
/// gives no isolation guarantees to begin with (spec §5), a point-in-time
/// snapshot is a reasonable reference-implementation simplification.
///
pub struct MemoryCursor {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    index: usize,
}

impl RecordCursor for MemoryCursor {
    fn current(&self) -> Option<(&[u8], &[u8])> {
        self.entries
            .get(self.index)
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    fn advance(&mut self) -> Result<(), BackendError> {
        if self.index + 1 >= self.entries.len() {
            self.index = self.entries.len();
            return Err(BackendError::NotFound);
        }
        self.index += 1;
        Ok(())
    }
}

impl Drop for MemoryCursor {
    /// Spec §4.D's `cursor_close` becomes `Drop`: the snapshot `Vec` this
    /// cursor owns is freed by the field's own drop glue. This impl
    /// documents that the snapshot is considered released at this point,
    /// rather than leaving the close-to-`Drop` translation implicit.
    fn drop(&mut self) {}
}
