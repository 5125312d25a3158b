//! Transactional ordered-KV backend contract, typed indexed-record CRUD
//! with change-detected index maintenance, and a reference in-memory
//! backend (spec §4.D/§4.E/§4.F).
//!
//! [`Indexed`] declares a record's primary key type and secondary-key
//! names; the free functions [`put`], [`get`], [`del`], [`lookup_by`],
//! [`cursor_pk`], [`cursor_by`] implement the typed CRUD algorithms of
//! spec §4.E against any [`Transaction`]. [`IndexedStore`] wraps those same
//! functions with the [`Stats`] counters a production integrator expects.
//! [`MemoryBackend`] is the one reference `Backend` implementation.

mod backend;
mod error;
mod indexed;
mod memory;
mod snapshot;
mod stats;

pub use backend::{Backend, RecordCursor, Transaction};
pub use error::{BackendError, StoreError};
pub use indexed::{Indexed, IndexedStore, PutOutcome, cursor_by, cursor_pk, del, get, lookup_by, put};
pub use memory::{MemoryBackend, MemoryCursor, MemoryTxn};
pub use snapshot::Snapshot;
pub use stats::{Stats, StatsSnapshot};
