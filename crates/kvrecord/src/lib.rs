//! `kvrecord` — a declarative, schema-driven serialization and indexed
//! key-value storage layer for record types.
//!
//! A user declares a record as an ordered Rust struct whose fields are
//! primitive (or composite) codec types; [`kvrecord_schema::impl_scalar_record`]
//! (or a hand-composed [`Codec`] impl, for records with a `VAR_ARRAY`
//! field) produces a length-deterministic binary encoder/decoder for the
//! whole record. [`Indexed`] declares the record's primary key and
//! secondary-key names; the free functions re-exported here ([`put`],
//! [`get`], [`del`], [`lookup_by`], [`cursor_pk`], [`cursor_by`]) implement
//! typed CRUD against any [`Transaction`], keeping secondary indexes
//! consistent with primary records through change detection against a
//! [`Snapshot`] of the prior values.
//!
//! This crate is the integration point: it re-exports the three layers
//! (`kvrecord-primitives`, `kvrecord-schema`, `kvrecord-core`) as one
//! public API and ships the end-to-end scenario tests of spec §8 under
//! `tests/`.

pub use kvrecord_core::{
    Backend, BackendError, Indexed, IndexedStore, MemoryBackend, MemoryCursor, MemoryTxn,
    PutOutcome, RecordCursor, Snapshot, Stats, StatsSnapshot, StoreError, Transaction, cursor_by,
    cursor_pk, del, get, lookup_by, put,
};
pub use kvrecord_primitives::{CharPtr, Codec, CodecError, Size, Timespec, decode_exact, encode_to_vec};
pub use kvrecord_schema::{KeyOf, SchemaHooks, decode_var_array, encode_var_array, encoded_len_var_array, impl_scalar_record};

/// Convenience re-export for `use kvrecord::prelude::*;`.
pub mod prelude {
    pub use crate::{
        Backend, BackendError, CharPtr, Codec, CodecError, Indexed, IndexedStore, KeyOf,
        MemoryBackend, RecordCursor, SchemaHooks, Size, Snapshot, StoreError, Timespec,
        Transaction, cursor_by, cursor_pk, decode_exact, del, encode_to_vec, get, impl_scalar_record,
        lookup_by, put,
    };
}
