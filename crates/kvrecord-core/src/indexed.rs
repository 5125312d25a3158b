use crate::{
    backend::Transaction,
    error::StoreError,
    snapshot::Snapshot,
    stats::{Stats, StatsSnapshot},
};
use kvrecord_primitives::{Codec, decode_exact, encode_to_vec};
use kvrecord_schema::KeyOf;
use std::marker::PhantomData;

///
/// Indexed
///
/// A record type with a declared primary key and zero or more secondary
/// keys (spec §3/§4.E). `TABLE` names the record's own table prefix;
/// `SECONDARY_NAMES` lists the declared secondary-key names in the fixed
/// order a [`Snapshot`] bundle is framed in. Secondary keys are
/// heterogeneous in field composition across records, so rather than one
/// trait per secondary key this crate asks only for their already-encoded
/// bytes plus declared name — table naming and lookups never need the
/// original typed value once a key has been extracted and serialized.
///
pub trait Indexed: Codec {
    type Pk: KeyOf<Self>;

    const TABLE: &'static str;
    const SECONDARY_NAMES: &'static [&'static str];

    fn secondary_keys(&self) -> Vec<(&'static str, Vec<u8>)>;

    #[must_use]
    fn pk_table() -> String {
        format!("{}_pk", Self::TABLE)
    }

    #[must_use]
    fn secondary_table(name: &str) -> String {
        format!("{}_{name}", Self::TABLE)
    }
}

///
/// PutOutcome
///
/// How many secondary-index entries a `put` call inserted or removed —
/// threaded back out so [`IndexedStore`] can fold it into [`Stats`]
/// without the free `put` function needing to know about stats at all.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PutOutcome {
    pub index_inserts: u64,
    pub index_removes: u64,
}

/// Delete `table`/`key` if present, treating absence as success. The
/// `put` algorithm's stale-index cleanup (spec §4.E step 3) is
/// best-effort: an entry that was never written cannot be "stale".
fn del_if_present<T: Transaction>(txn: &mut T, table: &str, key: &[u8]) -> Result<bool, StoreError> {
    match txn.del(table, key) {
        Ok(()) => Ok(true),
        Err(err) => {
            let err: StoreError = err.into();
            if err.is_not_found() {
                Ok(false)
            } else {
                Err(err)
            }
        }
    }
}

/// Insert or replace `record` (spec §4.E `put`). When `prior` is `Some`,
/// it must be the [`Snapshot`] captured by an earlier `get` of the same
/// logical record — `put` diffs the new keys against it and deletes any
/// secondary (and, if the primary key itself changed, primary) entry that
/// is no longer produced. When `prior` is `None` the caller asserts insert
/// semantics: no stale-entry cleanup is attempted, and it is the caller's
/// responsibility to avoid orphaning a previous version's secondary
/// entries (spec §4.E).
pub fn put<R, T>(
    txn: &mut T,
    record: &R,
    prior: Option<&Snapshot<R>>,
) -> Result<PutOutcome, StoreError>
where
    R: Indexed,
    T: Transaction,
{
    let new_snapshot = Snapshot::capture(record);
    let mut outcome = PutOutcome::default();

    if let Some(prior) = prior {
        if prior.pk_bytes() != new_snapshot.pk_bytes() {
            if del_if_present(txn, &R::pk_table(), prior.pk_bytes())? {
                outcome.index_removes += 1;
            }
        }
        for ((name, prev_bytes), (_, new_bytes)) in
            prior.secondary_bytes().iter().zip(new_snapshot.secondary_bytes().iter())
        {
            if prev_bytes != new_bytes
                && del_if_present(txn, &R::secondary_table(name), prev_bytes)?
            {
                outcome.index_removes += 1;
            }
        }
    }

    let value = encode_to_vec(record);
    txn.put(&R::pk_table(), new_snapshot.pk_bytes(), &value)?;

    for (name, sk_bytes) in new_snapshot.secondary_bytes() {
        txn.put(&R::secondary_table(name), sk_bytes, new_snapshot.pk_bytes())?;
        outcome.index_inserts += 1;
    }

    Ok(outcome)
}

/// Look up a record by primary key (spec §4.E `get`). When `capture` is
/// `true` the returned [`Snapshot`] can be passed as `prior` to a later
/// `put`, enabling change detection for a read-modify-write cycle.
pub fn get<R, T>(
    txn: &T,
    pk: &R::Pk,
    capture: bool,
) -> Result<(R, Option<Snapshot<R>>), StoreError>
where
    R: Indexed,
    T: Transaction,
{
    let pk_bytes = encode_to_vec(pk);
    let raw = txn.get(&R::pk_table(), &pk_bytes)?;
    let record: R = decode_exact(&raw)?;
    let snapshot = capture.then(|| Snapshot::capture(&record));
    Ok((record, snapshot))
}

/// Delete a record and cascade through its secondary entries (spec §4.E
/// `del`, adopting the spec's own recommended cascade resolution — see
/// DESIGN.md). The record is read first so its secondary keys can be
/// re-derived; a `del` of an already-absent primary key returns
/// `NotFound`, matching `get`'s contract.
pub fn del<R, T>(txn: &mut T, pk: &R::Pk) -> Result<(), StoreError>
where
    R: Indexed,
    T: Transaction,
{
    let (record, _) = get::<R, T>(txn, pk, false)?;
    let snapshot = Snapshot::capture(&record);
    for (name, sk_bytes) in snapshot.secondary_bytes() {
        del_if_present(txn, &R::secondary_table(name), sk_bytes)?;
    }
    txn.del(&R::pk_table(), snapshot.pk_bytes())?;
    Ok(())
}

/// Resolve a secondary key to the primary key of the record it was
/// extracted from (spec §4.E `lookup_by_Sᵢ`).
pub fn lookup_by<R, S, T>(txn: &T, sk: &S) -> Result<R::Pk, StoreError>
where
    R: Indexed,
    S: KeyOf<R>,
    T: Transaction,
{
    let sk_bytes = encode_to_vec(sk);
    let raw = txn.get(&R::secondary_table(S::NAME), &sk_bytes)?;
    Ok(decode_exact(&raw)?)
}

/// A cursor over the primary table, positioned at `start` if given.
pub fn cursor_pk<R, T>(txn: &T, start: Option<&R::Pk>) -> Result<T::Cursor, StoreError>
where
    R: Indexed,
    T: Transaction,
{
    let start_bytes = start.map(encode_to_vec);
    Ok(txn.cursor(&R::pk_table(), start_bytes.as_deref())?)
}

/// A cursor over one secondary table, positioned at `start` if given.
/// Values at each position are the raw encoded primary key; the caller
/// decodes with `R::Pk::decode`.
pub fn cursor_by<R, S, T>(txn: &T, start: Option<&S>) -> Result<T::Cursor, StoreError>
where
    R: Indexed,
    S: KeyOf<R>,
    T: Transaction,
{
    let start_bytes = start.map(encode_to_vec);
    Ok(txn.cursor(&R::secondary_table(S::NAME), start_bytes.as_deref())?)
}

///
/// IndexedStore
///
/// A generic, stats-tracking façade over the free functions above — the
/// `IndexedStore<R>` of Design Notes §9, parameterized on a record type
/// and wrapping each call with the [`Stats`] counters an integrator would
/// otherwise have to maintain by hand.
///
pub struct IndexedStore<R> {
    stats: Stats,
    _record: PhantomData<fn() -> R>,
}

impl<R> std::fmt::Debug for IndexedStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedStore").field("stats", &self.stats).finish()
    }
}

impl<R> Default for IndexedStore<R> {
    fn default() -> Self {
        Self {
            stats: Stats::default(),
            _record: PhantomData,
        }
    }
}

impl<R: Indexed> IndexedStore<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn put<T: Transaction>(
        &self,
        txn: &mut T,
        record: &R,
        prior: Option<&Snapshot<R>>,
    ) -> Result<(), StoreError> {
        let result = put(txn, record, prior);
        self.stats.record_put(&result);
        if let Ok(outcome) = &result {
            self.stats.record_index_inserts(outcome.index_inserts);
            self.stats.record_index_removes(outcome.index_removes);
        }
        result.map(|_| ())
    }

    pub fn get<T: Transaction>(
        &self,
        txn: &T,
        pk: &R::Pk,
        capture: bool,
    ) -> Result<(R, Option<Snapshot<R>>), StoreError> {
        let result = get(txn, pk, capture);
        self.stats.record_get(&result);
        result
    }

    pub fn del<T: Transaction>(&self, txn: &mut T, pk: &R::Pk) -> Result<(), StoreError> {
        let result = del::<R, T>(txn, pk);
        self.stats.record_del(&result);
        result
    }

    pub fn lookup_by<S: KeyOf<R>, T: Transaction>(
        &self,
        txn: &T,
        sk: &S,
    ) -> Result<R::Pk, StoreError> {
        let result = lookup_by::<R, S, T>(txn, sk);
        self.stats.record_lookup(&result);
        result
    }

    pub fn cursor_pk<T: Transaction>(
        &self,
        txn: &T,
        start: Option<&R::Pk>,
    ) -> Result<T::Cursor, StoreError> {
        cursor_pk::<R, T>(txn, start)
    }

    pub fn cursor_by<S: KeyOf<R>, T: Transaction>(
        &self,
        txn: &T,
        start: Option<&S>,
    ) -> Result<T::Cursor, StoreError> {
        cursor_by::<R, S, T>(txn, start)
    }
}
