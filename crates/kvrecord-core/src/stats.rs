use crate::error::StoreError;
use std::cell::Cell;

///
/// Stats
///
/// In-process event counters for an `IndexedStore` — put/get/del/lookup
/// call counts plus index maintenance counts, exposed via a
/// [`StatsSnapshot`]. No external logging/metrics crate: the teacher
/// (`icydb-core::obs::metrics`) carries no `tracing`/`log` dependency
/// either and instead exposes typed counters straight off its event state.
/// Call counters are execution attempts; errors still increment them.
///
#[derive(Debug, Default)]
pub struct Stats {
    put_calls: Cell<u64>,
    get_calls: Cell<u64>,
    del_calls: Cell<u64>,
    lookup_calls: Cell<u64>,
    index_inserts: Cell<u64>,
    index_removes: Cell<u64>,
    errors: Cell<u64>,
}

///
/// StatsSnapshot
///
/// A point-in-time copy of `Stats`, cheap to return by value.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StatsSnapshot {
    pub put_calls: u64,
    pub get_calls: u64,
    pub del_calls: u64,
    pub lookup_calls: u64,
    pub index_inserts: u64,
    pub index_removes: u64,
    pub errors: u64,
}

impl Stats {
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            put_calls: self.put_calls.get(),
            get_calls: self.get_calls.get(),
            del_calls: self.del_calls.get(),
            lookup_calls: self.lookup_calls.get(),
            index_inserts: self.index_inserts.get(),
            index_removes: self.index_removes.get(),
            errors: self.errors.get(),
        }
    }

    pub(crate) fn record_put<T>(&self, result: &Result<T, StoreError>) {
        self.put_calls.set(self.put_calls.get() + 1);
        self.note_error(result);
    }

    pub(crate) fn record_get<T>(&self, result: &Result<T, StoreError>) {
        self.get_calls.set(self.get_calls.get() + 1);
        self.note_error(result);
    }

    pub(crate) fn record_del<T>(&self, result: &Result<T, StoreError>) {
        self.del_calls.set(self.del_calls.get() + 1);
        self.note_error(result);
    }

    pub(crate) fn record_lookup<T>(&self, result: &Result<T, StoreError>) {
        self.lookup_calls.set(self.lookup_calls.get() + 1);
        self.note_error(result);
    }

    pub(crate) fn record_index_inserts(&self, n: u64) {
        self.index_inserts.set(self.index_inserts.get() + n);
    }

    pub(crate) fn record_index_removes(&self, n: u64) {
        self.index_removes.set(self.index_removes.get() + n);
    }

    fn note_error<T>(&self, result: &Result<T, StoreError>) {
        if result.is_err() {
            self.errors.set(self.errors.get() + 1);
        }
    }
}
