use crate::{error::StoreError, indexed::Indexed};
use kvrecord_primitives::encode_to_vec;
use kvrecord_schema::KeyOf;
use std::marker::PhantomData;

///
/// Snapshot
///
/// A record's previously-seen primary and secondary key bytes, captured so
/// a later `put` can detect which index entries changed (spec §4.E/§6's
/// "prior_keys_opt" / "snapshot bundle"). Design Notes §9 replaces the
/// source's length-prefixed byte bundle with this typed struct — the
/// bundle exists there only because C has no generic tuple of "all the key
/// types for this record"; Rust does, so `get` can just return one.
///
pub struct Snapshot<R> {
    pub(crate) pk: Vec<u8>,
    pub(crate) secondary: Vec<(&'static str, Vec<u8>)>,
    _record: PhantomData<fn() -> R>,
}

// Implemented by hand rather than derived: a naive `#[derive(Clone, Debug)]`
// would add an `R: Clone`/`R: Debug` bound even though `R` only ever shows up
// behind `PhantomData`, forcing every `Indexed` record to implement traits
// it has no other reason to.
impl<R> Clone for Snapshot<R> {
    fn clone(&self) -> Self {
        Self {
            pk: self.pk.clone(),
            secondary: self.secondary.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for Snapshot<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("pk", &self.pk)
            .field("secondary", &self.secondary)
            .finish()
    }
}

impl<R: Indexed> Snapshot<R> {
    #[must_use]
    pub fn capture(record: &R) -> Self {
        let pk = encode_to_vec(&R::Pk::extract(record));
        Self {
            pk,
            secondary: record.secondary_keys(),
            _record: PhantomData,
        }
    }

    #[must_use]
    pub fn pk_bytes(&self) -> &[u8] {
        &self.pk
    }

    #[must_use]
    pub fn secondary_bytes(&self) -> &[(&'static str, Vec<u8>)] {
        &self.secondary
    }

    /// External wire format of spec §6: `<u32 le length><bytes>` for the
    /// primary key, then each secondary key in the record's declared
    /// order. This bundle is internal to callers that don't need it in
    /// process — it exists only for persisting or transmitting a snapshot
    /// across a process boundary, supplementing (not replacing) the typed
    /// path above.
    #[must_use]
    pub fn to_bundle_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        push_entry(&mut out, &self.pk);
        for (_, bytes) in &self.secondary {
            push_entry(&mut out, bytes);
        }
        out
    }

    /// Inverse of [`Snapshot::to_bundle_bytes`]. `names` must be
    /// `R::SECONDARY_NAMES` in the same order the bundle was produced with.
    pub fn from_bundle_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let mut offset = 0;
        let pk = read_entry(bytes, &mut offset)?;
        let mut secondary = Vec::with_capacity(R::SECONDARY_NAMES.len());
        for &name in R::SECONDARY_NAMES {
            let sk = read_entry(bytes, &mut offset)?;
            secondary.push((name, sk));
        }
        Ok(Self {
            pk,
            secondary,
            _record: PhantomData,
        })
    }
}

fn push_entry(out: &mut Vec<u8>, bytes: &[u8]) {
    let len = u32::try_from(bytes.len()).expect("snapshot entry exceeds u32::MAX");
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(bytes);
}

fn read_entry(bytes: &[u8], offset: &mut usize) -> Result<Vec<u8>, StoreError> {
    let header_end = *offset + 4;
    if bytes.len() < header_end {
        return Err(StoreError::Malformed(
            kvrecord_primitives::CodecError::BufferTooShort {
                needed: header_end,
                available: bytes.len(),
            },
        ));
    }
    let mut len_buf = [0u8; 4];
    len_buf.copy_from_slice(&bytes[*offset..header_end]);
    let len = u32::from_le_bytes(len_buf) as usize;
    let value_end = header_end + len;
    if bytes.len() < value_end {
        return Err(StoreError::Malformed(
            kvrecord_primitives::CodecError::BufferTooShort {
                needed: value_end,
                available: bytes.len(),
            },
        ));
    }
    let value = bytes[header_end..value_end].to_vec();
    *offset = value_end;
    Ok(value)
}
