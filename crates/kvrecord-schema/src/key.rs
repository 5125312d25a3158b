use kvrecord_primitives::Codec;

///
/// KeyOf
///
/// A key schema extracted from a record (spec §4.C): a named, ordered
/// subset of a record's fields with its own `Codec`, plus the extractor
/// that copies those fields out of a record instance. One Rust type per
/// declared key schema (primary or secondary) stands in for the source's
/// "key value type" + generated extractor function — the key schema is
/// just another schema, sharing the same primitive codecs, over a smaller
/// field list.
///
/// `NAME` doubles as the secondary-key name used to derive the table name
/// (`<record>_<name>`, spec §6); the primary key's conventional name is
/// `"pk"`.
///
pub trait KeyOf<R>: Codec {
    const NAME: &'static str;

    fn extract(record: &R) -> Self;
}
