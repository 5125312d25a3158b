//! Fixed-width and length-prefixed byte codecs for the primitive tags of
//! spec §3 (`u8..u64`, `i8..i64`, `size`, `charptr`, `timespec`), plus the
//! blanket `Codec` impls (`Option<T>`, `[T; N]`) that composite record
//! schemas build on.
//!
//! Numeric tags are order-preserving: `compare(a, b) == lex_compare(encode(a),
//! encode(b))`. This is what lets the same codec double as a key codec for
//! an ordered KV store — see `kvrecord-core`.

mod array;
mod charptr;
mod codec;
mod error;
mod int;
mod option;
mod size;
mod timespec;

pub use charptr::CharPtr;
pub use codec::{Codec, decode_exact, encode_to_vec};
pub use error::CodecError;
pub use size::Size;
pub use timespec::Timespec;
