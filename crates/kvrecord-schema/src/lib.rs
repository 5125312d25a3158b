//! Schema composition over `kvrecord-primitives`: the declarative record
//! model of spec §3/§4.B turned into Rust types.
//!
//! A named record schema is a Rust struct implementing `Codec`
//! (`kvrecord_primitives::Codec`). The all-scalar case — every field is a
//! primitive, a fixed-size array, or an `Option<T>` — is generated by
//! [`impl_scalar_record!`]; a record with a `VAR_ARRAY` field (an array
//! whose element count lives in an earlier sibling field rather than a
//! self-describing prefix) composes its `Codec` impl by hand using
//! [`var_array`]'s helpers, since the count dependency can't be expressed as
//! a blanket impl. [`KeyOf`] is the primary/secondary key side of the same
//! idea: one small Rust type per declared key schema, with its own `Codec`
//! and an `extract` function pulled straight off the record.

pub mod hooks;
pub mod key;
pub mod macros;
pub mod var_array;

pub use hooks::SchemaHooks;
pub use key::KeyOf;
pub use kvrecord_primitives::{CharPtr, Codec, CodecError, Size, Timespec, decode_exact, encode_to_vec};
pub use var_array::{decode_var_array, encode_var_array, encoded_len_var_array};
