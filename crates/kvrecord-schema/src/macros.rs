/// Re-exported so `impl_scalar_record!` can refer to these by an absolute,
/// import-independent path from whatever crate invokes the macro.
#[doc(hidden)]
pub mod __private {
    pub use kvrecord_primitives::{Codec, CodecError};
}

/// Declares a struct together with a [`Codec`](kvrecord_primitives::Codec)
/// impl that composes each field's own codec in declaration order — the
/// all-scalar case of the schema composer (spec §4.B): `size` sums the
/// fields, `encode` writes them back to back, `decode` reads them back in
/// the same order. `FIXED_ARRAY` and `Option<T>` fields fall out for free
/// since `[T; N]` and `Option<T>` already implement `Codec`; a field that
/// needs `VAR_ARRAY` sizing from a sibling field does not fit this shape and
/// gets a hand-written `Codec` impl using [`crate::var_array`] instead.
#[macro_export]
macro_rules! impl_scalar_record {
    (
        $(#[$struct_meta:meta])*
        $struct_vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        $struct_vis struct $name {
            $( $(#[$field_meta])* $field_vis $field : $ty ),*
        }

        impl $crate::macros::__private::Codec for $name {
            fn encoded_len(&self) -> usize {
                0 $( + $crate::macros::__private::Codec::encoded_len(&self.$field) )*
            }

            fn encode(&self, out: &mut [u8]) {
                #[allow(unused_mut, unused_variables)]
                let mut offset = 0usize;
                $(
                    $crate::macros::__private::Codec::encode(&self.$field, &mut out[offset..]);
                    offset += $crate::macros::__private::Codec::encoded_len(&self.$field);
                )*
                let _ = offset;
            }

            fn decode(
                input: &[u8],
            ) -> ::core::result::Result<(Self, usize), $crate::macros::__private::CodecError> {
                #[allow(unused_mut, unused_variables)]
                let mut offset = 0usize;
                $(
                    let ($field, consumed) =
                        $crate::macros::__private::Codec::decode(&input[offset..])?;
                    offset += consumed;
                )*
                let _ = offset;
                Ok((Self { $( $field ),* }, offset))
            }
        }
    };
}
