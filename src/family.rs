//! Declarative definition of a record family
//!
//! [`record_family!`](crate::record_family) turns two field lists into a
//! module holding the `Key` and `Value` record types, with every codec trait
//! derived, and a `Family` marker type tying them together.

/// Defines a record family: a module with `Key`, `Value` and `Family`
///
/// ```
/// use recodec::{decode, encode, size};
///
/// recodec::record_family! {
///     /// Orders by warehouse, district, then order id
///     pub mod order {
///         key { w_id: u32, d_id: u32, o_id: u32 }
///         value(compact) { c_id: u32, entry_d: u64, carrier_id: u8, ol_cnt: u8 }
///     }
/// }
///
/// let k = order::Key::new(1, 2, 3000);
/// let bytes = encode(&k);
/// assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0x0b, 0xb8]);
/// assert_eq!(decode::<order::Key>(&bytes).unwrap(), k);
///
/// let v = order::Value::new(42, 1_700_000_000, 7, 10);
/// assert_eq!(size(&v), encode(&v).len());
/// ```
///
/// The value encoding is one of `value(compact)`, `value(pass_through)` or
/// plain `value`, which takes the crate-wide default
/// ([`DEFAULT_VALUE_ENCODING`](crate::schema::DEFAULT_VALUE_ENCODING)).
///
/// `Key` implements `Eq` and `Ord` field by field with
/// [`Canonical::key_cmp`](crate::endian::Canonical::key_cmp), so record
/// comparison always agrees with comparison of the encoded bytes. Both
/// records implement `Default` with every field at [`Scalar::zero`](crate::Scalar::zero).
#[macro_export]
macro_rules! record_family {
    (
        $(#[$meta:meta])*
        $vis:vis mod $family:ident {
            $(#[$kmeta:meta])*
            key { $( $(#[$kfmeta:meta])* $kfield:ident : $kty:ty ),* $(,)? }
            $(#[$vmeta:meta])*
            value $( ( $enc:ident ) )? { $( $(#[$vfmeta:meta])* $vfield:ident : $vty:ty ),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        $vis mod $family {
            #[allow(unused_imports)]
            use super::*;

            $(#[$kmeta])*
            #[derive(
                Clone, Debug,
                $crate::Encode, $crate::Decode, $crate::Estimable, $crate::Record,
            )]
            #[record(key)]
            pub struct Key {
                $( $(#[$kfmeta])* pub $kfield: $kty ),*
            }

            impl ::core::default::Default for Key {
                fn default() -> Self {
                    Self { $( $kfield: <$kty as $crate::Scalar>::zero() ),* }
                }
            }

            impl ::core::cmp::Ord for Key {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    ::core::cmp::Ordering::Equal
                        $( .then_with(|| $crate::codec::key::cmp(&self.$kfield, &other.$kfield)) )*
                }
            }

            impl ::core::cmp::PartialOrd for Key {
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            impl ::core::cmp::PartialEq for Key {
                fn eq(&self, other: &Self) -> bool {
                    ::core::cmp::Ord::cmp(self, other).is_eq()
                }
            }

            impl ::core::cmp::Eq for Key {}

            $(#[$vmeta])*
            #[derive(
                Clone, Debug, PartialEq,
                $crate::Encode, $crate::Decode, $crate::Estimable, $crate::Record,
            )]
            #[record(value $(, $enc)?)]
            pub struct Value {
                $( $(#[$vfmeta])* pub $vfield: $vty ),*
            }

            impl ::core::default::Default for Value {
                fn default() -> Self {
                    Self { $( $vfield: <$vty as $crate::Scalar>::zero() ),* }
                }
            }

            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct Family;

            impl $crate::schema::Family for Family {
                const NAME: &'static str = stringify!($family);

                type Key = Key;

                type Value = Value;
            }
        }
    };
}
