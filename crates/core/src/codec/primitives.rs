// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CodecError, Cursor, ScaleDecode, decode_compact};
use parity_scale_codec::Compact;
use sp_core::H256;
use sp_core::crypto::AccountId32;

// Fixed-width values have exactly one valid encoding, so parity's decoders are used as-is.
macro_rules! decode_via_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScaleDecode for $ty {
                fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
                    cursor.decode_codec::<$ty>()
                }
            }
        )*
    };
}

decode_via_codec!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, H256, AccountId32);

impl ScaleDecode for bool {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        match cursor.variant()? {
            (0, _) => Ok(false),
            (1, _) => Ok(true),
            (byte, position) => Err(CodecError::UnknownDiscriminant {
                type_name: "bool",
                byte,
                position,
            }),
        }
    }
}

impl<const N: usize> ScaleDecode for [u8; N] {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.read_array()
    }
}

impl ScaleDecode for String {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let len = cursor.decode_length()?;
        let position = cursor.position();
        let bytes = cursor.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|err| CodecError::Invalid {
            type_name: "String",
            position,
            reason: err.to_string(),
        })
    }
}

impl<T: ScaleDecode> ScaleDecode for Vec<T> {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.decode_vec_with(T::decode)
    }
}

impl<T: ScaleDecode> ScaleDecode for Option<T> {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.decode_option_with(T::decode)
    }
}

macro_rules! decode_compact_as {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScaleDecode for Compact<$ty> {
                fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
                    let position = cursor.position();
                    let value = decode_compact(cursor)?;
                    <$ty>::try_from(value).map(Compact).map_err(|_| CodecError::Invalid {
                        type_name: stringify!(Compact<$ty>),
                        position,
                        reason: format!("{value} is out of range"),
                    })
                }
            }
        )*
    };
}

decode_compact_as!(u8, u16, u32, u64, u128);

macro_rules! decode_tuple {
    ($($name:ident),+) => {
        impl<$($name: ScaleDecode),+> ScaleDecode for ($($name,)+) {
            fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
                Ok(($($name::decode(cursor)?,)+))
            }
        }
    };
}

decode_tuple!(A);
decode_tuple!(A, B);
decode_tuple!(A, B, C);
decode_tuple!(A, B, C, D);
