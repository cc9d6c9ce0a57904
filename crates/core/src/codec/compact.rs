// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CodecError, Cursor};
use parity_scale_codec::{Compact, CompactLen, Encode};

/// Decode a compact integer in any of its four length classes.
///
/// Non-canonical encodings (a value written in a longer class than needed) are accepted.
pub fn decode_compact(cursor: &mut Cursor<'_>) -> Result<u128, CodecError> {
    let position = cursor.position();
    let first = cursor.read_u8()?;
    let value = match first & 0b11 {
        0b00 => u128::from(first >> 2),
        0b01 => {
            let second = cursor.read_u8()?;
            u128::from(u16::from_le_bytes([first, second]) >> 2)
        }
        0b10 => {
            let rest = cursor.read_array::<3>()?;
            u128::from(u32::from_le_bytes([first, rest[0], rest[1], rest[2]]) >> 2)
        }
        _ => {
            let len = usize::from(first >> 2) + 4;
            if len > 16 {
                return Err(CodecError::Invalid {
                    type_name: "Compact",
                    position,
                    reason: format!("{len} byte integer does not fit in 128 bits"),
                });
            }
            let mut buf = [0u8; 16];
            buf[..len].copy_from_slice(cursor.take(len)?);
            u128::from_le_bytes(buf)
        }
    };
    Ok(value)
}

/// Append the shortest compact encoding of `value`.
pub fn encode_compact(value: u128, out: &mut Vec<u8>) {
    Compact(value).encode_to(out);
}

/// Number of bytes the shortest compact encoding of `value` takes.
pub fn compact_len(value: u128) -> usize {
    <Compact<u128> as CompactLen<u128>>::compact_len(&value)
}
