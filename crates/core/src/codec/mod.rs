// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! SCALE decoding over a borrowed byte buffer.
//!
//! Decoding goes through [`Cursor`] and the [`ScaleDecode`] trait so every failure carries the
//! byte position it happened at. Encoding is delegated to `parity_scale_codec::Encode`.

mod compact;
mod primitives;

pub use compact::{compact_len, decode_compact, encode_compact};
pub use parity_scale_codec::{Compact, Encode};

use parity_scale_codec::{Decode, Input};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error(
        "Buffer underrun at position {position}: needed {needed} byte(s) but only {remaining} remaining"
    )]
    BufferUnderrun {
        position: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Unknown discriminant {byte:#04x} for {type_name} at position {position}")]
    UnknownDiscriminant {
        type_name: &'static str,
        byte: u8,
        position: usize,
    },

    #[error("Invalid {type_name} at position {position}: {reason}")]
    Invalid {
        type_name: &'static str,
        position: usize,
        reason: String,
    },
}

impl CodecError {
    pub fn is_underrun(&self) -> bool {
        matches!(self, CodecError::BufferUnderrun { .. })
    }
}

/// Types that can be read from a [`Cursor`].
pub trait ScaleDecode: Sized {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError>;
}

/// Read position over an encoded buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
    // Set by `Input::read` so `decode_codec` can report the exact underrun.
    underrun: Option<CodecError>,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            underrun: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes not consumed yet.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Consume exactly `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::BufferUnderrun {
                position: self.position,
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn decode<T: ScaleDecode>(&mut self) -> Result<T, CodecError> {
        T::decode(self)
    }

    /// Decode a type through its `parity_scale_codec::Decode` implementation.
    pub fn decode_codec<T: Decode>(&mut self) -> Result<T, CodecError> {
        let start = self.position;
        self.underrun = None;
        match T::decode(self) {
            Ok(value) => Ok(value),
            Err(err) => Err(self.underrun.take().unwrap_or_else(|| CodecError::Invalid {
                type_name: std::any::type_name::<T>(),
                position: start,
                reason: err.to_string(),
            })),
        }
    }

    /// Read a variant tag, returning it with the position it was read at.
    pub fn variant(&mut self) -> Result<(u8, usize), CodecError> {
        let position = self.position;
        Ok((self.read_u8()?, position))
    }

    /// Read a compact-encoded length prefix.
    pub fn decode_length(&mut self) -> Result<usize, CodecError> {
        let position = self.position;
        let len = decode_compact(self)?;
        usize::try_from(len).map_err(|_| CodecError::Invalid {
            type_name: "length prefix",
            position,
            reason: format!("length {len} does not fit in usize"),
        })
    }

    /// Read a length-prefixed sequence with a custom element decoder.
    pub fn decode_vec_with<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> Result<T, CodecError>,
    ) -> Result<Vec<T>, CodecError> {
        let len = self.decode_length()?;
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(element(self)?);
        }
        Ok(items)
    }

    /// Read a presence flag and, when set, the payload.
    pub fn decode_option_with<T>(
        &mut self,
        payload: impl FnOnce(&mut Self) -> Result<T, CodecError>,
    ) -> Result<Option<T>, CodecError> {
        match self.variant()? {
            (0, _) => Ok(None),
            (1, _) => payload(self).map(Some),
            (byte, position) => Err(CodecError::UnknownDiscriminant {
                type_name: "Option",
                byte,
                position,
            }),
        }
    }
}

impl Input for Cursor<'_> {
    // Unknown, so a short buffer fails in `read` where the underrun is recorded.
    fn remaining_len(&mut self) -> Result<Option<usize>, parity_scale_codec::Error> {
        Ok(None)
    }

    fn read(&mut self, into: &mut [u8]) -> Result<(), parity_scale_codec::Error> {
        match self.take(into.len()) {
            Ok(bytes) => {
                into.copy_from_slice(bytes);
                Ok(())
            }
            Err(err) => {
                self.underrun = Some(err);
                Err("Not enough data to fill buffer".into())
            }
        }
    }
}

/// Decode a value from the start of `bytes`. Trailing bytes are left unread.
pub fn decode_from_bytes<T: ScaleDecode>(bytes: &[u8]) -> Result<T, CodecError> {
    Cursor::new(bytes).decode()
}
