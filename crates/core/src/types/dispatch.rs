// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Weight;
use crate::codec::{CodecError, Cursor, ScaleDecode};
use parity_scale_codec::{Decode, Encode, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum DispatchClass {
    Normal,
    Operational,
    Mandatory,
}

/// Weight information attached to `ExtrinsicSuccess` and `ExtrinsicFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct DispatchInfo {
    pub weight: Weight,
    pub class: DispatchClass,
    pub pays_fee: bool,
}

/// Reason a dispatch failed.
///
/// Encoded as a module presence flag, the module index when present, then the error index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchError {
    pub module: Option<u8>,
    pub error: u8,
}

impl ScaleDecode for DispatchClass {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.decode_codec()
    }
}

impl ScaleDecode for DispatchInfo {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.decode_codec()
    }
}

impl ScaleDecode for DispatchError {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            module: cursor.decode()?,
            error: cursor.decode()?,
        })
    }
}

impl Encode for DispatchError {
    fn size_hint(&self) -> usize {
        2 + usize::from(self.module.is_some())
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        match self.module {
            Some(module) => {
                dest.push_byte(1);
                dest.push_byte(module);
            }
            None => dest.push_byte(0),
        }
        dest.push_byte(self.error);
    }
}
