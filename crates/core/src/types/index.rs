// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{CodecError, Cursor, ScaleDecode};
use parity_scale_codec::Encode;
use std::fmt;

/// Binary address of a dispatchable call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode)]
pub struct CallIndex {
    pub module_index: u8,
    pub call_index: u8,
}

/// Binary address of an event, as it appears in an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode)]
pub struct EventId {
    pub module_index: u8,
    pub event_index: u8,
}

impl EventId {
    pub fn new(module_index: u8, event_index: u8) -> Self {
        Self {
            module_index,
            event_index,
        }
    }
}

impl CallIndex {
    pub fn new(module_index: u8, call_index: u8) -> Self {
        Self {
            module_index,
            call_index,
        }
    }
}

impl ScaleDecode for CallIndex {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let [module_index, call_index] = cursor.read_array()?;
        Ok(Self::new(module_index, call_index))
    }
}

impl ScaleDecode for EventId {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        let [module_index, event_index] = cursor.read_array()?;
        Ok(Self::new(module_index, event_index))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.module_index, self.event_index)
    }
}

impl fmt::Display for CallIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.module_index, self.call_index)
    }
}
