// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{CodecError, Cursor, ScaleDecode};
use parity_scale_codec::Encode;

/// When during block execution an event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode)]
pub enum Phase {
    /// Applying the extrinsic at the given index.
    ApplyExtrinsic(u32),
    Finalization,
    Initialization,
}

impl ScaleDecode for Phase {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        match cursor.variant()? {
            (0, _) => Ok(Phase::ApplyExtrinsic(cursor.decode()?)),
            (1, _) => Ok(Phase::Finalization),
            (2, _) => Ok(Phase::Initialization),
            (byte, position) => Err(CodecError::UnknownDiscriminant {
                type_name: "Phase",
                byte,
                position,
            }),
        }
    }
}
