// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Block header digest.

use super::{AuthorityId, Hash};
use crate::codec::{CodecError, Cursor, ScaleDecode};
use parity_scale_codec::{Decode, Encode};

/// Four byte id of a consensus engine, e.g. `*b"BABE"`.
pub type ConsensusEngineId = [u8; 4];

/// One log item of a block header [`Digest`].
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum DigestItem {
    #[codec(index = 0)]
    Other(Vec<u8>),
    /// Legacy: emitted by runtimes before consensus items carried their own engine id.
    #[codec(index = 1)]
    AuthoritiesChange(Vec<AuthorityId>),
    /// Legacy: root of the changes trie.
    #[codec(index = 2)]
    ChangesTrieRoot(Hash),
    /// Legacy seal: slot number and a signature.
    #[codec(index = 3)]
    SealV0(u64, [u8; 64]),
    #[codec(index = 4)]
    Consensus(ConsensusEngineId, Vec<u8>),
    #[codec(index = 5)]
    Seal(ConsensusEngineId, Vec<u8>),
    #[codec(index = 6)]
    PreRuntime(ConsensusEngineId, Vec<u8>),
    /// The runtime code or heap pages changed in this block.
    #[codec(index = 8)]
    RuntimeEnvironmentUpdated,
}

impl DigestItem {
    /// Engine id of `PreRuntime`, `Consensus` and `Seal` items.
    pub fn engine_id(&self) -> Option<ConsensusEngineId> {
        match self {
            DigestItem::PreRuntime(id, _) | DigestItem::Consensus(id, _) | DigestItem::Seal(id, _) => {
                Some(*id)
            }
            _ => None,
        }
    }
}

/// Header digest: the ordered list of log items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct Digest {
    pub logs: Vec<DigestItem>,
}

impl Digest {
    /// The last `Seal` item, which sealing engines append after every other item.
    pub fn seal(&self) -> Option<&DigestItem> {
        self.logs
            .last()
            .filter(|item| matches!(item, DigestItem::Seal(..)))
    }
}

impl From<Vec<DigestItem>> for Digest {
    fn from(logs: Vec<DigestItem>) -> Self {
        Self { logs }
    }
}

impl ScaleDecode for DigestItem {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.decode_codec()
    }
}

impl ScaleDecode for Digest {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
        cursor.decode_codec()
    }
}
