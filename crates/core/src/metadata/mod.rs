// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runtime metadata.
//!
//! Metadata is decoded once into a single canonical [`Metadata`] value regardless of the wire
//! version. The wire layouts are those of `frame_metadata`; version differences live in the
//! adapters of `versions`, and the resolver in [`query`] only ever sees the canonical model.

pub mod query;
mod versions;

pub use query::LookupError;

use crate::codec::{CodecError, Cursor, decode_compact};
use frame_metadata::RuntimeMetadataPrefixed;
use parity_scale_codec::Encode;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// `meta` in ASCII.
pub const MAGIC: [u8; 4] = [0x6d, 0x65, 0x74, 0x61];

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata does not start with the `meta` magic number, found 0x{}", hex::encode(.found))]
    BadMagic { found: Vec<u8> },

    #[error("Metadata version {0} is not supported")]
    VersionUnsupported(u8),

    #[error("Failed to decode metadata: {0}")]
    Codec(#[from] CodecError),

    #[error("{what} cannot be represented in metadata {version}")]
    NotRepresentable {
        version: MetadataVersion,
        what: String,
    },
}

/// Supported metadata wire versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MetadataVersion {
    V10,
    V11,
    V12,
    V13,
}

impl MetadataVersion {
    pub fn as_u8(self) -> u8 {
        match self {
            MetadataVersion::V10 => 10,
            MetadataVersion::V11 => 11,
            MetadataVersion::V12 => 12,
            MetadataVersion::V13 => 13,
        }
    }
}

impl TryFrom<u8> for MetadataVersion {
    type Error = MetadataError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            10 => Ok(MetadataVersion::V10),
            11 => Ok(MetadataVersion::V11),
            12 => Ok(MetadataVersion::V12),
            13 => Ok(MetadataVersion::V13),
            other => Err(MetadataError::VersionUnsupported(other)),
        }
    }
}

impl fmt::Display for MetadataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.as_u8())
    }
}

// ================================================================================================
// Canonical model
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub version: MetadataVersion,
    pub modules: Vec<Module>,
    /// Present from V11 onwards.
    pub extrinsic: Option<ExtrinsicMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,
    /// Explicit module index, carried from V12 onwards.
    pub index: Option<u8>,
    pub storage: Option<StorageMetadata>,
    pub calls: Option<Vec<FunctionMetadata>>,
    pub events: Option<Vec<EventMetadata>>,
    pub constants: Vec<ConstantMetadata>,
    pub errors: Vec<ErrorMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageMetadata {
    pub prefix: String,
    pub entries: Vec<StorageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEntry {
    pub name: String,
    pub modifier: StorageEntryModifier,
    #[serde(rename = "type")]
    pub ty: StorageEntryType,
    #[serde(serialize_with = "serialize_hex")]
    pub fallback: Vec<u8>,
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StorageEntryModifier {
    Optional,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StorageEntryType {
    Plain {
        value: String,
    },
    Map {
        hasher: StorageHasher,
        key: String,
        value: String,
        linked: bool,
    },
    DoubleMap {
        hasher: StorageHasher,
        key1: String,
        key2: String,
        value: String,
        key2_hasher: StorageHasher,
    },
    NMap {
        keys: Vec<String>,
        hashers: Vec<StorageHasher>,
        value: String,
    },
}

impl StorageEntryType {
    /// Hashers applied to the keys, in key order.
    pub fn hashers(&self) -> Vec<StorageHasher> {
        match self {
            StorageEntryType::Plain { .. } => Vec::new(),
            StorageEntryType::Map { hasher, .. } => vec![*hasher],
            StorageEntryType::DoubleMap {
                hasher,
                key2_hasher,
                ..
            } => vec![*hasher, *key2_hasher],
            StorageEntryType::NMap { hashers, .. } => hashers.clone(),
        }
    }

    pub fn value_type(&self) -> &str {
        match self {
            StorageEntryType::Plain { value }
            | StorageEntryType::Map { value, .. }
            | StorageEntryType::DoubleMap { value, .. }
            | StorageEntryType::NMap { value, .. } => value,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StorageHasher {
    Blake2_128,
    Blake2_256,
    Blake2_128Concat,
    Twox128,
    Twox256,
    Twox64Concat,
    /// Added in V11.
    Identity,
}

impl StorageHasher {
    pub fn is_concat(self) -> bool {
        matches!(
            self,
            StorageHasher::Blake2_128Concat | StorageHasher::Twox64Concat | StorageHasher::Identity
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMetadata {
    pub name: String,
    pub arguments: Vec<FunctionArgument>,
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    pub name: String,
    /// Argument type names, e.g. `AccountId` or `Vec<u8>`.
    pub arguments: Vec<String>,
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(serialize_with = "serialize_hex")]
    pub value: Vec<u8>,
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMetadata {
    pub name: String,
    pub documentation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrinsicMetadata {
    pub version: u8,
    pub signed_extensions: Vec<String>,
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
}

impl Module {
    /// Module with no storage, calls, events, constants or errors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
            storage: None,
            calls: None,
            events: None,
            constants: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    pub fn has_calls(&self) -> bool {
        self.calls.is_some()
    }

    pub fn has_events(&self) -> bool {
        self.events.is_some()
    }
}

impl EventMetadata {
    pub fn new<I, S>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
            documentation: Vec::new(),
        }
    }
}

impl FunctionMetadata {
    pub fn new<I, N, T>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: arguments
                .into_iter()
                .map(|(name, ty)| FunctionArgument {
                    name: name.into(),
                    ty: ty.into(),
                })
                .collect(),
            documentation: Vec::new(),
        }
    }
}

// ================================================================================================
// Entry points
// ================================================================================================

/// Decode metadata as returned by `state_getMetadata`.
///
/// A buffer that starts with a compact length prefix covering the rest of the input (the shape
/// returned by the `Metadata_metadata` runtime call) is accepted as well.
pub fn decode_metadata(bytes: &[u8]) -> Result<Metadata, MetadataError> {
    let bytes = strip_length_prefix(bytes);
    let mut header = Cursor::new(bytes);
    let magic = header.take(MAGIC.len())?;
    if magic != MAGIC {
        return Err(MetadataError::BadMagic {
            found: magic.to_vec(),
        });
    }
    let version = MetadataVersion::try_from(header.read_u8()?)?;

    let mut cursor = Cursor::new(bytes);
    let prefixed: RuntimeMetadataPrefixed = cursor.decode_codec()?;
    let metadata =
        versions::decode(&prefixed.1).ok_or(MetadataError::VersionUnsupported(version.as_u8()))?;

    tracing::debug!(
        version = %version,
        modules = metadata.modules.len(),
        unread = cursor.remaining(),
        "Decoded runtime metadata"
    );
    Ok(metadata)
}

/// Encode metadata in the wire layout of its `version`.
pub fn encode_metadata(metadata: &Metadata) -> Result<Vec<u8>, MetadataError> {
    Ok(versions::encode(metadata)?.encode())
}

fn strip_length_prefix(bytes: &[u8]) -> &[u8] {
    if bytes.len() < MAGIC.len() || bytes.starts_with(&MAGIC) {
        return bytes;
    }
    let mut cursor = Cursor::new(bytes);
    match decode_compact(&mut cursor) {
        Ok(len)
            if usize::try_from(len).ok() == Some(cursor.remaining())
                && cursor.remaining_bytes().starts_with(&MAGIC) =>
        {
            cursor.remaining_bytes()
        }
        _ => bytes,
    }
}
