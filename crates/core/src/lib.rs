// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding and resolution of the SCALE wire format used by Substrate runtimes.
//!
//! - [`codec`]: the SCALE primitives and a bounds-checked [`Cursor`](codec::Cursor).
//! - [`metadata`]: runtime metadata V10 to V13 and lookups of calls, events and storage.
//! - [`events`]: decoding of the `System.Events` value into typed records.
//! - [`storage`] and [`hashing`]: storage key construction.

pub mod codec;
pub mod events;
pub mod hashing;
pub mod logging;
pub mod metadata;
pub mod storage;
pub mod types;

#[cfg(test)]
pub mod test_fixtures;

pub use events::{EventDecodeError, EventDecoder, EventRecords, decode_event_records};
pub use metadata::{Metadata, MetadataError, MetadataVersion, decode_metadata, encode_metadata};
pub use runtime_wire_config as config;
pub use storage::{StorageKeyError, compute_storage_key, events_storage_key};
