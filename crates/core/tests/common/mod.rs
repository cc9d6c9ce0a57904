// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! A minimal runtime description shared by the integration tests.

#![allow(dead_code)]

use parity_scale_codec::{Compact, Encode};
use runtime_wire::metadata::{
    EventMetadata, ExtrinsicMetadata, FunctionMetadata, Metadata, MetadataVersion, Module,
    StorageEntry, StorageEntryModifier, StorageEntryType, StorageHasher, StorageMetadata,
};
use runtime_wire::types::{EventId, Phase, Topics};

pub const ALICE: [u8; 32] = [
    0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c, 0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f, 0xd6,
    0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3, 0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d, 0xa2, 0x7d,
];

pub const BOB: [u8; 32] = [
    0x8e, 0xaf, 0x04, 0x15, 0x16, 0x87, 0x73, 0x63, 0x26, 0xc9, 0xfe, 0xa1, 0x7e, 0x25, 0xfc, 0x52,
    0x87, 0x61, 0x36, 0x93, 0xc9, 0x12, 0x90, 0x9c, 0xb2, 0x26, 0xaa, 0x47, 0x94, 0xf2, 0x6a, 0x48,
];

fn storage_entry(name: &str, ty: StorageEntryType) -> StorageEntry {
    StorageEntry {
        name: name.into(),
        modifier: StorageEntryModifier::Default,
        ty,
        fallback: vec![0x00],
        documentation: Vec::new(),
    }
}

/// System, Timestamp (calls only) and Balances. From V12 on Balances takes index 10.
pub fn runtime(version: MetadataVersion) -> Metadata {
    let explicit = version >= MetadataVersion::V12;

    let mut system = Module::new("System");
    system.storage = Some(StorageMetadata {
        prefix: "System".into(),
        entries: vec![
            storage_entry(
                "Account",
                StorageEntryType::Map {
                    hasher: StorageHasher::Blake2_128Concat,
                    key: "T::AccountId".into(),
                    value: "AccountInfo".into(),
                    linked: false,
                },
            ),
            storage_entry(
                "Events",
                StorageEntryType::Plain {
                    value: "Vec<EventRecord<T::Event, T::Hash>>".into(),
                },
            ),
        ],
    });
    system.calls = Some(vec![FunctionMetadata::new(
        "remark",
        [("_remark", "Vec<u8>")],
    )]);
    system.events = Some(vec![
        EventMetadata::new("ExtrinsicSuccess", ["DispatchInfo"]),
        EventMetadata::new("NewAccount", ["AccountId"]),
    ]);
    system.index = explicit.then_some(0);

    let mut timestamp = Module::new("Timestamp");
    timestamp.calls = Some(vec![FunctionMetadata::new("set", [("now", "Compact<T::Moment>")])]);
    timestamp.index = explicit.then_some(3);

    let mut balances = Module::new("Balances");
    balances.storage = Some(StorageMetadata {
        prefix: "Balances".into(),
        entries: vec![storage_entry(
            "Locks",
            StorageEntryType::Map {
                hasher: StorageHasher::Twox64Concat,
                key: "T::AccountId".into(),
                value: "Vec<BalanceLock<T::Balance>>".into(),
                linked: false,
            },
        )],
    });
    balances.calls = Some(vec![FunctionMetadata::new(
        "transfer",
        [
            ("dest", "<T::Lookup as StaticLookup>::Source"),
            ("value", "Compact<T::Balance>"),
        ],
    )]);
    balances.events = Some(vec![
        EventMetadata::new("Endowed", ["AccountId", "Balance"]),
        EventMetadata::new("Transfer", ["AccountId", "AccountId", "Balance"]),
    ]);
    balances.index = explicit.then_some(10);

    Metadata {
        version,
        modules: vec![system, timestamp, balances],
        extrinsic: (version >= MetadataVersion::V11).then(|| ExtrinsicMetadata {
            version: 4,
            signed_extensions: vec!["CheckNonce".into(), "ChargeTransactionPayment".into()],
        }),
    }
}

/// `Phase ++ EventId`.
pub fn record_header(phase: Phase, module_index: u8, event_index: u8) -> Vec<u8> {
    let mut out = phase.encode();
    EventId::new(module_index, event_index).encode_to(&mut out);
    out
}

/// Append topics to a record.
pub fn finish_record(mut record: Vec<u8>, topics: &Topics) -> Vec<u8> {
    topics.encode_to(&mut record);
    record
}

/// Compact count followed by the records.
pub fn event_buffer(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Compact(records.len() as u32).encode();
    for record in records {
        out.extend_from_slice(record);
    }
    out
}
