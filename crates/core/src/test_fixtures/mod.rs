// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test fixtures: a small runtime described in every supported metadata version, and helpers to
//! assemble raw event buffers against it.
//!
//! Event-bearing modules of the V10/V11 layout, in dense event index order:
//! System 0, Indices 1, Balances 2, Staking 3, Session 4, Offences 5, Treasury 6, Democracy 7,
//! Grandpa 8, ImOnline 9.
//! Timestamp declares calls only and takes no event index. From V12 on the modules carry the
//! explicit indices listed in [`EXPLICIT_INDICES`].

use crate::metadata::{
    ConstantMetadata, ErrorMetadata, EventMetadata, ExtrinsicMetadata, FunctionMetadata,
    Metadata, MetadataVersion, Module, StorageEntry, StorageEntryModifier, StorageEntryType,
    StorageHasher, StorageMetadata,
};
use crate::types::{EventId, Phase, Topics};
use parity_scale_codec::{Compact, Encode};

/// Explicit module indices used from V12 on, in module declaration order.
pub const EXPLICIT_INDICES: [u8; 11] = [0, 2, 4, 5, 7, 8, 13, 17, 14, 10, 11];

/// Well known dev account (Alice).
pub fn alice() -> [u8; 32] {
    account_id("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d")
}

/// Well known dev account (Bob).
pub fn bob() -> [u8; 32] {
    account_id("8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48")
}

fn account_id(hex_id: &str) -> [u8; 32] {
    let mut id = [0u8; 32];
    hex::decode_to_slice(hex_id, &mut id).expect("account id is 32 bytes of hex");
    id
}

fn entry(name: &str, modifier: StorageEntryModifier, ty: StorageEntryType) -> StorageEntry {
    StorageEntry {
        name: name.into(),
        modifier,
        ty,
        fallback: Vec::new(),
        documentation: vec![format!(" The {name} storage item.")],
    }
}

fn map(hasher: StorageHasher, key: &str, value: &str) -> StorageEntryType {
    StorageEntryType::Map {
        hasher,
        key: key.into(),
        value: value.into(),
        linked: false,
    }
}

fn events(events: &[(&str, &[&str])]) -> Option<Vec<EventMetadata>> {
    Some(
        events
            .iter()
            .map(|(name, arguments)| EventMetadata::new(*name, arguments.iter().copied()))
            .collect(),
    )
}

fn calls(calls: &[(&str, &[(&str, &str)])]) -> Option<Vec<FunctionMetadata>> {
    Some(
        calls
            .iter()
            .map(|(name, arguments)| FunctionMetadata::new(*name, arguments.iter().copied()))
            .collect(),
    )
}

/// The fixture runtime encoded as `version` would carry it.
pub fn sample_metadata(version: MetadataVersion) -> Metadata {
    let identity_or_twox = if version >= MetadataVersion::V11 {
        StorageHasher::Identity
    } else {
        StorageHasher::Twox64Concat
    };

    let mut system = Module::new("System");
    system.storage = Some(StorageMetadata {
        prefix: "System".into(),
        entries: vec![
            entry(
                "Events",
                StorageEntryModifier::Default,
                StorageEntryType::Plain {
                    value: "Vec<EventRecord<T::Event, T::Hash>>".into(),
                },
            ),
            entry(
                "Account",
                StorageEntryModifier::Default,
                map(StorageHasher::Blake2_128Concat, "T::AccountId", "AccountInfo"),
            ),
            StorageEntry {
                fallback: vec![0, 0, 0, 0],
                ..entry(
                    "Number",
                    StorageEntryModifier::Default,
                    StorageEntryType::Plain {
                        value: "T::BlockNumber".into(),
                    },
                )
            },
        ],
    });
    system.calls = calls(&[("remark", &[("_remark", "Vec<u8>")])]);
    system.events = events(&[
        ("ExtrinsicSuccess", &["DispatchInfo"]),
        ("ExtrinsicFailed", &["DispatchError", "DispatchInfo"]),
        ("CodeUpdated", &[]),
        ("NewAccount", &["AccountId"]),
        ("KilledAccount", &["AccountId"]),
    ]);
    system.constants = vec![ConstantMetadata {
        name: "BlockHashCount".into(),
        ty: "T::BlockNumber".into(),
        value: 2400u32.encode(),
        documentation: Vec::new(),
    }];
    system.errors = vec![ErrorMetadata {
        name: "InvalidSpecName".into(),
        documentation: vec![" The name of specification does not match.".into()],
    }];

    let mut timestamp = Module::new("Timestamp");
    timestamp.storage = Some(StorageMetadata {
        prefix: "Timestamp".into(),
        entries: vec![entry(
            "Now",
            StorageEntryModifier::Default,
            StorageEntryType::Plain {
                value: "T::Moment".into(),
            },
        )],
    });
    timestamp.calls = calls(&[("set", &[("now", "Compact<T::Moment>")])]);

    let mut indices = Module::new("Indices");
    indices.calls = calls(&[("claim", &[("index", "T::AccountIndex")])]);
    indices.events = events(&[
        ("IndexAssigned", &["AccountId", "AccountIndex"]),
        ("IndexFreed", &["AccountIndex"]),
    ]);

    let mut balances = Module::new("Balances");
    balances.storage = Some(StorageMetadata {
        prefix: "Balances".into(),
        entries: vec![
            entry(
                "TotalIssuance",
                StorageEntryModifier::Default,
                StorageEntryType::Plain {
                    value: "T::Balance".into(),
                },
            ),
            entry(
                "Locks",
                StorageEntryModifier::Default,
                map(
                    StorageHasher::Blake2_128Concat,
                    "T::AccountId",
                    "Vec<BalanceLock<T::Balance>>",
                ),
            ),
        ],
    });
    balances.calls = calls(&[
        (
            "transfer",
            &[
                ("dest", "<T::Lookup as StaticLookup>::Source"),
                ("value", "Compact<T::Balance>"),
            ],
        ),
        ("set_balance", &[("who", "<T::Lookup as StaticLookup>::Source")]),
    ]);
    balances.events = events(&[
        ("Endowed", &["AccountId", "Balance"]),
        ("DustLost", &["AccountId", "Balance"]),
        ("Transfer", &["AccountId", "AccountId", "Balance"]),
        ("BalanceSet", &["AccountId", "Balance", "Balance"]),
        ("Deposit", &["AccountId", "Balance"]),
    ]);
    balances.constants = vec![ConstantMetadata {
        name: "ExistentialDeposit".into(),
        ty: "T::Balance".into(),
        value: 500u128.encode(),
        documentation: vec![" The minimum amount required to keep an account open.".into()],
    }];

    let mut staking = Module::new("Staking");
    let mut staking_entries = vec![entry(
        "Bonded",
        StorageEntryModifier::Optional,
        map(StorageHasher::Twox64Concat, "T::AccountId", "T::AccountId"),
    )];
    if version >= MetadataVersion::V13 {
        staking_entries.push(entry(
            "ErasStakersPaged",
            StorageEntryModifier::Optional,
            StorageEntryType::NMap {
                keys: vec!["EraIndex".into(), "T::AccountId".into(), "u32".into()],
                hashers: vec![
                    StorageHasher::Twox64Concat,
                    StorageHasher::Twox64Concat,
                    StorageHasher::Twox64Concat,
                ],
                value: "ExposurePage".into(),
            },
        ));
    }
    staking.storage = Some(StorageMetadata {
        prefix: "Staking".into(),
        entries: staking_entries,
    });
    staking.events = events(&[
        ("Reward", &["Balance", "Balance"]),
        ("Slash", &["AccountId", "Balance"]),
        ("OldSlashingReportDiscarded", &["SessionIndex"]),
    ]);

    let mut session = Module::new("Session");
    session.storage = Some(StorageMetadata {
        prefix: "Session".into(),
        entries: vec![
            entry(
                "KeyOwner",
                StorageEntryModifier::Optional,
                map(identity_or_twox, "(KeyTypeId, Vec<u8>)", "T::ValidatorId"),
            ),
            entry(
                "NextKeys",
                StorageEntryModifier::Optional,
                StorageEntryType::DoubleMap {
                    hasher: StorageHasher::Twox64Concat,
                    key1: "Vec<u8>".into(),
                    key2: "T::ValidatorId".into(),
                    value: "T::Keys".into(),
                    key2_hasher: StorageHasher::Blake2_256,
                },
            ),
        ],
    });
    session.events = events(&[("NewSession", &["SessionIndex"])]);

    let mut offences = Module::new("Offences");
    offences.events = events(&[("Offence", &["Kind", "OpaqueTimeSlot"])]);

    let mut treasury = Module::new("Treasury");
    treasury.events = events(&[
        ("Proposed", &["ProposalIndex"]),
        ("Deposit", &["Balance"]),
    ]);

    let mut democracy = Module::new("Democracy");
    democracy.events = events(&[
        ("Tabled", &["PropIndex", "Balance", "Vec<AccountId>"]),
        ("Mystery", &["T::Unheard"]),
        ("Delegated", &["AccountId", "T::Index"]),
    ]);

    let mut grandpa = Module::new("Grandpa");
    grandpa.events = events(&[
        ("NewAuthorities", &["AuthorityList"]),
        ("Paused", &[]),
        ("Resumed", &[]),
    ]);

    let mut im_online = Module::new("ImOnline");
    im_online.events = events(&[("HeartbeatReceived", &["AuthorityId"])]);

    let mut modules = vec![
        system, timestamp, indices, balances, staking, session, offences, treasury, democracy,
        grandpa, im_online,
    ];
    if version >= MetadataVersion::V12 {
        for (module, index) in modules.iter_mut().zip(EXPLICIT_INDICES) {
            module.index = Some(index);
        }
    }

    let extrinsic = (version >= MetadataVersion::V11).then(|| ExtrinsicMetadata {
        version: 4,
        signed_extensions: vec![
            "CheckSpecVersion".into(),
            "CheckNonce".into(),
            "ChargeTransactionPayment".into(),
        ],
    });

    Metadata {
        version,
        modules,
        extrinsic,
    }
}

/// Start of an event record: phase and event id.
pub fn record_header(phase: Phase, module_index: u8, event_index: u8) -> Vec<u8> {
    let mut out = phase.encode();
    EventId::new(module_index, event_index).encode_to(&mut out);
    out
}

/// Complete an event record with its topics.
pub fn finish_record(mut record: Vec<u8>, topics: &Topics) -> Vec<u8> {
    topics.encode_to(&mut record);
    record
}

/// Prefix encoded records with their count.
pub fn event_buffer(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Compact(records.len() as u32).encode();
    for record in records {
        out.extend_from_slice(record);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_accounts() {
        use sp_core::crypto::{AccountId32, Ss58Codec};

        assert_eq!(
            AccountId32::from(alice()).to_ss58check(),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
        assert_eq!(
            AccountId32::from(bob()).to_ss58check(),
            "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty"
        );
    }
}
