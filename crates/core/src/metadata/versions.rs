// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversions between the legacy `frame_metadata` layouts V10 to V13 and the canonical model.
//!
//! The wire format itself is owned by `frame_metadata`; this module only maps its per-version
//! types. The versions differ in four places: the `Identity` storage hasher and the extrinsic
//! section appear in V11, the explicit module index in V12 and `NMap` storage in V13.

use super::{
    ConstantMetadata, ErrorMetadata, EventMetadata, ExtrinsicMetadata, FunctionArgument,
    FunctionMetadata, Metadata, MetadataError, MetadataVersion, Module, StorageEntry,
    StorageEntryModifier, StorageEntryType, StorageHasher, StorageMetadata,
};
use frame_metadata::decode_different::{DecodeDifferent, FnEncode};
use frame_metadata::{META_RESERVED, RuntimeMetadata, RuntimeMetadataPrefixed};
use parity_scale_codec::{Decode, Encode};

/// Canonical form of a decoded legacy runtime metadata, `None` for versions outside V10 to V13.
pub(super) fn decode(metadata: &RuntimeMetadata) -> Option<Metadata> {
    match metadata {
        RuntimeMetadata::V10(meta) => Some(v10::metadata(meta)),
        RuntimeMetadata::V11(meta) => Some(v11::metadata(meta)),
        RuntimeMetadata::V12(meta) => Some(v12::metadata(meta)),
        RuntimeMetadata::V13(meta) => Some(v13::metadata(meta)),
        _ => None,
    }
}

/// Legacy runtime metadata for `metadata.version`, refusing content that version cannot carry.
pub(super) fn encode(metadata: &Metadata) -> Result<RuntimeMetadataPrefixed, MetadataError> {
    let version = metadata.version;
    let runtime = match version {
        MetadataVersion::V10 => v10::metadata_to(metadata),
        MetadataVersion::V11 => v11::metadata_to(metadata),
        MetadataVersion::V12 => v12::metadata_to(metadata),
        MetadataVersion::V13 => v13::metadata_to(metadata),
    }
    .map_err(|what| MetadataError::NotRepresentable { version, what })?;
    Ok(RuntimeMetadataPrefixed(META_RESERVED, runtime))
}

// ================================================================================================
// DecodeDifferent access
// ================================================================================================

fn text(value: &DecodeDifferent<&'static str, String>) -> String {
    match value {
        DecodeDifferent::Decoded(value) => value.clone(),
        DecodeDifferent::Encode(value) => (*value).to_owned(),
    }
}

fn texts(value: &DecodeDifferent<&'static [&'static str], Vec<String>>) -> Vec<String> {
    match value {
        DecodeDifferent::Decoded(values) => values.clone(),
        DecodeDifferent::Encode(values) => values.iter().map(|v| (*v).to_owned()).collect(),
    }
}

fn items<'a, T: 'static>(value: &'a DecodeDifferent<&'static [T], Vec<T>>) -> &'a [T] {
    match value {
        DecodeDifferent::Decoded(values) => values,
        DecodeDifferent::Encode(values) => values,
    }
}

fn built<'a, T: Encode + 'static>(value: &'a DecodeDifferent<FnEncode<&'static [T]>, Vec<T>>) -> &'a [T] {
    match value {
        DecodeDifferent::Decoded(values) => values,
        DecodeDifferent::Encode(FnEncode(build)) => build(),
    }
}

fn bytes<B: Encode + 'static>(value: &DecodeDifferent<B, Vec<u8>>) -> Vec<u8> {
    match value {
        DecodeDifferent::Decoded(bytes) => bytes.clone(),
        // Byte getters encode as a length-prefixed vector.
        DecodeDifferent::Encode(getter) => {
            Vec::<u8>::decode(&mut &getter.encode()[..]).unwrap_or_default()
        }
    }
}

fn decoded<B: 'static, O: 'static>(value: O) -> DecodeDifferent<B, O> {
    DecodeDifferent::Decoded(value)
}

fn decoded_texts(values: &[String]) -> DecodeDifferent<&'static [&'static str], Vec<String>> {
    decoded(values.to_vec())
}

// ================================================================================================
// Per-version adapters
// ================================================================================================

macro_rules! legacy_adapter {
    (
        $version:ident: $variant:ident, $runtime:ident,
        linked: $linked:ident
        $(, identity: $identity:ident)?
        $(, extrinsic: $extrinsic:ident)?
        $(, index: $index:ident)?
        $(, nmap: $nmap:ident)?
    ) => {
        mod $version {
            use super::*;
            use frame_metadata::$version as legacy;

            pub(super) fn metadata(meta: &legacy::$runtime) -> Metadata {
                Metadata {
                    version: MetadataVersion::$variant,
                    modules: items(&meta.modules).iter().map(module).collect(),
                    extrinsic: legacy_adapter!(@extrinsic_from meta $(, $extrinsic)?),
                }
            }

            pub(super) fn metadata_to(metadata: &Metadata) -> Result<RuntimeMetadata, String> {
                let modules = metadata
                    .modules
                    .iter()
                    .map(module_to)
                    .collect::<Result<Vec<_>, _>>()?;
                legacy_adapter!(@extrinsic_to metadata $(, $extrinsic)?);
                Ok(RuntimeMetadata::$variant(legacy::$runtime {
                    modules: decoded(modules),
                    $($extrinsic: $extrinsic,)?
                }))
            }

            fn module(module: &legacy::ModuleMetadata) -> Module {
                let storage = match &module.storage {
                    None => None,
                    Some(DecodeDifferent::Decoded(storage)) => Some(storage_of(storage)),
                    Some(DecodeDifferent::Encode(FnEncode(build))) => Some(storage_of(&build())),
                };
                Module {
                    name: text(&module.name),
                    index: legacy_adapter!(@index_from module $(, $index)?),
                    storage,
                    calls: module
                        .calls
                        .as_ref()
                        .map(|calls| built(calls).iter().map(function).collect()),
                    events: module
                        .event
                        .as_ref()
                        .map(|events| built(events).iter().map(event).collect()),
                    constants: built(&module.constants).iter().map(constant).collect(),
                    errors: built(&module.errors).iter().map(error).collect(),
                }
            }

            fn module_to(module: &Module) -> Result<legacy::ModuleMetadata, String> {
                let storage = match &module.storage {
                    Some(storage) => {
                        let entries = storage
                            .entries
                            .iter()
                            .map(|entry| {
                                entry_to(entry)
                                    .map_err(|what| format!("{what} in {}.{}", module.name, entry.name))
                            })
                            .collect::<Result<Vec<_>, _>>()?;
                        Some(decoded(legacy::StorageMetadata {
                            prefix: decoded(storage.prefix.clone()),
                            entries: decoded(entries),
                        }))
                    }
                    None => None,
                };
                legacy_adapter!(@index_to module $(, $index)?);

                Ok(legacy::ModuleMetadata {
                    name: decoded(module.name.clone()),
                    storage,
                    calls: module
                        .calls
                        .as_ref()
                        .map(|calls| decoded(calls.iter().map(function_to).collect())),
                    event: module
                        .events
                        .as_ref()
                        .map(|events| decoded(events.iter().map(event_to).collect())),
                    constants: decoded(module.constants.iter().map(constant_to).collect()),
                    errors: decoded(module.errors.iter().map(error_to).collect()),
                    $($index: $index,)?
                })
            }

            fn storage_of(storage: &legacy::StorageMetadata) -> StorageMetadata {
                StorageMetadata {
                    prefix: text(&storage.prefix),
                    entries: items(&storage.entries).iter().map(entry).collect(),
                }
            }

            fn entry(entry: &legacy::StorageEntryMetadata) -> StorageEntry {
                StorageEntry {
                    name: text(&entry.name),
                    modifier: match entry.modifier {
                        legacy::StorageEntryModifier::Optional => StorageEntryModifier::Optional,
                        legacy::StorageEntryModifier::Default => StorageEntryModifier::Default,
                    },
                    ty: entry_type(&entry.ty),
                    fallback: bytes(&entry.default),
                    documentation: texts(&entry.documentation),
                }
            }

            fn entry_to(entry: &StorageEntry) -> Result<legacy::StorageEntryMetadata, String> {
                Ok(legacy::StorageEntryMetadata {
                    name: decoded(entry.name.clone()),
                    modifier: match entry.modifier {
                        StorageEntryModifier::Optional => legacy::StorageEntryModifier::Optional,
                        StorageEntryModifier::Default => legacy::StorageEntryModifier::Default,
                    },
                    ty: entry_type_to(&entry.ty)?,
                    default: decoded(entry.fallback.clone()),
                    documentation: decoded_texts(&entry.documentation),
                })
            }

            fn entry_type(ty: &legacy::StorageEntryType) -> StorageEntryType {
                match ty {
                    legacy::StorageEntryType::Plain(value) => StorageEntryType::Plain {
                        value: text(value),
                    },
                    legacy::StorageEntryType::Map {
                        hasher,
                        key,
                        value,
                        $linked: linked,
                    } => StorageEntryType::Map {
                        hasher: hasher_of(hasher),
                        key: text(key),
                        value: text(value),
                        linked: *linked,
                    },
                    legacy::StorageEntryType::DoubleMap {
                        hasher,
                        key1,
                        key2,
                        value,
                        key2_hasher,
                    } => StorageEntryType::DoubleMap {
                        hasher: hasher_of(hasher),
                        key1: text(key1),
                        key2: text(key2),
                        value: text(value),
                        key2_hasher: hasher_of(key2_hasher),
                    },
                    $(legacy::StorageEntryType::$nmap {
                        keys,
                        hashers,
                        value,
                    } => StorageEntryType::NMap {
                        keys: texts(keys),
                        hashers: items(hashers).iter().map(hasher_of).collect(),
                        value: text(value),
                    },)?
                }
            }

            fn entry_type_to(ty: &StorageEntryType) -> Result<legacy::StorageEntryType, String> {
                Ok(match ty {
                    StorageEntryType::Plain { value } => {
                        legacy::StorageEntryType::Plain(decoded(value.clone()))
                    }
                    StorageEntryType::Map {
                        hasher,
                        key,
                        value,
                        linked,
                    } => legacy::StorageEntryType::Map {
                        hasher: hasher_to(*hasher)?,
                        key: decoded(key.clone()),
                        value: decoded(value.clone()),
                        $linked: *linked,
                    },
                    StorageEntryType::DoubleMap {
                        hasher,
                        key1,
                        key2,
                        value,
                        key2_hasher,
                    } => legacy::StorageEntryType::DoubleMap {
                        hasher: hasher_to(*hasher)?,
                        key1: decoded(key1.clone()),
                        key2: decoded(key2.clone()),
                        value: decoded(value.clone()),
                        key2_hasher: hasher_to(*key2_hasher)?,
                    },
                    StorageEntryType::NMap {
                        keys,
                        hashers,
                        value,
                    } => nmap_to(keys, hashers, value)?,
                })
            }

            legacy_adapter!(@nmap_to $($nmap)?);

            fn hasher_of(hasher: &legacy::StorageHasher) -> StorageHasher {
                match hasher {
                    legacy::StorageHasher::Blake2_128 => StorageHasher::Blake2_128,
                    legacy::StorageHasher::Blake2_256 => StorageHasher::Blake2_256,
                    legacy::StorageHasher::Blake2_128Concat => StorageHasher::Blake2_128Concat,
                    legacy::StorageHasher::Twox128 => StorageHasher::Twox128,
                    legacy::StorageHasher::Twox256 => StorageHasher::Twox256,
                    legacy::StorageHasher::Twox64Concat => StorageHasher::Twox64Concat,
                    $(legacy::StorageHasher::$identity => StorageHasher::Identity,)?
                }
            }

            fn hasher_to(hasher: StorageHasher) -> Result<legacy::StorageHasher, String> {
                Ok(match hasher {
                    StorageHasher::Blake2_128 => legacy::StorageHasher::Blake2_128,
                    StorageHasher::Blake2_256 => legacy::StorageHasher::Blake2_256,
                    StorageHasher::Blake2_128Concat => legacy::StorageHasher::Blake2_128Concat,
                    StorageHasher::Twox128 => legacy::StorageHasher::Twox128,
                    StorageHasher::Twox256 => legacy::StorageHasher::Twox256,
                    StorageHasher::Twox64Concat => legacy::StorageHasher::Twox64Concat,
                    $(StorageHasher::Identity => legacy::StorageHasher::$identity,)?
                    #[allow(unreachable_patterns)]
                    StorageHasher::Identity => return Err("Identity hasher".into()),
                })
            }

            fn function(function: &legacy::FunctionMetadata) -> FunctionMetadata {
                FunctionMetadata {
                    name: text(&function.name),
                    arguments: items(&function.arguments)
                        .iter()
                        .map(|argument| FunctionArgument {
                            name: text(&argument.name),
                            ty: text(&argument.ty),
                        })
                        .collect(),
                    documentation: texts(&function.documentation),
                }
            }

            fn function_to(function: &FunctionMetadata) -> legacy::FunctionMetadata {
                legacy::FunctionMetadata {
                    name: decoded(function.name.clone()),
                    arguments: decoded(
                        function
                            .arguments
                            .iter()
                            .map(|argument| legacy::FunctionArgumentMetadata {
                                name: decoded(argument.name.clone()),
                                ty: decoded(argument.ty.clone()),
                            })
                            .collect(),
                    ),
                    documentation: decoded_texts(&function.documentation),
                }
            }

            fn event(event: &legacy::EventMetadata) -> EventMetadata {
                EventMetadata {
                    name: text(&event.name),
                    arguments: texts(&event.arguments),
                    documentation: texts(&event.documentation),
                }
            }

            fn event_to(event: &EventMetadata) -> legacy::EventMetadata {
                legacy::EventMetadata {
                    name: decoded(event.name.clone()),
                    arguments: decoded_texts(&event.arguments),
                    documentation: decoded_texts(&event.documentation),
                }
            }

            fn constant(constant: &legacy::ModuleConstantMetadata) -> ConstantMetadata {
                ConstantMetadata {
                    name: text(&constant.name),
                    ty: text(&constant.ty),
                    value: bytes(&constant.value),
                    documentation: texts(&constant.documentation),
                }
            }

            fn constant_to(constant: &ConstantMetadata) -> legacy::ModuleConstantMetadata {
                legacy::ModuleConstantMetadata {
                    name: decoded(constant.name.clone()),
                    ty: decoded(constant.ty.clone()),
                    value: decoded(constant.value.clone()),
                    documentation: decoded_texts(&constant.documentation),
                }
            }

            fn error(error: &legacy::ErrorMetadata) -> ErrorMetadata {
                ErrorMetadata {
                    name: text(&error.name),
                    documentation: texts(&error.documentation),
                }
            }

            fn error_to(error: &ErrorMetadata) -> legacy::ErrorMetadata {
                legacy::ErrorMetadata {
                    name: decoded(error.name.clone()),
                    documentation: decoded_texts(&error.documentation),
                }
            }
        }
    };

    (@extrinsic_from $meta:ident) => {
        None
    };
    (@extrinsic_from $meta:ident, $field:ident) => {
        Some(ExtrinsicMetadata {
            version: $meta.$field.version,
            signed_extensions: $meta.$field.signed_extensions.iter().map(text).collect(),
        })
    };

    (@extrinsic_to $metadata:ident) => {
        if $metadata.extrinsic.is_some() {
            return Err("Extrinsic metadata".into());
        }
    };
    (@extrinsic_to $metadata:ident, $field:ident) => {
        let $field = match &$metadata.extrinsic {
            Some(extrinsic) => legacy::ExtrinsicMetadata {
                version: extrinsic.version,
                signed_extensions: extrinsic
                    .signed_extensions
                    .iter()
                    .map(|name| decoded(name.clone()))
                    .collect(),
            },
            None => return Err("Missing extrinsic metadata".into()),
        };
    };

    (@index_from $module:ident) => {
        None
    };
    (@index_from $module:ident, $field:ident) => {
        Some($module.$field)
    };

    (@index_to $module:ident) => {
        if $module.index.is_some() {
            return Err(format!("Module index of {}", $module.name));
        }
    };
    (@index_to $module:ident, $field:ident) => {
        let $field = $module
            .index
            .ok_or_else(|| format!("Missing module index of {}", $module.name))?;
    };

    (@nmap_to) => {
        fn nmap_to(
            _keys: &[String],
            _hashers: &[StorageHasher],
            _value: &str,
        ) -> Result<legacy::StorageEntryType, String> {
            Err("NMap storage".into())
        }
    };
    (@nmap_to $variant:ident) => {
        fn nmap_to(
            keys: &[String],
            hashers: &[StorageHasher],
            value: &str,
        ) -> Result<legacy::StorageEntryType, String> {
            Ok(legacy::StorageEntryType::$variant {
                keys: decoded_texts(keys),
                hashers: decoded(
                    hashers
                        .iter()
                        .map(|hasher| hasher_to(*hasher))
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                value: decoded(value.to_owned()),
            })
        }
    };
}

legacy_adapter!(v10: V10, RuntimeMetadataV10, linked: is_linked);
legacy_adapter!(
    v11: V11, RuntimeMetadataV11,
    linked: unused,
    identity: Identity,
    extrinsic: extrinsic
);
legacy_adapter!(
    v12: V12, RuntimeMetadataV12,
    linked: unused,
    identity: Identity,
    extrinsic: extrinsic,
    index: index
);
legacy_adapter!(
    v13: V13, RuntimeMetadataV13,
    linked: unused,
    identity: Identity,
    extrinsic: extrinsic,
    index: index,
    nmap: NMap
);
