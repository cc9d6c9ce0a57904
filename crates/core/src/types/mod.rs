// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire types shared by the resolver, the event decoder and the storage key hasher.

pub mod digest;
pub mod dispatch;
pub mod index;
pub mod phase;
pub mod storage_key;

pub use digest::{ConsensusEngineId, Digest, DigestItem};
pub use dispatch::{DispatchClass, DispatchError, DispatchInfo};
pub use index::{CallIndex, EventId};
pub use phase::Phase;
pub use storage_key::StorageKey;

pub use sp_core::H256;
pub use sp_core::crypto::AccountId32;

pub type Hash = H256;
pub type AccountId = AccountId32;
pub type AccountIndex = u32;
pub type Balance = u128;
pub type BlockNumber = u32;
pub type SessionIndex = u32;
pub type Weight = u64;
pub type AuthorityId = [u8; 32];
pub type AuthorityWeight = u64;
/// GRANDPA authority set with voting weights.
pub type AuthorityList = Vec<(AuthorityId, AuthorityWeight)>;

/// Trailing field of every event record.
pub type Topics = Vec<Hash>;
