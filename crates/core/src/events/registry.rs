// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy type names for skipping event arguments.
//!
//! Pre-V14 metadata describes event arguments only by type name (`T::AccountId`, `Vec<u8>`,
//! `Compact<T::Balance>`). To step over an event that has no destination the decoder resolves
//! each name through a `scale_info_legacy` registry and walks the bytes with `scale_decode`.

use crate::codec::{CodecError, Cursor};
use scale_decode::visitor::{self, DecodeError};
use scale_info_legacy::{InsertName, LookupName, TypeShape};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Cannot parse type name `{name}`: {reason}")]
    InvalidName { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum SkipError {
    #[error("Type `{ty}` cannot be resolved: {reason}")]
    UnknownType { ty: String, reason: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Names common Substrate runtimes use in event arguments, with their definitions.
const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("AccountId", "[u8; 32]"),
    ("AccountId32", "[u8; 32]"),
    ("ValidatorId", "[u8; 32]"),
    ("AuthorityId", "[u8; 32]"),
    ("Hash", "[u8; 32]"),
    ("H256", "[u8; 32]"),
    ("BlockHash", "[u8; 32]"),
    ("CodeHash", "[u8; 32]"),
    ("Balance", "u128"),
    ("BalanceOf<T>", "u128"),
    ("Kind", "[u8; 16]"),
    ("AccountIndex", "u32"),
    ("BlockNumber", "u32"),
    ("SessionIndex", "u32"),
    ("EraIndex", "u32"),
    ("PropIndex", "u32"),
    ("ReferendumIndex", "u32"),
    ("ProposalIndex", "u32"),
    ("MemberCount", "u32"),
    ("RegistrarIndex", "u32"),
    ("Perbill", "u32"),
    ("Permill", "u32"),
    ("Index", "u32"),
    ("Nonce", "u32"),
    ("Moment", "u64"),
    ("Weight", "u64"),
    ("AuthorityWeight", "u64"),
    ("LockIdentifier", "[u8; 8]"),
    ("Text", "Vec<u8>"),
    ("String", "Vec<u8>"),
    ("Bytes", "Vec<u8>"),
    ("OpaqueTimeSlot", "Vec<u8>"),
    ("Percent", "u8"),
    ("DispatchClass", "u8"),
    ("DispatchInfo", "(Weight, DispatchClass, bool)"),
    ("DispatchError", "(Option<u8>, u8)"),
    ("DispatchResult", "Result<(), DispatchError>"),
    ("AuthorityList", "Vec<(AuthorityId, AuthorityWeight)>"),
    ("VoteThreshold", "u8"),
];

/// Legacy type table used to skip undeclared events.
pub struct TypeRegistry {
    types: scale_info_legacy::TypeRegistry,
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry").finish_non_exhaustive()
    }
}

impl Default for TypeRegistry {
    /// Registry preloaded with the names common Substrate runtimes use in event arguments.
    fn default() -> Self {
        let mut registry = Self::empty();
        for (name, definition) in DEFAULT_TYPES {
            if let Err(err) = registry.register(name, definition) {
                tracing::error!(%err, "Skipping built-in event argument type");
            }
        }
        registry
    }
}

impl TypeRegistry {
    /// Registry knowing only primitives and the generic wrappers (`Vec`, `Option`, `Compact`, ...).
    pub fn empty() -> Self {
        Self {
            types: scale_info_legacy::TypeRegistry::basic(),
        }
    }

    /// Make `name` an alias of the type `definition` names, e.g. `("Balance", "u128")`.
    pub fn register(&mut self, name: &str, definition: &str) -> Result<&mut Self, RegistryError> {
        let alias = lookup_name(definition)?;
        let name = InsertName::try_from(lookup_name(name)?).map_err(|err| RegistryError::InvalidName {
            name: name.to_string(),
            reason: err.to_string(),
        })?;
        self.types.insert(name, TypeShape::AliasOf(alias));
        Ok(self)
    }

    /// Advance `cursor` past one value of `type_name`.
    pub fn skip(&self, cursor: &mut Cursor<'_>, type_name: &str) -> Result<(), SkipError> {
        let name = lookup_name(type_name).map_err(|err| SkipError::UnknownType {
            ty: type_name.to_string(),
            reason: err.to_string(),
        })?;
        let start = cursor.position();
        let remaining = cursor.remaining();
        let mut input = cursor.remaining_bytes();

        match visitor::decode_with_visitor(&mut input, name, &self.types, SkipVisitor::new()) {
            Ok(()) => {
                cursor.take(remaining - input.len())?;
                Ok(())
            }
            // The decoder does not say how far it got, so `needed` is a lower bound.
            Err(DecodeError::NotEnoughInput) => Err(CodecError::BufferUnderrun {
                position: start,
                needed: remaining + 1,
                remaining,
            }
            .into()),
            Err(DecodeError::TypeIdNotFound(reason) | DecodeError::TypeResolvingError(reason)) => {
                Err(SkipError::UnknownType {
                    ty: type_name.to_string(),
                    reason,
                })
            }
            Err(err) => Err(CodecError::Invalid {
                type_name: "event argument",
                position: start,
                reason: err.to_string(),
            }
            .into()),
        }
    }
}

fn lookup_name(type_name: &str) -> Result<LookupName, RegistryError> {
    let name = strip_qualifiers(type_name);
    LookupName::parse(&name).map_err(|err| RegistryError::InvalidName {
        name: type_name.to_string(),
        reason: err.to_string(),
    })
}

/// `T::AccountId` -> `AccountId`, `<T as Trait>::Balance` -> `Balance`, anywhere in the name.
fn strip_qualifiers(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len());
    let mut chars = type_name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ':' || chars.peek() != Some(&':') {
            out.push(c);
            continue;
        }
        chars.next();
        let qualifier_end = out.trim_end().len();
        out.truncate(qualifier_end);
        let cut = if out.ends_with('>') {
            matching_open(&out).unwrap_or(0)
        } else {
            out.char_indices()
                .rev()
                .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
                .map_or(0, |(i, c)| i + c.len_utf8())
        };
        out.truncate(cut);
    }
    out
}

/// Byte index of the `<` closing with the final `>` of `s`.
fn matching_open(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices().rev() {
        match c {
            '>' => depth += 1,
            '<' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Visits nothing; `decode_with_visitor` still steps over the whole value.
struct SkipVisitor<R> {
    _marker: core::marker::PhantomData<R>,
}

impl<R> SkipVisitor<R> {
    fn new() -> Self {
        SkipVisitor {
            _marker: core::marker::PhantomData,
        }
    }
}

impl<R> scale_decode::Visitor for SkipVisitor<R>
where
    R: scale_type_resolver::TypeResolver,
{
    type Value<'scale, 'resolver> = ();
    type Error = DecodeError;
    type TypeResolver = R;

    fn visit_unexpected<'scale, 'resolver>(
        self,
        _unexpected: visitor::Unexpected,
    ) -> Result<Self::Value<'scale, 'resolver>, Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_scale_codec::{Compact, Encode};

    fn skipped(registry: &TypeRegistry, type_name: &str, bytes: &[u8]) -> usize {
        let mut cursor = Cursor::new(bytes);
        registry.skip(&mut cursor, type_name).unwrap();
        cursor.position()
    }

    #[test]
    fn test_default_types_all_register() {
        let mut registry = TypeRegistry::empty();
        for (name, definition) in DEFAULT_TYPES {
            assert!(registry.register(name, definition).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_strip_qualifiers() {
        assert_eq!(strip_qualifiers("T::AccountId"), "AccountId");
        assert_eq!(
            strip_qualifiers("<T as frame_system::Trait>::AccountId"),
            "AccountId"
        );
        assert_eq!(strip_qualifiers("Vec<T::AccountId>"), "Vec<AccountId>");
        assert_eq!(
            strip_qualifiers("Vec<<T as Trait<I>>::Balance>"),
            "Vec<Balance>"
        );
        assert_eq!(
            strip_qualifiers("(T::AccountId, Compact<T::Balance>)"),
            "(AccountId, Compact<Balance>)"
        );
        assert_eq!(strip_qualifiers("[u8; 16]"), "[u8; 16]");
    }

    #[test]
    fn test_skip_fixed_size_names() {
        let registry = TypeRegistry::default();
        let bytes = [0u8; 40];
        assert_eq!(skipped(&registry, "T::AccountId", &bytes), 32);
        assert_eq!(skipped(&registry, "<T as frame_system::Trait>::AccountId", &bytes), 32);
        assert_eq!(skipped(&registry, "Balance", &bytes), 16);
        assert_eq!(skipped(&registry, "Kind", &bytes), 16);
        assert_eq!(skipped(&registry, "[u8; 16]", &bytes), 16);
        assert_eq!(skipped(&registry, "(T::AccountId, u32)", &bytes), 36);
    }

    #[test]
    fn test_account_nonce_is_four_bytes() {
        let registry = TypeRegistry::default();
        let bytes = 7u32.encode();
        assert_eq!(skipped(&registry, "T::Index", &bytes), 4);
        assert_eq!(skipped(&registry, "Nonce", &bytes), 4);
    }

    #[test]
    fn test_register_custom_type() {
        let mut registry = TypeRegistry::empty();
        let mut cursor = Cursor::new(&[1, 2, 3, 4]);
        assert!(matches!(
            registry.skip(&mut cursor, "Balance"),
            Err(SkipError::UnknownType { .. })
        ));
        assert_eq!(cursor.position(), 0);

        registry.register("Balance", "u64").unwrap();
        assert_eq!(skipped(&registry, "T::Balance", &[0u8; 8]), 8);
    }

    #[test]
    fn test_skip_variable_length_values() {
        let registry = TypeRegistry::default();

        let bytes = (vec![[1u8; 32], [2u8; 32]], Compact(1_000_000u64), true).encode();
        assert_eq!(
            skipped(&registry, "(Vec<AccountId>, Compact<Balance>, bool)", &bytes),
            bytes.len()
        );

        let bytes = (Some(5u8), 9u8).encode();
        assert_eq!(skipped(&registry, "DispatchError", &bytes), 3);

        let bytes = vec![b"abc".to_vec(), Vec::new()].encode();
        assert_eq!(skipped(&registry, "Vec<Vec<u8>>", &bytes), bytes.len());

        let bytes = Some(vec![1u8, 2]).encode();
        assert_eq!(skipped(&registry, "Option<Bytes>", &bytes), bytes.len());
    }

    #[test]
    fn test_skip_short_input_fails_without_consuming() {
        let registry = TypeRegistry::default();
        let mut bytes = vec![[0u8; 32]; 2].encode();
        bytes.pop();
        let mut cursor = Cursor::new(&bytes);
        let err = registry.skip(&mut cursor, "Vec<AccountId>").unwrap_err();
        assert!(matches!(err, SkipError::Codec(_)), "unexpected error: {err}");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_huge_array_lengths_error_instead_of_overflowing() {
        let registry = TypeRegistry::default();
        for name in [
            "[u8; 18446744073709551615]",
            "([u8; 18446744073709551615], [u8; 18446744073709551615])",
            "[[u8; 4294967296]; 4294967296]",
        ] {
            let mut cursor = Cursor::new(&[1, 2, 3]);
            assert!(registry.skip(&mut cursor, name).is_err(), "{name}");
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn test_unknown_names_are_reported() {
        let registry = TypeRegistry::default();
        let err = registry
            .skip(&mut Cursor::new(&[0u8; 8]), "T::Unheard")
            .unwrap_err();
        assert!(
            matches!(err, SkipError::UnknownType { ref ty, .. } if ty == "T::Unheard"),
            "unexpected error: {err}"
        );
    }
}
