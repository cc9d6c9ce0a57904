// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Name to index resolution over decoded metadata.
//!
//! Modules without an explicit index (V10, V11) are numbered densely per capability: only the
//! modules that declare calls count towards call indices, and only the modules that declare
//! events count towards event indices.

use super::{ConstantMetadata, EventMetadata, Metadata, Module, StorageEntry};
use crate::types::{CallIndex, EventId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Call name `{0}` is not of the form `Module.call`")]
    MalformedCallName(String),

    #[error("module {module} not found in metadata for call {call}")]
    CallModuleNotFound { module: String, call: String },

    #[error("method {method} not found within module {module} for call {call}")]
    CallNotFound {
        module: String,
        method: String,
        call: String,
    },

    #[error("module index {0} out of range")]
    EventModuleOutOfRange(u8),

    #[error("event index {event_index} for module {module_index} out of range")]
    EventOutOfRange { module_index: u8, event_index: u8 },

    #[error("module {0} not found in metadata")]
    StorageModuleNotFound(String),

    #[error("storage {item} not found within module {module}")]
    StorageNotFound { module: String, item: String },

    #[error("constant {constant} not found within module {module}")]
    ConstantNotFound { module: String, constant: String },
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::CallModuleNotFound { .. }
                | LookupError::CallNotFound { .. }
                | LookupError::StorageModuleNotFound(_)
                | LookupError::StorageNotFound { .. }
                | LookupError::ConstantNotFound { .. }
        )
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            LookupError::EventModuleOutOfRange(_) | LookupError::EventOutOfRange { .. }
        )
    }
}

/// Pairs each module passing `filter` with its index in that capability's index space.
fn indexed<'m>(
    modules: &'m [Module],
    filter: impl Fn(&Module) -> bool,
) -> impl Iterator<Item = (u8, &'m Module)> {
    let mut next = 0u8;
    modules.iter().filter(move |m| filter(m)).map(move |module| {
        let index = module.index.unwrap_or(next);
        next = next.wrapping_add(1);
        (index, module)
    })
}

impl Metadata {
    /// Resolve `"Module.call"` into its call index.
    pub fn find_call_index(&self, call: &str) -> Result<CallIndex, LookupError> {
        let (module_name, method) = call
            .split_once('.')
            .filter(|(module, method)| !module.is_empty() && !method.is_empty())
            .ok_or_else(|| LookupError::MalformedCallName(call.to_string()))?;

        let (module_index, module) = indexed(&self.modules, Module::has_calls)
            .find(|(_, module)| module.name == module_name)
            .ok_or_else(|| LookupError::CallModuleNotFound {
                module: module_name.to_string(),
                call: call.to_string(),
            })?;

        module
            .calls
            .iter()
            .flatten()
            .position(|function| function.name == method)
            .and_then(|position| u8::try_from(position).ok())
            .map(|call_index| CallIndex::new(module_index, call_index))
            .ok_or_else(|| LookupError::CallNotFound {
                module: module_name.to_string(),
                method: method.to_string(),
                call: call.to_string(),
            })
    }

    /// Resolve an event id into `(module name, event name)`.
    pub fn find_event_names(&self, event_id: EventId) -> Result<(&str, &str), LookupError> {
        let (module, event) = self.find_event(event_id)?;
        Ok((&module.name, &event.name))
    }

    /// Resolve an event id into its module and event metadata.
    pub fn find_event(&self, event_id: EventId) -> Result<(&Module, &EventMetadata), LookupError> {
        let (_, module) = indexed(&self.modules, Module::has_events)
            .find(|(index, _)| *index == event_id.module_index)
            .ok_or(LookupError::EventModuleOutOfRange(event_id.module_index))?;

        module
            .events
            .iter()
            .flatten()
            .nth(usize::from(event_id.event_index))
            .map(|event| (module, event))
            .ok_or(LookupError::EventOutOfRange {
                module_index: event_id.module_index,
                event_index: event_id.event_index,
            })
    }

    /// Find a storage entry by storage prefix and item name.
    pub fn find_storage_entry(&self, prefix: &str, item: &str) -> Result<&StorageEntry, LookupError> {
        let storage = self
            .modules
            .iter()
            .filter_map(|module| module.storage.as_ref())
            .find(|storage| storage.prefix == prefix)
            .ok_or_else(|| LookupError::StorageModuleNotFound(prefix.to_string()))?;

        storage
            .entries
            .iter()
            .find(|entry| entry.name == item)
            .ok_or_else(|| LookupError::StorageNotFound {
                module: prefix.to_string(),
                item: item.to_string(),
            })
    }

    pub fn find_module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name == name)
    }

    pub fn find_constant(&self, module: &str, name: &str) -> Result<&ConstantMetadata, LookupError> {
        self.modules
            .iter()
            .filter(|m| m.name == module)
            .flat_map(|m| &m.constants)
            .find(|constant| constant.name == name)
            .ok_or_else(|| LookupError::ConstantNotFound {
                module: module.to_string(),
                constant: name.to_string(),
            })
    }
}
