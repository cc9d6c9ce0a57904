// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::record::{EventSink, FieldType, RecordReader};
use super::registry::{SkipError, TypeRegistry};
use crate::codec::{CodecError, Cursor, decode_compact};
use crate::metadata::{EventMetadata, LookupError, Metadata};
use crate::types::{EventId, Phase, Topics};
use runtime_wire_config::DecoderConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventDecodeError {
    #[error("Failed to decode the number of event records: {0}")]
    Count(#[source] CodecError),

    #[error("Block holds {count} event records, more than the limit of {limit}")]
    TooManyRecords { count: u128, limit: u32 },

    #[error("Failed to decode the phase or EventID of event #{index}: {source}")]
    Header { index: u32, source: CodecError },

    #[error("Failed to resolve event #{index}: {source}")]
    Lookup { index: u32, source: LookupError },

    #[error(
        "expected event #{index} with EventID {event_id}, field {name} to have at least 2 fields (for Phase and Topics), but has {count} fields"
    )]
    TooFewFields {
        index: u32,
        event_id: EventId,
        name: String,
        count: usize,
    },

    #[error(
        "expected the first field of event #{index} with EventID {event_id}, field {name} to be of type Phase, but got {found}"
    )]
    FirstFieldNotPhase {
        index: u32,
        event_id: EventId,
        name: String,
        found: String,
    },

    #[error(
        "expected the last field of event #{index} with EventID {event_id}, field {name} to be of type Vec<Hash> for Topics, but got {found}"
    )]
    LastFieldNotTopics {
        index: u32,
        event_id: EventId,
        name: String,
        found: String,
    },

    #[error("Failed to decode event #{index} with EventID {event_id}, field {name}: {source}")]
    Record {
        index: u32,
        event_id: EventId,
        name: String,
        source: CodecError,
    },

    #[error("Event #{index} with EventID {event_id}, field {name} has no destination")]
    NoDestination {
        index: u32,
        event_id: EventId,
        name: String,
    },

    #[error(
        "Cannot skip event #{index} with EventID {event_id}, field {name}: argument type `{ty}` is unknown"
    )]
    UnknownArgumentType {
        index: u32,
        event_id: EventId,
        name: String,
        ty: String,
    },
}

impl EventDecodeError {
    /// Underlying codec failure, if the error comes from malformed input.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            EventDecodeError::Count(source)
            | EventDecodeError::Header { source, .. }
            | EventDecodeError::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Decodes the raw `System.Events` storage value into an [`EventSink`].
///
/// Each record is resolved through the metadata to a `"{Module}_{Event}"` name. Records with a
/// slot in the sink are decoded into it; the others are skipped using the argument types the
/// metadata declares, unless [`reject_unknown_events`](Self::reject_unknown_events) is set.
#[derive(Debug)]
pub struct EventDecoder<'m> {
    metadata: &'m Metadata,
    registry: TypeRegistry,
    max_records: u32,
    reject_unknown: bool,
}

impl<'m> EventDecoder<'m> {
    pub fn new(metadata: &'m Metadata) -> Self {
        Self::from_config(metadata, &DecoderConfig::default())
    }

    pub fn from_config(metadata: &'m Metadata, config: &DecoderConfig) -> Self {
        Self {
            metadata,
            registry: TypeRegistry::default(),
            max_records: config.max_event_records,
            reject_unknown: config.reject_unknown_events,
        }
    }

    /// Replace the type table used to skip events without a slot.
    pub fn with_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_max_records(mut self, max_records: u32) -> Self {
        self.max_records = max_records;
        self
    }

    /// Fail on events the sink has no slot for instead of skipping them.
    pub fn reject_unknown_events(mut self, reject: bool) -> Self {
        self.reject_unknown = reject;
        self
    }

    pub fn decode<S: EventSink + ?Sized>(
        &self,
        raw: &[u8],
        destination: &mut S,
    ) -> Result<(), EventDecodeError> {
        let mut cursor = Cursor::new(raw);
        let count = decode_compact(&mut cursor).map_err(EventDecodeError::Count)?;
        let count = u32::try_from(count)
            .ok()
            .filter(|count| *count <= self.max_records)
            .ok_or(EventDecodeError::TooManyRecords {
                count,
                limit: self.max_records,
            })?;

        tracing::debug!(count, bytes = raw.len(), "Decoding event records");

        for index in 0..count {
            let header = |source| EventDecodeError::Header { index, source };
            let phase: Phase = cursor.decode().map_err(header)?;
            let event_id: EventId = cursor.decode().map_err(header)?;

            let (module, event) = self
                .metadata
                .find_event(event_id)
                .map_err(|source| EventDecodeError::Lookup { index, source })?;
            let name = format!("{}_{}", module.name, event.name);

            match destination.slot(&name) {
                Some(slot) => {
                    check_shape(&slot.fields(), index, event_id, &name)?;
                    let mut reader = RecordReader::new(phase, &mut cursor);
                    slot.decode_into(&mut reader)
                        .map_err(|source| EventDecodeError::Record {
                            index,
                            event_id,
                            name: name.clone(),
                            source,
                        })?;
                    tracing::trace!(index, %event_id, name = %name, "Decoded event record");
                }
                None if self.reject_unknown => {
                    return Err(EventDecodeError::NoDestination {
                        index,
                        event_id,
                        name,
                    });
                }
                None => {
                    self.skip_record(&mut cursor, event, index, event_id, &name)?;
                    tracing::debug!(index, %event_id, name = %name, "Skipped event without destination");
                }
            }
        }

        if !cursor.is_empty() {
            tracing::debug!(unread = cursor.remaining(), "Trailing bytes after event records");
        }
        Ok(())
    }

    fn skip_record(
        &self,
        cursor: &mut Cursor<'_>,
        event: &EventMetadata,
        index: u32,
        event_id: EventId,
        name: &str,
    ) -> Result<(), EventDecodeError> {
        for ty in &event.arguments {
            self.registry.skip(cursor, ty).map_err(|err| match err {
                SkipError::UnknownType { .. } => EventDecodeError::UnknownArgumentType {
                    index,
                    event_id,
                    name: name.to_string(),
                    ty: ty.clone(),
                },
                SkipError::Codec(source) => EventDecodeError::Record {
                    index,
                    event_id,
                    name: name.to_string(),
                    source,
                },
            })?;
        }
        cursor
            .decode::<Topics>()
            .map(drop)
            .map_err(|source| EventDecodeError::Record {
                index,
                event_id,
                name: name.to_string(),
                source,
            })
    }
}

/// Records must start with `Phase` and end with `Topics`.
fn check_shape(
    fields: &[FieldType],
    index: u32,
    event_id: EventId,
    name: &str,
) -> Result<(), EventDecodeError> {
    let [first, .., last] = fields else {
        return Err(EventDecodeError::TooFewFields {
            index,
            event_id,
            name: name.to_string(),
            count: fields.len(),
        });
    };
    if !first.is::<Phase>() {
        return Err(EventDecodeError::FirstFieldNotPhase {
            index,
            event_id,
            name: name.to_string(),
            found: first.type_name(),
        });
    }
    if !last.is::<Topics>() {
        return Err(EventDecodeError::LastFieldNotTopics {
            index,
            event_id,
            name: name.to_string(),
            found: last.type_name(),
        });
    }
    Ok(())
}

/// Decode `raw` with the default decoder settings.
pub fn decode_event_records<S: EventSink + ?Sized>(
    raw: &[u8],
    metadata: &Metadata,
    destination: &mut S,
) -> Result<(), EventDecodeError> {
    EventDecoder::new(metadata).decode(raw, destination)
}

/// Raw `System.Events` storage value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecordsRaw(pub Vec<u8>);

impl EventRecordsRaw {
    pub fn decode_event_records<S: EventSink + ?Sized>(
        &self,
        metadata: &Metadata,
        destination: &mut S,
    ) -> Result<(), EventDecodeError> {
        decode_event_records(&self.0, metadata, destination)
    }
}

impl From<Vec<u8>> for EventRecordsRaw {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
