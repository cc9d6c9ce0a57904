// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dynamic decoding of event records.
//!
//! The raw `System.Events` value is a compact count followed by records of the form
//! `Phase ++ EventId ++ arguments ++ Topics`. Which arguments follow depends on the event, so
//! each record is resolved through the metadata and decoded into the slot the caller's
//! [`EventSink`] declares for it.

mod decoder;
mod record;
pub mod records;
pub mod registry;

pub use decoder::{EventDecodeError, EventDecoder, EventRecordsRaw, decode_event_records};
pub use record::{EventRecord, EventSink, EventSlot, FieldType, RecordReader};
pub use records::EventRecords;
pub use registry::{RegistryError, SkipError, TypeRegistry};
