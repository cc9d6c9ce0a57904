// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{CodecError, Cursor, ScaleDecode};
use crate::types::Phase;
use std::any::{Any, TypeId};
use std::fmt;

/// Declared name and type of one field of an event record.
#[derive(Debug, Clone, Copy)]
pub struct FieldType {
    pub name: &'static str,
    full_type_name: &'static str,
    type_id: TypeId,
}

impl FieldType {
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            full_type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Type name without module paths, e.g. `Vec<H256>`.
    pub fn type_name(&self) -> String {
        let mut out = String::new();
        let mut path = String::new();
        for c in self.full_type_name.chars() {
            if c.is_alphanumeric() || c == '_' || c == ':' {
                path.push(c);
            } else {
                out.push_str(last_segment(&path));
                path.clear();
                out.push(c);
            }
        }
        out.push_str(last_segment(&path));
        out
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for FieldType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.type_id == other.type_id
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name())
    }
}

/// Reads the fields of one event record in declaration order.
///
/// The phase is decoded before the destination is known, so the first field is handed over
/// from the record header instead of being read again.
pub struct RecordReader<'c, 'a> {
    phase: Option<Phase>,
    cursor: &'c mut Cursor<'a>,
}

impl<'c, 'a> RecordReader<'c, 'a> {
    pub(crate) fn new(phase: Phase, cursor: &'c mut Cursor<'a>) -> Self {
        Self {
            phase: Some(phase),
            cursor,
        }
    }

    /// The first field. `T` must be [`Phase`].
    pub fn phase_field<T: 'static>(&mut self) -> Result<T, CodecError> {
        let position = self.cursor.position();
        let invalid = |reason: &str| CodecError::Invalid {
            type_name: std::any::type_name::<T>(),
            position,
            reason: reason.to_string(),
        };
        let phase = self
            .phase
            .take()
            .ok_or_else(|| invalid("the phase field was already read"))?;
        let boxed: Box<dyn Any> = Box::new(phase);
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| invalid("the first field of an event record must be Phase"))
    }

    /// The next field, decoded from the raw record.
    pub fn field<T: ScaleDecode>(&mut self) -> Result<T, CodecError> {
        self.cursor.decode()
    }
}

/// A typed event record: `Phase`, the event arguments, then `Topics`.
///
/// Implemented by [`event_record!`](crate::event_record).
pub trait EventRecord: Sized + 'static {
    fn fields() -> Vec<FieldType>;

    fn decode_record(reader: &mut RecordReader<'_, '_>) -> Result<Self, CodecError>;
}

/// Storage for the decoded records of one event name.
pub trait EventSlot {
    fn fields(&self) -> Vec<FieldType>;

    /// Decode one record and store it. Nothing is stored when decoding fails.
    fn decode_into(&mut self, reader: &mut RecordReader<'_, '_>) -> Result<(), CodecError>;
}

impl<T: EventRecord> EventSlot for Vec<T> {
    fn fields(&self) -> Vec<FieldType> {
        T::fields()
    }

    fn decode_into(&mut self, reader: &mut RecordReader<'_, '_>) -> Result<(), CodecError> {
        let record = T::decode_record(reader)?;
        self.push(record);
        Ok(())
    }
}

/// Destination of decoded events, keyed by `"{Module}_{Event}"`.
///
/// Implemented by [`event_sink!`](crate::event_sink).
pub trait EventSink {
    fn slot(&mut self, name: &str) -> Option<&mut dyn EventSlot>;
}

/// Declare an event record struct and its [`EventRecord`] implementation.
///
/// The first field must be [`Phase`] and the last one [`Topics`](crate::types::Topics); this is
/// checked when a record is decoded.
///
/// ```
/// use runtime_wire::event_record;
/// use runtime_wire::types::{AccountId, Balance, Phase, Topics};
///
/// event_record! {
///     #[derive(Debug)]
///     pub struct EventTreasuryAwarded {
///         pub phase: Phase,
///         pub proposal_index: u32,
///         pub amount: Balance,
///         pub beneficiary: AccountId,
///         pub topics: Topics,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(#[$first_meta:meta])*
            $first_vis:vis $first:ident : $first_ty:ty
            $(,
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            )*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(#[$first_meta])*
            $first_vis $first: $first_ty,
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::events::EventRecord for $name {
            fn fields() -> ::std::vec::Vec<$crate::events::FieldType> {
                ::std::vec![
                    $crate::events::FieldType::of::<$first_ty>(stringify!($first)),
                    $($crate::events::FieldType::of::<$field_ty>(stringify!($field)),)*
                ]
            }

            fn decode_record(
                reader: &mut $crate::events::RecordReader<'_, '_>,
            ) -> ::std::result::Result<Self, $crate::codec::CodecError> {
                let $first = reader.phase_field::<$first_ty>()?;
                $(let $field = reader.field::<$field_ty>()?;)*
                ::std::result::Result::Ok(Self { $first, $($field),* })
            }
        }
    };
}

/// Declare a destination struct with one `Vec` per event name and its [`EventSink`]
/// implementation.
///
/// ```
/// use runtime_wire::{event_record, event_sink};
/// use runtime_wire::types::{Phase, SessionIndex, Topics};
///
/// event_record! {
///     #[derive(Debug)]
///     pub struct EventSessionNewSession {
///         pub phase: Phase,
///         pub session_index: SessionIndex,
///         pub topics: Topics,
///     }
/// }
///
/// event_sink! {
///     #[derive(Debug, Default)]
///     pub struct SessionEvents {
///         "Session_NewSession" => pub new_session: EventSessionNewSession,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_sink {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($event:literal => $field_vis:vis $field:ident : $record:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($field_vis $field: ::std::vec::Vec<$record>,)*
        }

        impl $name {
            /// Number of records across all event names.
            pub fn record_count(&self) -> usize {
                0 $(+ self.$field.len())*
            }
        }

        impl $crate::events::EventSink for $name {
            fn slot(&mut self, name: &str) -> ::std::option::Option<&mut dyn $crate::events::EventSlot> {
                match name {
                    $($event => ::std::option::Option::Some(&mut self.$field as &mut dyn $crate::events::EventSlot),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
