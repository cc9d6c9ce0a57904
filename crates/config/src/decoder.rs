use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("The event record limit must be greater than 0")]
    ZeroRecordLimit,
}

/// Limits and policies of the event decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// Largest record count accepted in one `System.Events` value
    ///
    /// Env: RUNTIME_WIRE_MAX_EVENT_RECORDS
    /// Default: 100000
    pub max_event_records: u32,

    /// Fail on events that have no destination instead of skipping them
    ///
    /// Env: RUNTIME_WIRE_REJECT_UNKNOWN_EVENTS
    /// Default: false
    pub reject_unknown_events: bool,
}

pub(crate) fn default_max_event_records() -> u32 {
    100_000
}

impl DecoderConfig {
    pub(crate) fn validate(&self) -> Result<(), DecoderError> {
        if self.max_event_records == 0 {
            return Err(DecoderError::ZeroRecordLimit);
        }

        Ok(())
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_event_records: default_max_event_records(),
            reject_unknown_events: false,
        }
    }
}
