//! Asciicast v2 event codec.
//!
//! Events travel as positional 3-element JSON arrays `[time, code, data]`
//! rather than keyed objects, so the codec validates each slot explicitly
//! before exposing the typed record.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde_json::Value;

use crate::error::{CastError, Result};

/// One timestamped record in a recording stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event time in seconds. Whether this is absolute, a delta from the
    /// previous event, or a running sum depends on the stream's temporal
    /// encoding, not on the record itself.
    pub time: f64,
    /// Event kind tag (`"o"` output, `"i"` input, `"r"` resize, `"m"`
    /// marker). Opaque to the transcoder.
    pub code: String,
    /// Event payload. Any JSON value, passed through untouched.
    pub data: Value,
}

impl Event {
    /// Create an event.
    #[must_use]
    pub fn new(time: f64, code: impl Into<String>, data: Value) -> Self {
        Self {
            time,
            code: code.into(),
            data,
        }
    }

    /// Decode an event from one line of JSON.
    ///
    /// The line must be exactly a 3-element array whose first element is a
    /// number and whose second element is a string. The third element is
    /// kept opaque.
    pub fn decode(line: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| CastError::malformed(format!("event record is not valid JSON: {e}")))?;
        let Value::Array(slots) = value else {
            return Err(CastError::malformed("event record is not a JSON array"));
        };

        let [time_slot, code_slot, data] = <[Value; 3]>::try_from(slots).map_err(|slots| {
            CastError::malformed(format!(
                "event record has {} elements, expected 3",
                slots.len()
            ))
        })?;

        let time = time_slot
            .as_f64()
            .ok_or_else(|| CastError::invalid_time(time_slot.to_string()))?;
        let code = code_slot
            .as_str()
            .map(String::from)
            .ok_or_else(|| CastError::invalid_code(code_slot.to_string()))?;

        Ok(Self { time, code, data })
    }

    /// Encode the event as one line of JSON, without a trailing newline.
    ///
    /// Always emits exactly `[time, code, data]`. Numbers use serde_json's
    /// shortest round-trip formatting, so a passed-through time re-encodes
    /// without drift.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("three JSON-representable slots always serialize")
    }
}

impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_tuple(3)?;
        record.serialize_element(&self.time)?;
        record.serialize_element(&self.code)?;
        record.serialize_element(&self.data)?;
        record.end()
    }
}
