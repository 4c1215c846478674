//! Line decoder

use serde_json::Value;
use tracing::trace;

use super::payload::type_name;
use super::types::Event;
use crate::error::DecodeError;

/// Decode one trimmed, non-empty line into an event
///
/// Anything that is not a JSON object is a `DecodeError` carrying the raw line.
pub fn decode(line: &str) -> Result<Event, DecodeError> {
    trace!(len = line.len(), "decode: called");
    let value: Value = serde_json::from_str(line).map_err(|source| DecodeError::Syntax {
        line: line.to_string(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(Event::from_map(map)),
        other => Err(DecodeError::NotAnObject {
            line: line.to_string(),
            found: type_name(&other),
        }),
    }
}
