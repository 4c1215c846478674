//! Event records as they appear in the stream

use serde_json::{Map, Value};

use super::payload::{is_truthy, stringify};

/// Kind of an event, taken from its `type` field
///
/// Known kinds get dedicated rendering rules; anything else lands in `Other`
/// with its original name so it can still be labelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    ToolUse,
    StepStart,
    StepFinish,
    Text,
    Thinking,
    Error,
    SessionStart,
    SessionEnd,
    Other(String),
}

impl EventKind {
    /// Classify a `type` string
    pub fn from_type(name: &str) -> Self {
        match name {
            "tool_use" => EventKind::ToolUse,
            "step_start" => EventKind::StepStart,
            "step_finish" => EventKind::StepFinish,
            "text" => EventKind::Text,
            "thinking" => EventKind::Thinking,
            "error" => EventKind::Error,
            "session_start" => EventKind::SessionStart,
            "session_end" => EventKind::SessionEnd,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// The wire name of this kind
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::ToolUse => "tool_use",
            EventKind::StepStart => "step_start",
            EventKind::StepFinish => "step_finish",
            EventKind::Text => "text",
            EventKind::Thinking => "thinking",
            EventKind::Error => "error",
            EventKind::SessionStart => "session_start",
            EventKind::SessionEnd => "session_end",
            EventKind::Other(name) => name,
        }
    }
}

/// A decoded event
///
/// Payload fields are kept as raw JSON; absent keys are `Value::Null` and are
/// defaulted when read, not here.
#[derive(Clone, Debug)]
pub struct Event {
    pub kind: EventKind,
    pub timestamp: Value,
    pub session_id: Value,
    pub part: Value,
    pub error: Value,
}

impl Event {
    /// Build an event from a parsed top-level JSON object
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let kind = match map.remove("type") {
            None | Some(Value::Null) => EventKind::Other("unknown".to_string()),
            Some(Value::String(name)) => EventKind::from_type(&name),
            Some(other) => EventKind::from_type(&stringify(&other)),
        };

        let session_id = match map.remove("sessionID") {
            Some(id) if !id.is_null() => id,
            _ => map.remove("sessionId").unwrap_or_default(),
        };

        Self {
            kind,
            timestamp: map.remove("timestamp").unwrap_or_default(),
            session_id,
            part: map.remove("part").unwrap_or_default(),
            error: map.remove("error").unwrap_or_default(),
        }
    }

    /// Timestamp as display text, empty when absent
    pub fn timestamp(&self) -> String {
        display_or_empty(&self.timestamp)
    }

    /// Session identifier as display text, empty when absent
    pub fn session_id(&self) -> String {
        display_or_empty(&self.session_id)
    }
}

fn display_or_empty(value: &Value) -> String {
    if is_truthy(value) {
        stringify(value).into_owned()
    } else {
        String::new()
    }
}
