//! Length and line limits applied while rendering

use serde::{Deserialize, Serialize};

/// Caps on how much of each payload is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderLimits {
    /// Characters of a tool argument value
    #[serde(rename = "tool-arg")]
    pub tool_arg: usize,

    /// Characters of an error message
    #[serde(rename = "error-message")]
    pub error_message: usize,

    /// Characters of an unknown event's payload summary
    #[serde(rename = "fallback-payload")]
    pub fallback_payload: usize,

    /// Characters of a line that failed to parse
    #[serde(rename = "parse-error-preview")]
    pub parse_error_preview: usize,

    /// Lines of a text event
    #[serde(rename = "text-lines")]
    pub text_lines: usize,

    /// Lines of a thinking event
    #[serde(rename = "thinking-lines")]
    pub thinking_lines: usize,

    /// Characters of the session id shown in debug mode
    #[serde(rename = "session-id-prefix")]
    pub session_id_prefix: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            tool_arg: 80,
            error_message: 200,
            fallback_payload: 100,
            parse_error_preview: 80,
            text_lines: 5,
            thinking_lines: 3,
            session_id_prefix: 8,
        }
    }
}
