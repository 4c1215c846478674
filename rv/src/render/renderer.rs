//! Per-kind rendering rules

use serde_json::Value;
use tracing::trace;

use super::limits::RenderLimits;
use super::segment::{GUTTER, RenderedOutput};
use super::style::{STYLES, Style, StyleTable, palette};
use super::text::{ELLIPSIS, kind_label, prefix, truncate, truncate_str};
use crate::error::DecodeError;
use crate::event::{Event, EventKind, Payload, is_truthy, stringify};

/// Input keys worth showing for a tool call, most specific first
pub const TOOL_ARG_KEYS: [&str; 6] = ["path", "file_path", "command", "query", "pattern", "url"];

/// Turns events into styled output
///
/// Holds no per-event state; rendering the same event twice gives the same
/// output.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    styles: &'a StyleTable,
    limits: RenderLimits,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(RenderLimits::default())
    }
}

impl Renderer<'static> {
    /// Renderer over the process-wide style table
    pub fn new(limits: RenderLimits) -> Self {
        Self::with_styles(&STYLES, limits)
    }
}

impl<'a> Renderer<'a> {
    pub fn with_styles(styles: &'a StyleTable, limits: RenderLimits) -> Self {
        Self { styles, limits }
    }

    pub fn limits(&self) -> &RenderLimits {
        &self.limits
    }

    /// Render one event, always ending with a blank line
    pub fn render(&self, event: &Event, debug_mode: bool) -> RenderedOutput {
        trace!(kind = event.kind.as_str(), debug_mode, "render: called");
        let mut out = RenderedOutput::new();

        if debug_mode {
            self.debug_prefix(&mut out, event);
        }
        let rule = self.styles.lookup(event.kind.as_str());
        out.push(format!("{} ", rule.icon), Style::PLAIN);
        out.push(kind_label(event.kind.as_str()), rule.style);

        match &event.kind {
            EventKind::ToolUse => self.tool_use(&mut out, &event.part),
            EventKind::StepStart => self.step_start(&mut out, &event.part),
            EventKind::StepFinish => self.step_finish(&mut out, &event.part),
            EventKind::Text => self.text(&mut out, &event.part),
            EventKind::Thinking => self.thinking(&mut out, &event.part),
            EventKind::Error => self.error(&mut out, &event.error),
            EventKind::SessionStart | EventKind::SessionEnd => {
                out.newline();
            }
            EventKind::Other(_) => self.other(&mut out, event),
        }

        out.newline();
        out
    }

    /// Render a line that could not be decoded
    pub fn render_decode_error(&self, err: &DecodeError) -> RenderedOutput {
        trace!(%err, "render_decode_error: called");
        let mut out = RenderedOutput::new();
        out.push(format!("{} ", self.styles.fallback().icon), Style::PLAIN);
        out.push("Parse Error", palette::ALERT).newline();
        out.push(
            format!(
                "{}{}{}",
                GUTTER,
                prefix(err.line(), self.limits.parse_error_preview),
                ELLIPSIS
            ),
            palette::MUTED,
        )
        .newline();
        out.newline();
        out
    }

    fn debug_prefix(&self, out: &mut RenderedOutput, event: &Event) {
        let mut info = Vec::new();
        let timestamp = event.timestamp();
        if !timestamp.is_empty() {
            info.push(format!("[{}]", timestamp));
        }
        let session_id = event.session_id();
        if !session_id.is_empty() {
            info.push(format!(
                "(session: {}...)",
                prefix(&session_id, self.limits.session_id_prefix)
            ));
        }
        if !info.is_empty() {
            out.push(info.join(" "), palette::MUTED);
            out.push(" ", Style::PLAIN);
        }
    }

    fn tool_use(&self, out: &mut RenderedOutput, part: &Value) {
        let state = part.field("state");

        out.push(format!(" ({})", part.text_or("tool", "unknown")), palette::TOOL_NAME);
        if let Some(status) = state.non_empty("status") {
            let style = if status == "completed" {
                palette::SUCCESS
            } else {
                palette::ATTENTION
            };
            out.push(format!(" [{}]", status), style);
        }
        out.newline();

        if let Some(title) = state.non_empty("title") {
            out.gutter().push(format!("Title: {}", title), palette::MUTED).newline();
        }

        let input = state.field("input");
        if !is_truthy(input) {
            return;
        }
        if let Some(key) = TOOL_ARG_KEYS.iter().find(|key| input.has(key)) {
            out.gutter()
                .push(format!("{}: ", key), palette::MUTED)
                .push(truncate(input.field(key), self.limits.tool_arg), palette::ARGUMENT)
                .newline();
        }
    }

    fn step_start(&self, out: &mut RenderedOutput, part: &Value) {
        if let Some(step_type) = part.non_empty("type") {
            out.push(format!(" - {}", step_type), palette::STEP_START);
        }
        out.newline();
    }

    fn step_finish(&self, out: &mut RenderedOutput, part: &Value) {
        if let Some(step_type) = part.non_empty("type") {
            out.push(format!(" - {}", step_type), palette::STEP_FINISH);
        }
        if let Some(duration) = step_duration(part) {
            out.push(format!(" ({:.0}ms)", duration), palette::MUTED);
        }
        out.newline();
    }

    fn text(&self, out: &mut RenderedOutput, part: &Value) {
        out.newline();
        if let Some(text) = part.non_empty("text") {
            let excerpt = Excerpt {
                max_lines: self.limits.text_lines,
                keep_blank_first: true,
                first_style: Style::PLAIN,
                rest_style: palette::MUTED,
            };
            excerpt.render(out, &text);
        }
    }

    fn thinking(&self, out: &mut RenderedOutput, part: &Value) {
        out.newline();
        if let Some(text) = part.non_empty("text") {
            let excerpt = Excerpt {
                max_lines: self.limits.thinking_lines,
                keep_blank_first: false,
                first_style: palette::THINKING,
                rest_style: palette::THINKING,
            };
            excerpt.render(out, &text);
        }
    }

    fn error(&self, out: &mut RenderedOutput, error: &Value) {
        let name = error.text_or("name", "Error");
        let data = error.field("data");
        let message = if data.has("message") {
            stringify(data.field("message")).into_owned()
        } else if error.is_null() {
            "{}".to_string()
        } else {
            stringify(error).into_owned()
        };

        out.newline();
        out.gutter()
            .push(format!("{}: ", name), palette::ALERT_LABEL)
            .push(truncate_str(&message, self.limits.error_message), palette::ALERT)
            .newline();
    }

    fn other(&self, out: &mut RenderedOutput, event: &Event) {
        let data = if is_truthy(&event.part) {
            &event.part
        } else {
            &event.error
        };

        out.newline();
        if is_truthy(data) {
            out.gutter()
                .push(truncate(data, self.limits.fallback_payload), palette::MUTED)
                .newline();
        }
    }
}

/// Milliseconds between `part.time.start` and `part.time.end`, if non-zero
///
/// A zero start or end counts as absent.
fn step_duration(part: &Value) -> Option<f64> {
    let time = part.field("time");
    if !is_truthy(time.field("start")) || !is_truthy(time.field("end")) {
        return None;
    }
    let start = time.number("start")?;
    let end = time.number("end")?;
    let duration = end - start;
    (duration != 0.0).then_some(duration)
}

/// How a multi-line text payload is cut down for display
struct Excerpt {
    max_lines: usize,
    keep_blank_first: bool,
    first_style: Style,
    rest_style: Style,
}

impl Excerpt {
    fn render(&self, out: &mut RenderedOutput, text: &str) {
        let lines: Vec<&str> = text.split('\n').collect();
        let shown = lines.len().min(self.max_lines);

        for (i, line) in lines[..shown].iter().enumerate() {
            let keep = !line.trim().is_empty() || (i == 0 && self.keep_blank_first);
            if !keep {
                continue;
            }
            let style = if i == 0 { self.first_style } else { self.rest_style };
            out.gutter().push(*line, style).newline();
        }

        if lines.len() > shown {
            out.gutter()
                .push(format!("... ({} more lines)", lines.len() - shown), palette::MUTED)
                .newline();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::decode;
    use crate::render::style::Color;

    fn render_line(line: &str) -> RenderedOutput {
        Renderer::default().render(&decode(line).unwrap(), false)
    }

    fn lines_of(line: &str) -> Vec<String> {
        render_line(line).lines()
    }

    #[test]
    fn test_tool_use_scenario() {
        let out = render_line(
            r#"{"type":"tool_use","part":{"tool":"read","state":{"status":"completed","input":{"file_path":"/a/b.txt"}}}}"#,
        );
        assert_eq!(
            out.lines(),
            vec!["🔧 Tool Use (read) [completed]", "  ⎿  file_path: /a/b.txt", ""]
        );

        let header = out.line_segments(0);
        assert!(header.contains(&("Tool Use", Style::fg(Color::Cyan))));
        assert!(header.contains(&(" [completed]", palette::SUCCESS)));
        assert!(out.line_segments(1).contains(&("/a/b.txt", palette::ARGUMENT)));
    }

    #[test]
    fn test_tool_use_pending_status_and_title() {
        let out = render_line(
            r#"{"type":"tool_use","part":{"tool":"bash","state":{"status":"running","title":"List files","input":{"command":"ls -la"}}}}"#,
        );
        assert_eq!(
            out.lines(),
            vec![
                "🔧 Tool Use (bash) [running]",
                "  ⎿  Title: List files",
                "  ⎿  command: ls -la",
                ""
            ]
        );
        assert!(out.line_segments(0).contains(&(" [running]", palette::ATTENTION)));
    }

    #[test]
    fn test_tool_use_priority_ignores_input_order() {
        let lines = lines_of(
            r#"{"type":"tool_use","part":{"tool":"grep","state":{"input":{"url":"http://x","pattern":"foo","path":"src/"}}}}"#,
        );
        assert_eq!(lines, vec!["🔧 Tool Use (grep)", "  ⎿  path: src/", ""]);

        let lines = lines_of(
            r#"{"type":"tool_use","part":{"tool":"grep","state":{"input":{"url":"http://x","pattern":"foo"}}}}"#,
        );
        assert_eq!(lines, vec!["🔧 Tool Use (grep)", "  ⎿  pattern: foo", ""]);
    }

    #[test]
    fn test_tool_use_no_priority_key() {
        let lines = lines_of(r#"{"type":"tool_use","part":{"tool":"todo","state":{"input":{"items":[1,2]}}}}"#);
        assert_eq!(lines, vec!["🔧 Tool Use (todo)", ""]);
    }

    #[test]
    fn test_tool_use_defaults() {
        let lines = lines_of(r#"{"type":"tool_use"}"#);
        assert_eq!(lines, vec!["🔧 Tool Use (unknown)", ""]);

        let lines = lines_of(r#"{"type":"tool_use","part":{"tool":"x","state":"weird"}}"#);
        assert_eq!(lines, vec!["🔧 Tool Use (x)", ""]);
    }

    #[test]
    fn test_tool_use_truncates_argument() {
        let command = "x".repeat(120);
        let line = format!(
            r#"{{"type":"tool_use","part":{{"tool":"bash","state":{{"input":{{"command":"{}"}}}}}}}}"#,
            command
        );
        let lines = lines_of(&line);
        assert_eq!(lines[1], format!("  ⎿  command: {}...", "x".repeat(80)));
    }

    #[test]
    fn test_tool_use_non_string_argument() {
        let lines = lines_of(r#"{"type":"tool_use","part":{"tool":"t","state":{"input":{"query":{"q":1}}}}}"#);
        assert_eq!(lines[1], r#"  ⎿  query: {"q":1}"#);
    }

    #[test]
    fn test_step_start() {
        assert_eq!(
            lines_of(r#"{"type":"step_start","part":{"type":"plan"}}"#),
            vec!["▶️ Step Start - plan", ""]
        );
        assert_eq!(lines_of(r#"{"type":"step_start","part":{}}"#), vec!["▶️ Step Start", ""]);
        assert_eq!(
            lines_of(r#"{"type":"step_start","part":{"type":""}}"#),
            vec!["▶️ Step Start", ""]
        );
    }

    #[test]
    fn test_step_finish_scenario() {
        let out = render_line(r#"{"type":"step_finish","part":{"type":"build","time":{"start":1000,"end":1500}}}"#);
        assert_eq!(out.lines(), vec!["✅ Step Finish - build (500ms)", ""]);
        assert!(out.line_segments(0).contains(&(" (500ms)", palette::MUTED)));
    }

    #[test]
    fn test_step_finish_duration_rules() {
        assert_eq!(
            lines_of(r#"{"type":"step_finish","part":{"time":{"start":1000,"end":1000}}}"#),
            vec!["✅ Step Finish", ""]
        );
        assert_eq!(
            lines_of(r#"{"type":"step_finish","part":{"time":{"start":1000}}}"#),
            vec!["✅ Step Finish", ""]
        );
        assert_eq!(
            lines_of(r#"{"type":"step_finish","part":{"time":{"start":"1000","end":1500}}}"#),
            vec!["✅ Step Finish", ""]
        );
        assert_eq!(
            lines_of(r#"{"type":"step_finish","part":{"time":{"start":1000.2,"end":1250.9}}}"#),
            vec!["✅ Step Finish (251ms)", ""]
        );
    }

    #[test]
    fn test_step_finish_zero_time_is_absent() {
        assert_eq!(
            lines_of(r#"{"type":"step_finish","part":{"time":{"start":0,"end":500}}}"#),
            vec!["✅ Step Finish", ""]
        );
        assert_eq!(
            lines_of(r#"{"type":"step_finish","part":{"type":"build","time":{"start":1000,"end":0}}}"#),
            vec!["✅ Step Finish - build", ""]
        );
    }

    #[test]
    fn test_render_logs_without_tracing_conflict() {
        let event = decode(r#"{"type":"session_end","timestamp":"t2"}"#).unwrap();
        let renderer = Renderer::default();
        assert_eq!(renderer.render(&event, true).lines(), vec!["[t2] 🏁 Session End", ""]);
        assert_eq!(renderer.render(&event, false).lines(), vec!["🏁 Session End", ""]);
    }

    #[test]
    fn test_text_short() {
        let out = render_line(r#"{"type":"text","part":{"text":"hello\nworld"}}"#);
        assert_eq!(out.lines(), vec!["💬 Text", "  ⎿  hello", "  ⎿  world", ""]);
        assert!(out.line_segments(1).contains(&("hello", Style::PLAIN)));
        assert!(out.line_segments(2).contains(&("world", palette::MUTED)));
    }

    #[test]
    fn test_text_truncated_to_five_lines() {
        let lines = lines_of(r#"{"type":"text","part":{"text":"1\n2\n3\n4\n5\n6\n7\n8"}}"#);
        assert_eq!(
            lines,
            vec![
                "💬 Text",
                "  ⎿  1",
                "  ⎿  2",
                "  ⎿  3",
                "  ⎿  4",
                "  ⎿  5",
                "  ⎿  ... (3 more lines)",
                ""
            ]
        );
    }

    #[test]
    fn test_text_keeps_blank_first_line_only() {
        let lines = lines_of(r#"{"type":"text","part":{"text":"\nsecond\n   \nfourth"}}"#);
        assert_eq!(lines, vec!["💬 Text", "  ⎿  ", "  ⎿  second", "  ⎿  fourth", ""]);
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(lines_of(r#"{"type":"text","part":{"text":""}}"#), vec!["💬 Text", ""]);
        assert_eq!(lines_of(r#"{"type":"text"}"#), vec!["💬 Text", ""]);
    }

    #[test]
    fn test_thinking_cap_and_blank_lines() {
        let out = render_line(r#"{"type":"thinking","part":{"text":"\nplan\nact\nreflect\nmore"}}"#);
        assert_eq!(
            out.lines(),
            vec!["🤔 Thinking", "  ⎿  plan", "  ⎿  act", "  ⎿  ... (2 more lines)", ""]
        );
        assert!(out.line_segments(1).contains(&("plan", palette::THINKING)));
        assert!(out.line_segments(3).contains(&("... (2 more lines)", palette::MUTED)));
    }

    #[test]
    fn test_thinking_exactly_at_cap() {
        let lines = lines_of(r#"{"type":"thinking","part":{"text":"a\nb\nc"}}"#);
        assert_eq!(lines, vec!["🤔 Thinking", "  ⎿  a", "  ⎿  b", "  ⎿  c", ""]);
    }

    #[test]
    fn test_error_with_message() {
        let out = render_line(r#"{"type":"error","error":{"name":"APIError","data":{"message":"rate limited"}}}"#);
        assert_eq!(out.lines(), vec!["❌ Error", "  ⎿  APIError: rate limited", ""]);
        assert!(out.line_segments(1).contains(&("APIError: ", palette::ALERT_LABEL)));
        assert!(out.line_segments(1).contains(&("rate limited", palette::ALERT)));
    }

    #[test]
    fn test_error_scenario_without_message() {
        let lines = lines_of(r#"{"type":"error","error":{"name":"Timeout"}}"#);
        assert_eq!(lines, vec!["❌ Error", r#"  ⎿  Timeout: {"name":"Timeout"}"#, ""]);
    }

    #[test]
    fn test_error_defaults() {
        assert_eq!(lines_of(r#"{"type":"error"}"#), vec!["❌ Error", "  ⎿  Error: {}", ""]);
    }

    #[test]
    fn test_error_message_truncated() {
        let message = "m".repeat(250);
        let line = format!(r#"{{"type":"error","error":{{"data":{{"message":"{}"}}}}}}"#, message);
        let lines = lines_of(&line);
        assert_eq!(lines[1], format!("  ⎿  Error: {}...", "m".repeat(200)));
    }

    #[test]
    fn test_session_events_are_header_only() {
        assert_eq!(lines_of(r#"{"type":"session_start","part":{"x":1}}"#), vec!["🚀 Session Start", ""]);
        assert_eq!(lines_of(r#"{"type":"session_end"}"#), vec!["🏁 Session End", ""]);
    }

    #[test]
    fn test_unknown_kind_shows_payload() {
        let out = render_line(r#"{"type":"file_edit","part":{"path":"a.rs"}}"#);
        assert_eq!(out.lines(), vec!["⏺ File Edit", r#"  ⎿  {"path":"a.rs"}"#, ""]);
        assert!(out.line_segments(0).contains(&("File Edit", Style::DIM)));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_error_payload() {
        let lines = lines_of(r#"{"type":"mystery","part":{},"error":{"code":3}}"#);
        assert_eq!(lines, vec!["⏺ Mystery", r#"  ⎿  {"code":3}"#, ""]);
    }

    #[test]
    fn test_unknown_kind_empty_payload() {
        assert_eq!(lines_of(r#"{"type":"mystery","part":{}}"#), vec!["⏺ Mystery", ""]);
        assert_eq!(lines_of(r#"{"type":"mystery"}"#), vec!["⏺ Mystery", ""]);
    }

    #[test]
    fn test_unknown_kind_payload_truncated() {
        let line = format!(r#"{{"type":"blob","part":"{}"}}"#, "z".repeat(150));
        let lines = lines_of(&line);
        assert_eq!(lines[1], format!("  ⎿  {}...", "z".repeat(100)));
    }

    #[test]
    fn test_debug_prefix() {
        let event = decode(r#"{"type":"session_start","timestamp":"12:00:00","sessionID":"ses_abcdefghijkl"}"#).unwrap();
        let out = Renderer::default().render(&event, true);
        assert_eq!(
            out.lines(),
            vec!["[12:00:00] (session: ses_abcd...) 🚀 Session Start", ""]
        );
        assert!(
            out.line_segments(0)
                .contains(&("[12:00:00] (session: ses_abcd...)", palette::MUTED))
        );
    }

    #[test]
    fn test_debug_prefix_partial_and_absent() {
        let renderer = Renderer::default();

        let event = decode(r#"{"type":"session_end","timestamp":"t1"}"#).unwrap();
        assert_eq!(renderer.render(&event, true).lines(), vec!["[t1] 🏁 Session End", ""]);

        let event = decode(r#"{"type":"session_end"}"#).unwrap();
        assert_eq!(renderer.render(&event, true).lines(), vec!["🏁 Session End", ""]);
    }

    #[test]
    fn test_debug_off_hides_metadata() {
        let event = decode(r#"{"type":"session_end","timestamp":"t1","sessionID":"abc"}"#).unwrap();
        assert_eq!(Renderer::default().render(&event, false).lines(), vec!["🏁 Session End", ""]);
    }

    #[test]
    fn test_decode_error_rendering() {
        let err = decode("not json at all").unwrap_err();
        let out = Renderer::default().render_decode_error(&err);
        assert_eq!(out.lines(), vec!["⏺ Parse Error", "  ⎿  not json at all...", ""]);
        assert!(out.line_segments(0).contains(&("Parse Error", palette::ALERT)));
    }

    #[test]
    fn test_decode_error_preview_length() {
        let raw = format!("{{{}", "q".repeat(200));
        let err = decode(&raw).unwrap_err();
        let lines = Renderer::default().render_decode_error(&err).lines();
        assert_eq!(lines[1], format!("  ⎿  {{{}...", "q".repeat(79)));
    }

    #[test]
    fn test_custom_limits() {
        let limits = RenderLimits {
            text_lines: 2,
            ..RenderLimits::default()
        };
        let renderer = Renderer::new(limits);
        let event = decode(r#"{"type":"text","part":{"text":"a\nb\nc"}}"#).unwrap();
        assert_eq!(
            renderer.render(&event, false).lines(),
            vec!["💬 Text", "  ⎿  a", "  ⎿  b", "  ⎿  ... (1 more lines)", ""]
        );
    }

    #[test]
    fn test_every_rendering_ends_with_one_blank_line() {
        let inputs = [
            r#"{"type":"tool_use","part":{"tool":"read"}}"#,
            r#"{"type":"step_start"}"#,
            r#"{"type":"step_finish"}"#,
            r#"{"type":"text","part":{"text":"hi\n"}}"#,
            r#"{"type":"thinking","part":{"text":"hm"}}"#,
            r#"{"type":"error"}"#,
            r#"{"type":"session_start"}"#,
            r#"{"type":"x","part":{"a":1}}"#,
        ];
        for input in inputs {
            let plain = render_line(input).to_plain();
            assert!(plain.ends_with("\n\n"), "{input}: {plain:?}");
            assert!(!plain.ends_with("\n\n\n"), "{input}: {plain:?}");
        }
    }
}
