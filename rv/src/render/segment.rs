//! Styled output segments

use super::style::Style;

/// Prefix of every indented body line
pub const GUTTER: &str = "  ⎿  ";

/// One piece of rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text { text: String, style: Style },
    Newline,
}

/// Everything one event renders to, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    segments: Vec<Segment>,
}

impl RenderedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append styled text; empty text is dropped
    pub fn push(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::Text { text, style });
        }
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.segments.push(Segment::Newline);
        self
    }

    /// Start an indented body line
    pub fn gutter(&mut self) -> &mut Self {
        self.push(GUTTER, Style::PLAIN)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The output with all styling dropped
    pub fn to_plain(&self) -> String {
        let mut plain = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text, .. } => plain.push_str(text),
                Segment::Newline => plain.push('\n'),
            }
        }
        plain
    }

    /// Plain-text lines, one per line break
    pub fn lines(&self) -> Vec<String> {
        let plain = self.to_plain();
        let mut lines: Vec<String> = plain.split('\n').map(str::to_string).collect();
        // text after the final newline, empty for complete renderings
        lines.pop();
        lines
    }

    /// Styled text segments on the given line
    pub fn line_segments(&self, index: usize) -> Vec<(&str, Style)> {
        self.segments
            .split(|s| matches!(s, Segment::Newline))
            .nth(index)
            .map(|line| {
                line.iter()
                    .filter_map(|s| match s {
                        Segment::Text { text, style } => Some((text.as_str(), *style)),
                        Segment::Newline => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
