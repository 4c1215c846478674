//! Visual styles and the per-kind icon/style table

use std::collections::HashMap;
use std::sync::LazyLock;

/// Foreground colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

/// A terminal text style; writers may ignore it entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color: None,
        bold: false,
        dim: false,
    };

    pub const DIM: Style = Style {
        color: None,
        bold: false,
        dim: true,
    };

    pub const fn fg(color: Color) -> Style {
        Style {
            color: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Style {
        Style { bold: true, ..self }
    }
}

/// Named styles for the pieces of a rendering
pub mod palette {
    use super::{Color, Style};

    pub const MUTED: Style = Style::DIM;
    pub const SUCCESS: Style = Style::fg(Color::Green);
    pub const ATTENTION: Style = Style::fg(Color::Yellow);
    pub const ALERT: Style = Style::fg(Color::Red);
    pub const ALERT_LABEL: Style = Style::fg(Color::Red).bold();
    pub const THINKING: Style = Style::fg(Color::Magenta);
    pub const TOOL_NAME: Style = Style::fg(Color::Cyan);
    pub const ARGUMENT: Style = Style::fg(Color::Green);
    pub const STEP_START: Style = Style::fg(Color::Blue);
    pub const STEP_FINISH: Style = Style::fg(Color::Green);
}

/// Icon and header style for one event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub icon: &'static str,
    pub style: Style,
}

impl StyleRule {
    const fn new(icon: &'static str, style: Style) -> Self {
        Self { icon, style }
    }
}

/// Immutable lookup from event kind name to [`StyleRule`], with a fallback
#[derive(Debug, Clone)]
pub struct StyleTable {
    rules: HashMap<&'static str, StyleRule>,
    fallback: StyleRule,
}

impl StyleTable {
    /// The standard table for opencode event kinds
    pub fn standard() -> Self {
        let rules = HashMap::from([
            ("tool_use", StyleRule::new("🔧", Style::fg(Color::Cyan))),
            ("step_start", StyleRule::new("▶️", Style::fg(Color::Blue))),
            ("step_finish", StyleRule::new("✅", Style::fg(Color::Green))),
            ("text", StyleRule::new("💬", Style::PLAIN)),
            ("error", StyleRule::new("❌", Style::fg(Color::Red))),
            ("thinking", StyleRule::new("🤔", Style::fg(Color::Magenta))),
            ("session_start", StyleRule::new("🚀", Style::fg(Color::Green).bold())),
            ("session_end", StyleRule::new("🏁", Style::fg(Color::Blue).bold())),
        ]);

        Self {
            rules,
            fallback: StyleRule::new("⏺", Style::DIM),
        }
    }

    /// Rule for `kind`, or the fallback when the kind is unknown
    pub fn lookup(&self, kind: &str) -> StyleRule {
        self.rules.get(kind).copied().unwrap_or(self.fallback)
    }

    /// Rule used for unknown kinds and parse errors
    pub fn fallback(&self) -> StyleRule {
        self.fallback
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Process-wide standard table, built on first use
pub static STYLES: LazyLock<StyleTable> = LazyLock::new(StyleTable::standard);
