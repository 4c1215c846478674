//! Event rendering
//!
//! Maps each [`Event`](crate::event::Event) to a [`RenderedOutput`]: a header
//! line (icon, title-cased kind label, kind-specific suffix), zero or more
//! indented body lines, and a trailing blank line.
//!
//! # Layout
//!
//! ```text
//! [ts] (session: ses_1234...) 🔧 Tool Use (read) [completed]   <- header, debug prefix optional
//!   ⎿  file_path: /a/b.txt                                      <- body lines
//!                                                               <- blank separator
//! ```
//!
//! Rendering is pure: the output depends only on the event, the debug flag,
//! the [`StyleTable`] and the [`RenderLimits`].

mod limits;
mod renderer;
mod segment;
mod style;
mod text;

pub use limits::RenderLimits;
pub use renderer::{Renderer, TOOL_ARG_KEYS};
pub use segment::{GUTTER, RenderedOutput, Segment};
pub use style::{Color, STYLES, Style, StyleRule, StyleTable, palette};
pub use text::{ELLIPSIS, kind_label, title_case, truncate, truncate_str};

use crate::error::DecodeError;
use crate::event::Event;

/// Render an event with the standard styles and default limits
pub fn render(event: &Event, debug: bool) -> RenderedOutput {
    Renderer::default().render(event, debug)
}

/// Render a decode failure with the standard styles and default limits
pub fn render_decode_error(err: &DecodeError) -> RenderedOutput {
    Renderer::default().render_decode_error(err)
}
