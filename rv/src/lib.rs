//! ralphview - terminal viewer for Ralph loop event streams
//!
//! Reads the line-delimited JSON events an opencode-style agent harness
//! emits (one object per line) and renders each one as a short, colored,
//! human-readable block.
//!
//! # Pipeline
//!
//! ```text
//! stdin lines ──> event::decode ──> render::Renderer ──> output::StyledWriter ──> stdout
//!                      │
//!                      └─ DecodeError ──> render_decode_error (stream continues)
//! ```
//!
//! # Example
//!
//! ```
//! use ralphview::event::decode;
//! use ralphview::render::render;
//!
//! let event = decode(r#"{"type":"step_finish","part":{"type":"build","time":{"start":1000,"end":1500}}}"#).unwrap();
//! let output = render(&event, false);
//! assert_eq!(output.to_plain(), "✅ Step Finish - build (500ms)\n\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod output;
pub mod render;
pub mod stream;

pub use config::Config;
pub use error::{DecodeError, StreamError};
pub use event::{Event, EventKind, Payload, decode};
pub use output::{ColorMode, PlainWriter, StyledWriter, TerminalWriter};
pub use render::{RenderLimits, RenderedOutput, Renderer, Segment, Style, StyleTable, render, render_decode_error};
pub use stream::{StreamProcessor, StreamStats};
