//! Line-by-line stream processing
//!
//! Reads lines, skips blanks, decodes, renders and writes each one before
//! reading the next. A line that fails to decode is rendered as a parse error
//! and the stream carries on; only I/O failures stop it.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::StreamError;
use crate::event::decode;
use crate::output::StyledWriter;
use crate::render::Renderer;

/// Counters for one processed stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Non-blank lines read
    pub lines: usize,
    /// Lines rendered as events
    pub events: usize,
    /// Lines rendered as parse errors
    pub parse_errors: usize,
}

/// Drives a [`Renderer`] over an input stream
pub struct StreamProcessor<'r> {
    renderer: &'r Renderer<'r>,
    debug: bool,
}

impl<'r> StreamProcessor<'r> {
    pub fn new(renderer: &'r Renderer<'r>, debug: bool) -> Self {
        Self { renderer, debug }
    }

    /// Process `input` until end of stream
    ///
    /// Invalid UTF-8 is replaced rather than treated as an error.
    pub fn run<R, W>(&self, mut input: R, writer: &mut W) -> Result<StreamStats, StreamError>
    where
        R: BufRead,
        W: StyledWriter + ?Sized,
    {
        debug!(debug = self.debug, "StreamProcessor::run: starting");
        let mut stats = StreamStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = input.read_until(b'\n', &mut buf).map_err(StreamError::Read)?;
            if n == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            stats.lines += 1;

            let output = match decode(line) {
                Ok(event) => {
                    trace!(kind = event.kind.as_str(), "StreamProcessor::run: decoded event");
                    stats.events += 1;
                    self.renderer.render(&event, self.debug)
                }
                Err(e) => {
                    debug!(error = %e, line_no = stats.lines, "StreamProcessor::run: failed to decode line");
                    stats.parse_errors += 1;
                    self.renderer.render_decode_error(&e)
                }
            };

            writer.write_output(&output).map_err(StreamError::Write)?;
        }

        debug!(?stats, "StreamProcessor::run: end of stream");
        Ok(stats)
    }
}
