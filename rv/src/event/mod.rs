//! Event records and the line decoder
//!
//! Each input line is one JSON object with a `type` discriminant and
//! loosely-typed `part`/`error` payloads. Decoding only checks that the line
//! is a JSON object; payload fields are read later through [`Payload`], which
//! never fails.

mod decode;
mod payload;
mod types;

pub use decode::decode;
pub use payload::{Payload, is_truthy, stringify, type_name};
pub use types::{Event, EventKind};
