//! deltacast: asciicast v2 timing transcoder
//!
//! This crate transcodes terminal-session recordings between two temporal
//! encodings: absolute time (each event stamped with seconds since session
//! start, as asciinema records it) and delta time (each event stamped with
//! seconds since the previous event). The inverse direction reconstructs
//! absolute times by accumulation.
//!
//! # Features
//!
//! - **Streaming**: one pass, one record in memory at a time — input size is
//!   bounded by the stream source, not the process
//! - **Decimal-exact timing**: the recurrence runs in base-10 arithmetic, so
//!   Delta followed by Accumulate reproduces the original times exactly
//! - **Opaque payloads**: event payloads and unknown header versions pass
//!   through untouched
//!
//! # Example
//!
//! ```
//! use deltacast::{Direction, transcode};
//!
//! let recording = "{\"version\": 2, \"width\": 80, \"height\": 24}\n\
//!                  [1.0, \"o\", \"hello\"]\n\
//!                  [1.5, \"o\", \"world\"]\n";
//!
//! let mut delta = Vec::new();
//! transcode(recording.as_bytes(), &mut delta, Direction::Delta)?;
//!
//! assert_eq!(
//!     String::from_utf8_lossy(&delta),
//!     "{\"version\":2,\"width\":80,\"height\":24}\n\
//!      [1.0,\"o\",\"hello\"]\n\
//!      [0.5,\"o\",\"world\"]\n"
//! );
//! # Ok::<(), deltacast::CastError>(())
//! ```

pub mod error;
pub mod event;
pub mod header;
pub mod pipeline;
pub mod transform;

pub use error::{CastError, Result};
pub use event::Event;
pub use header::{Header, Theme};
pub use pipeline::transcode;
pub use transform::Direction;
