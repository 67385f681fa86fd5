//! Text codec for tick-by-tick speedrun recordings.
//!
//! Reads and writes the line-oriented recording format: a five-line
//! header followed by `tick_count` frames, each frame followed by its own
//! projectiles. Every line holds exactly one scalar.
//!
//! # Architecture
//!
//! - [`text`] holds the scalar primitives, including [`format_float`]
//! - [`codec`] encodes and decodes projectiles, frames and recordings
//! - [`RecordingReader`] streams frames from any `BufRead` source
//! - [`RecordingWriter`] streams frames to any `Write` sink
//! - [`compare_recordings`] locates the first divergence between two runs
//!
//! # Format
//!
//! ```text
//! is_recording, is_playing, current_tick, tick_count, position_count
//! [Frame 1] [Frame 2] ... [Frame tick_count]
//! ```
//!
//! A frame is 29 fixed lines, the last being its projectile count,
//! followed by 10 lines per projectile. There is no magic number, version
//! field or checksum.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod config;
pub mod error;
pub mod hash;
pub mod reader;
pub mod text;
pub mod writer;

pub use codec::{
    decode_frame, decode_header, decode_projectile, decode_recording, encode_frame,
    encode_header, encode_projectile, encode_recording, from_text, from_text_with, to_text,
};
pub use compare::{
    compare_frames, compare_recordings, DivergenceKind, DivergenceReport, FieldDivergence,
};
pub use config::DecodeConfig;
pub use error::{RecordingError, ScalarKind};
pub use hash::{frame_hash, recording_hash};
pub use reader::{load_recording, read_recording, FrameIter, RecordingReader};
pub use text::{format_float, LineReader};
pub use writer::{save_recording, write_recording, RecordingWriter};

/// Number of integer lines in the recording header.
pub const HEADER_LINES: usize = 5;

/// Lines in a frame before its projectiles, including the count line.
pub const FRAME_FIXED_LINES: usize = 29;

/// Lines per encoded projectile.
pub const PROJECTILE_LINES: usize = 10;

/// Line content that stands for [`Impulse::None`](tasrec_core::Impulse::None).
pub const NO_IMPULSE: &str = "\0";
