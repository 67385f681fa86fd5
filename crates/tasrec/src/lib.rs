//! tasrec: tick-by-tick speedrun recordings.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the tasrec sub-crates. For most users, adding `tasrec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tasrec::prelude::*;
//!
//! let mut rec = Recording::default();
//! rec.push_frame(Frame {
//!     position: Vec3::new(-1024.0, 512.5, 64.0),
//!     impulse: Impulse::None,
//!     projectiles: vec![Projectile { kind: 2, ..Projectile::default() }],
//!     ..Frame::default()
//! });
//!
//! let text = to_text(&rec);
//! let back = from_text(&text).unwrap();
//! assert_eq!(back, rec);
//! assert!(compare_recordings(&rec, &back).is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tasrec-core` | `Recording`, `Frame`, `Projectile`, `Vec3`, `Impulse` |
//! | [`codec`] | `tasrec-codec` | Text codec, streaming reader/writer, hashing, comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Recording value types (`tasrec-core`).
///
/// Plain data with no I/O. [`types::Recording`] owns its
/// [`types::Frame`]s, each of which owns its [`types::Projectile`]s.
pub use tasrec_core as types;

/// Text codec and file I/O (`tasrec-codec`).
///
/// Whole-recording helpers ([`codec::to_text`], [`codec::from_text`],
/// [`codec::load_recording`], [`codec::save_recording`]) plus the
/// streaming [`codec::RecordingReader`] and [`codec::RecordingWriter`].
pub use tasrec_codec as codec;

/// Common imports for typical tasrec usage.
///
/// ```rust
/// use tasrec::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use tasrec_core::{Frame, Impulse, Projectile, Recording, RecordingHeader, Vec3};

    // Whole-recording I/O
    pub use tasrec_codec::{from_text, load_recording, save_recording, to_text};

    // Streaming
    pub use tasrec_codec::{DecodeConfig, RecordingReader, RecordingWriter};

    // Errors
    pub use tasrec_codec::RecordingError;

    // Comparison
    pub use tasrec_codec::{compare_recordings, DivergenceKind, DivergenceReport};
}
