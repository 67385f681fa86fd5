//! Core value types for tasrec recordings.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! in-memory model that the text codec reads and writes: a [`Recording`]
//! owns its [`Frame`]s, and each frame owns its [`Projectile`]s. The
//! structure is a plain ownership tree with no shared state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod impulse;
pub mod record;
pub mod vec3;

pub use impulse::Impulse;
pub use record::{Frame, Projectile, Recording, RecordingHeader};
pub use vec3::Vec3;
