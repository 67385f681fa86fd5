//! Recording, frame and projectile records.

use crate::impulse::Impulse;
use crate::vec3::Vec3;

/// An in-flight projectile captured alongside a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    /// Orientation.
    pub angle: Vec3,
    /// World position.
    pub position: Vec3,
    /// Velocity.
    pub velocity: Vec3,
    /// Projectile type tag.
    pub kind: i32,
}

/// One tick's complete input and state snapshot.
///
/// The integer fields are stored exactly as they appear in the file. Flags
/// such as `predicted` or `did_fire` are integers, not booleans, so that
/// unusual values survive a round trip.
///
/// # Examples
///
/// ```
/// use tasrec_core::{Frame, Impulse, Projectile, Vec3};
///
/// let frame = Frame {
///     position: Vec3::new(0.0, 0.0, 64.0),
///     impulse: Impulse::None,
///     projectiles: vec![Projectile::default()],
///     ..Frame::default()
/// };
///
/// assert_eq!(frame.projectiles.len(), 1);
/// assert!(frame.impulse.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Player position.
    pub position: Vec3,
    /// Player velocity.
    pub velocity: Vec3,
    /// Player orientation.
    pub angle: Vec3,
    /// Button bitmask.
    pub buttons: i32,
    /// User command sequence number.
    pub command_number: i32,
    /// Forward movement input.
    pub forward_move: i32,
    /// Whether the command was predicted (0 or 1).
    pub predicted: i32,
    /// Impulse command for this tick.
    pub impulse: Impulse,
    /// Horizontal mouse delta.
    pub mouse_x: i32,
    /// Vertical mouse delta.
    pub mouse_y: i32,
    /// Shared random seed for the tick.
    pub random_seed: i32,
    /// Sideways movement input.
    pub side_move: i32,
    /// Per-frame tick counter. Unrelated to [`Recording::tick_count`].
    pub tick_count: i32,
    /// Vertical movement input.
    pub up_move: i32,
    /// View orientation.
    pub view_angle: Vec3,
    /// Item definition index of the active weapon.
    pub item_definition: i32,
    /// Weapon subtype.
    pub weapon_subtype: i32,
    /// Save-frame bookkeeping value.
    pub save_frames: i32,
    /// Whether the weapon fired this tick.
    pub did_fire: i32,
    /// Rounds left in the clip.
    pub clip: i32,
    /// Projectiles in flight during this tick.
    pub projectiles: Vec<Projectile>,
}

/// The five integers at the top of a recording file.
///
/// Streaming readers and writers deal in a header plus frames; a complete
/// [`Recording`] carries the same fields inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordingHeader {
    /// Whether the recording was being recorded (0 or 1).
    pub is_recording: i32,
    /// Whether the recording was being played back (0 or 1).
    pub is_playing: i32,
    /// Tick the recorder was on when saved.
    pub current_tick: i32,
    /// Number of frames that follow the header.
    pub tick_count: i32,
    /// Opaque position counter carried through unchanged.
    pub position_count: i32,
}

impl RecordingHeader {
    /// Declared frame count as a loop bound.
    ///
    /// Returns `None` when `tick_count` is negative.
    pub fn declared_frames(&self) -> Option<usize> {
        usize::try_from(self.tick_count).ok()
    }
}

/// A complete recording: header fields plus the ordered frames.
///
/// `tick_count` is the declared number of frames. Building a recording
/// through [`Recording::push_frame`] or [`Recording::from_parts`] keeps
/// it in step with `frames`; assigning the fields directly leaves that to
/// the caller.
///
/// # Examples
///
/// ```
/// use tasrec_core::{Frame, Recording};
///
/// let mut rec = Recording::default();
/// rec.push_frame(Frame::default());
/// rec.push_frame(Frame::default());
///
/// assert_eq!(rec.tick_count, 2);
/// assert!(rec.counts_consistent());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recording {
    /// Whether the recording was being recorded (0 or 1).
    pub is_recording: i32,
    /// Whether the recording was being played back (0 or 1).
    pub is_playing: i32,
    /// Tick the recorder was on when saved.
    pub current_tick: i32,
    /// Declared number of frames.
    pub tick_count: i32,
    /// Opaque position counter carried through unchanged.
    pub position_count: i32,
    /// Recorded frames, one per tick.
    pub frames: Vec<Frame>,
}

impl Recording {
    /// Assemble a recording from a decoded header and its frames.
    pub fn from_parts(header: RecordingHeader, frames: Vec<Frame>) -> Self {
        Self {
            is_recording: header.is_recording,
            is_playing: header.is_playing,
            current_tick: header.current_tick,
            tick_count: header.tick_count,
            position_count: header.position_count,
            frames,
        }
    }

    /// The header fields of this recording.
    pub fn header(&self) -> RecordingHeader {
        RecordingHeader {
            is_recording: self.is_recording,
            is_playing: self.is_playing,
            current_tick: self.current_tick,
            tick_count: self.tick_count,
            position_count: self.position_count,
        }
    }

    /// Append a frame and bump `tick_count` to match.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
        self.tick_count = self.tick_count.saturating_add(1);
    }

    /// Whether `tick_count` equals the number of frames held.
    pub fn counts_consistent(&self) -> bool {
        self.header().declared_frames() == Some(self.frames.len())
    }

    /// Total number of projectiles across all frames.
    pub fn projectile_count(&self) -> usize {
        self.frames.iter().map(|f| f.projectiles.len()).sum()
    }
}
