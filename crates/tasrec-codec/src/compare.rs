//! Recording comparison for desync hunting.
//!
//! Hash-first comparison (fast path) with a field-by-field fallback on
//! mismatch. Values are compared at file precision: two floats that are
//! written as the same text are equal.

use tasrec_core::{Frame, Projectile, Recording, Vec3};

use crate::hash::frame_hash;
use crate::text::format_float;

/// A single field that differs between two recordings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDivergence {
    /// Dotted field path, e.g. `position.x` or `projectiles[1].type`.
    pub field: String,
    /// Value in the recorded (reference) run, as written to file.
    pub recorded: String,
    /// Value in the replayed run, as written to file.
    pub replayed: String,
}

/// Where two recordings first diverge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The header fields differ.
    Header,
    /// The frame at this index differs.
    Frame {
        /// Zero-based frame index.
        index: usize,
    },
    /// All shared frames match but one recording has more.
    FrameCount {
        /// Frames in the recorded run.
        recorded: usize,
        /// Frames in the replayed run.
        replayed: usize,
    },
}

/// Report of the first divergence between two recordings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Where the divergence was found.
    pub kind: DivergenceKind,
    /// Every differing field at that location. Empty for
    /// [`DivergenceKind::FrameCount`].
    pub divergences: Vec<FieldDivergence>,
}

/// Compare two frames.
///
/// Fast path: if the frame hashes match, returns `None`. Otherwise lists
/// every differing field, including projectile fields.
pub fn compare_frames(
    index: usize,
    recorded: &Frame,
    replayed: &Frame,
) -> Option<DivergenceReport> {
    if frame_hash(recorded) == frame_hash(replayed) {
        return None;
    }

    let mut d = Diff::default();
    d.vec3("position", recorded.position, replayed.position);
    d.vec3("velocity", recorded.velocity, replayed.velocity);
    d.vec3("angle", recorded.angle, replayed.angle);
    d.int("buttons", recorded.buttons, replayed.buttons);
    d.int("command_number", recorded.command_number, replayed.command_number);
    d.int("forward_move", recorded.forward_move, replayed.forward_move);
    d.int("predicted", recorded.predicted, replayed.predicted);
    d.text(
        "impulse",
        recorded.impulse.raw().to_string(),
        replayed.impulse.raw().to_string(),
    );
    d.int("mouse_x", recorded.mouse_x, replayed.mouse_x);
    d.int("mouse_y", recorded.mouse_y, replayed.mouse_y);
    d.int("random_seed", recorded.random_seed, replayed.random_seed);
    d.int("side_move", recorded.side_move, replayed.side_move);
    d.int("tick_count", recorded.tick_count, replayed.tick_count);
    d.int("up_move", recorded.up_move, replayed.up_move);
    d.vec3("view_angle", recorded.view_angle, replayed.view_angle);
    d.int("item_definition", recorded.item_definition, replayed.item_definition);
    d.int("weapon_subtype", recorded.weapon_subtype, replayed.weapon_subtype);
    d.int("save_frames", recorded.save_frames, replayed.save_frames);
    d.int("did_fire", recorded.did_fire, replayed.did_fire);
    d.int("clip", recorded.clip, replayed.clip);

    let (rec_p, rep_p) = (&recorded.projectiles, &replayed.projectiles);
    if rec_p.len() != rep_p.len() {
        d.text(
            "projectiles.len",
            rec_p.len().to_string(),
            rep_p.len().to_string(),
        );
    }
    for (i, (a, b)) in rec_p.iter().zip(rep_p).enumerate() {
        d.projectile(i, a, b);
    }

    Some(DivergenceReport {
        kind: DivergenceKind::Frame { index },
        divergences: d.0,
    })
}

/// Compare two recordings and report the first divergence.
///
/// Checks the header, then frames in order, then the frame count.
/// Returns `None` when both would be written as identical text.
pub fn compare_recordings(
    recorded: &Recording,
    replayed: &Recording,
) -> Option<DivergenceReport> {
    let mut d = Diff::default();
    d.int("is_recording", recorded.is_recording, replayed.is_recording);
    d.int("is_playing", recorded.is_playing, replayed.is_playing);
    d.int("current_tick", recorded.current_tick, replayed.current_tick);
    d.int("tick_count", recorded.tick_count, replayed.tick_count);
    d.int("position_count", recorded.position_count, replayed.position_count);
    if !d.0.is_empty() {
        return Some(DivergenceReport {
            kind: DivergenceKind::Header,
            divergences: d.0,
        });
    }

    for (index, (a, b)) in recorded.frames.iter().zip(&replayed.frames).enumerate() {
        if let Some(report) = compare_frames(index, a, b) {
            return Some(report);
        }
    }

    if recorded.frames.len() != replayed.frames.len() {
        return Some(DivergenceReport {
            kind: DivergenceKind::FrameCount {
                recorded: recorded.frames.len(),
                replayed: replayed.frames.len(),
            },
            divergences: vec![],
        });
    }

    None
}

#[derive(Default)]
struct Diff(Vec<FieldDivergence>);

impl Diff {
    fn text(&mut self, field: impl Into<String>, recorded: String, replayed: String) {
        if recorded != replayed {
            self.0.push(FieldDivergence {
                field: field.into(),
                recorded,
                replayed,
            });
        }
    }

    fn int(&mut self, field: &str, recorded: i32, replayed: i32) {
        if recorded != replayed {
            self.text(field, recorded.to_string(), replayed.to_string());
        }
    }

    fn vec3(&mut self, field: &str, recorded: Vec3, replayed: Vec3) {
        let components = recorded.to_array().into_iter().zip(replayed.to_array());
        for (axis, (a, b)) in ["x", "y", "z"].into_iter().zip(components) {
            self.text(format!("{field}.{axis}"), format_float(a), format_float(b));
        }
    }

    fn projectile(&mut self, i: usize, recorded: &Projectile, replayed: &Projectile) {
        let prefix = format!("projectiles[{i}]");
        self.vec3(&format!("{prefix}.angle"), recorded.angle, replayed.angle);
        self.vec3(&format!("{prefix}.position"), recorded.position, replayed.position);
        self.vec3(&format!("{prefix}.velocity"), recorded.velocity, replayed.velocity);
        self.int(&format!("{prefix}.type"), recorded.kind, replayed.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasrec_core::Impulse;

    fn recording(frames: usize) -> Recording {
        let mut rec = Recording::default();
        for tick in 0..frames {
            rec.push_frame(Frame {
                tick_count: tick as i32,
                position: Vec3::new(tick as f32, 0.0, 0.0),
                ..Frame::default()
            });
        }
        rec
    }

    #[test]
    fn identical_recordings_match() {
        let rec = recording(3);
        assert_eq!(compare_recordings(&rec, &rec.clone()), None);
    }

    #[test]
    fn sub_precision_noise_is_not_divergence() {
        let a = recording(2);
        let mut b = a.clone();
        b.frames[1].velocity.y = 0.00001;
        assert_eq!(compare_recordings(&a, &b), None);
    }

    #[test]
    fn header_divergence_reported_first() {
        let a = recording(2);
        let mut b = a.clone();
        b.current_tick = 7;
        b.frames[0].buttons = 1;
        let report = compare_recordings(&a, &b).unwrap();
        assert_eq!(report.kind, DivergenceKind::Header);
        assert_eq!(
            report.divergences,
            vec![FieldDivergence {
                field: "current_tick".into(),
                recorded: "0".into(),
                replayed: "7".into(),
            }]
        );
    }

    #[test]
    fn first_divergent_frame_reported() {
        let a = recording(4);
        let mut b = a.clone();
        b.frames[2].position.z = 1.5;
        b.frames[2].impulse = Impulse::None;
        b.frames[3].buttons = 8;

        let report = compare_recordings(&a, &b).unwrap();
        assert_eq!(report.kind, DivergenceKind::Frame { index: 2 });
        let fields: Vec<_> = report.divergences.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, ["position.z", "impulse"]);
        assert_eq!(report.divergences[0].replayed, "1.5");
        assert_eq!(report.divergences[1].replayed, "-1");
    }

    #[test]
    fn projectile_fields_are_pathed() {
        let a = Frame {
            projectiles: vec![Projectile::default(); 2],
            ..Frame::default()
        };
        let mut b = a.clone();
        b.projectiles[1].velocity.z = -2.0;
        b.projectiles[1].kind = 3;

        let report = compare_frames(5, &a, &b).unwrap();
        assert_eq!(report.kind, DivergenceKind::Frame { index: 5 });
        let fields: Vec<_> = report.divergences.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, ["projectiles[1].velocity.z", "projectiles[1].type"]);
    }

    #[test]
    fn projectile_count_difference() {
        let a = Frame::default();
        let b = Frame {
            projectiles: vec![Projectile::default()],
            ..Frame::default()
        };
        let report = compare_frames(0, &a, &b).unwrap();
        assert_eq!(report.divergences.len(), 1);
        assert_eq!(report.divergences[0].field, "projectiles.len");
    }

    #[test]
    fn extra_frames_reported_as_count() {
        let a = recording(3);
        let mut b = recording(3);
        b.frames.truncate(2);
        // Keep the header equal so the frame walk runs.
        b.tick_count = a.tick_count;
        let report = compare_recordings(&a, &b).unwrap();
        assert_eq!(
            report.kind,
            DivergenceKind::FrameCount {
                recorded: 3,
                replayed: 2
            }
        );
        assert!(report.divergences.is_empty());
    }
}
