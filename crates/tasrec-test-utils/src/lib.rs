//! Test fixtures for tasrec development.
//!
//! Deterministic builders for frames, projectiles and recordings. Every
//! float produced here has at most four decimal places, so fixtures
//! survive an encode/decode round trip unchanged.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use tasrec_core::{Frame, Impulse, Projectile, Recording, Vec3};

/// A frame with every scalar zero and no projectiles.
pub fn zero_frame() -> Frame {
    Frame::default()
}

/// Text of a one-frame recording whose frame is [`zero_frame`].
///
/// Header `0 0 0 1 0`, then 29 zero lines: every frame field, an impulse
/// of `0`, and a projectile count of `0`.
pub fn zero_frame_text() -> String {
    let mut text = String::from("0\n0\n0\n1\n0\n");
    for _ in 0..29 {
        text.push_str("0\n");
    }
    text
}

/// A projectile whose fields derive from `seed`.
pub fn sample_projectile(seed: u32) -> Projectile {
    let s = seed as f32;
    Projectile {
        angle: Vec3::new(s * 0.5, 90.0 - s, 0.0),
        position: Vec3::new(128.25 + s, -64.0 * s, 32.0625),
        velocity: Vec3::new(0.0, 1100.0, -s * 12.5),
        kind: (seed % 4) as i32,
    }
}

/// A frame for `tick` carrying `projectiles` projectiles.
///
/// Every third tick has no impulse, so fixtures exercise the sentinel.
pub fn sample_frame(tick: i32, projectiles: usize) -> Frame {
    let t = tick as f32;
    Frame {
        position: Vec3::new(-1024.0 + t * 2.5, 512.125, 64.0),
        velocity: Vec3::new(t * 0.25, -t, 0.0),
        angle: Vec3::new(0.0, (t * 1.5) % 360.0, 0.0),
        buttons: tick & 0b1011,
        command_number: 1000 + tick,
        forward_move: if tick % 2 == 0 { 450 } else { 0 },
        predicted: tick % 2,
        impulse: if tick % 3 == 0 {
            Impulse::None
        } else {
            Impulse::Code((tick as u32) % 256)
        },
        mouse_x: tick % 7 - 3,
        mouse_y: 3 - tick % 5,
        random_seed: tick.wrapping_mul(1_103_515_245).wrapping_add(12345),
        side_move: if tick % 4 == 1 { -450 } else { 0 },
        tick_count: tick,
        up_move: 0,
        view_angle: Vec3::new(-10.5, (t * 1.5) % 360.0, 0.0),
        item_definition: 18,
        weapon_subtype: 1,
        save_frames: 0,
        did_fire: i32::from(tick % 10 == 0),
        clip: 4 - tick % 5,
        projectiles: (0..projectiles as u32).map(sample_projectile).collect(),
    }
}

/// A recording of `ticks` frames, each with `projectiles_per_frame`
/// projectiles. Counts are consistent.
pub fn sample_recording(ticks: usize, projectiles_per_frame: usize) -> Recording {
    let mut rec = Recording {
        is_recording: 0,
        is_playing: 1,
        current_tick: 0,
        tick_count: 0,
        position_count: ticks as i32,
        frames: Vec::with_capacity(ticks),
    };
    for tick in 0..ticks {
        rec.push_frame(sample_frame(tick as i32, projectiles_per_frame));
    }
    rec
}
