//! Encode/decode for projectiles, frames and whole recordings.
//!
//! Every record is a fixed sequence of scalar lines, written and read in
//! the same order. Frames carry an explicit projectile count; recordings
//! carry `tick_count`. Decoding reads exactly the declared number of
//! nested records and fails if the input runs out first.

use std::io::{BufRead, Write};

use tasrec_core::{Frame, Projectile, Recording, RecordingHeader};
use tracing::{debug, trace, warn};

use crate::config::DecodeConfig;
use crate::error::RecordingError;
use crate::text::{write_count, write_impulse, write_int, write_vec3, LineReader};

// ── Projectile ──────────────────────────────────────────────────

/// Encode a projectile: angle, position, velocity, then type tag.
pub fn encode_projectile(w: &mut dyn Write, p: &Projectile) -> Result<(), RecordingError> {
    write_vec3(w, p.angle)?;
    write_vec3(w, p.position)?;
    write_vec3(w, p.velocity)?;
    write_int(w, p.kind)?;
    Ok(())
}

/// Decode a projectile.
pub fn decode_projectile<R: BufRead>(
    lines: &mut LineReader<R>,
) -> Result<Projectile, RecordingError> {
    Ok(Projectile {
        angle: lines.read_vec3("projectile.angle")?,
        position: lines.read_vec3("projectile.position")?,
        velocity: lines.read_vec3("projectile.velocity")?,
        kind: lines.read_int("projectile.type")?,
    })
}

// ── Frame ───────────────────────────────────────────────────────

/// Encode a frame followed by its projectile count and projectiles.
pub fn encode_frame(w: &mut dyn Write, f: &Frame) -> Result<(), RecordingError> {
    write_vec3(w, f.position)?;
    write_vec3(w, f.velocity)?;
    write_vec3(w, f.angle)?;

    write_int(w, f.buttons)?;
    write_int(w, f.command_number)?;
    write_int(w, f.forward_move)?;

    write_int(w, f.predicted)?;
    write_impulse(w, f.impulse)?;
    write_int(w, f.mouse_x)?;
    write_int(w, f.mouse_y)?;
    write_int(w, f.random_seed)?;
    write_int(w, f.side_move)?;
    write_int(w, f.tick_count)?;
    write_int(w, f.up_move)?;
    write_vec3(w, f.view_angle)?;

    write_int(w, f.item_definition)?;
    write_int(w, f.weapon_subtype)?;

    write_int(w, f.save_frames)?;
    write_int(w, f.did_fire)?;
    write_int(w, f.clip)?;

    write_count(w, f.projectiles.len())?;
    for p in &f.projectiles {
        encode_projectile(w, p)?;
    }
    Ok(())
}

/// Decode a frame and exactly as many projectiles as it declares.
pub fn decode_frame<R: BufRead>(lines: &mut LineReader<R>) -> Result<Frame, RecordingError> {
    let position = lines.read_vec3("position")?;
    let velocity = lines.read_vec3("velocity")?;
    let angle = lines.read_vec3("angle")?;

    let buttons = lines.read_int("buttons")?;
    let command_number = lines.read_int("command_number")?;
    let forward_move = lines.read_int("forward_move")?;

    let predicted = lines.read_int("predicted")?;
    let impulse = lines.read_impulse("impulse")?;
    let mouse_x = lines.read_int("mouse_x")?;
    let mouse_y = lines.read_int("mouse_y")?;
    let random_seed = lines.read_int("random_seed")?;
    let side_move = lines.read_int("side_move")?;
    let tick_count = lines.read_int("tick_count")?;
    let up_move = lines.read_int("up_move")?;
    let view_angle = lines.read_vec3("view_angle")?;

    let item_definition = lines.read_int("item_definition")?;
    let weapon_subtype = lines.read_int("weapon_subtype")?;

    let save_frames = lines.read_int("save_frames")?;
    let did_fire = lines.read_int("did_fire")?;
    let clip = lines.read_int("clip")?;

    let projectile_count = lines.read_count("projectile_count")?;
    let mut projectiles = Vec::with_capacity(lines.config().capacity_for(projectile_count));
    for _ in 0..projectile_count {
        projectiles.push(decode_projectile(lines)?);
    }

    Ok(Frame {
        position,
        velocity,
        angle,
        buttons,
        command_number,
        forward_move,
        predicted,
        impulse,
        mouse_x,
        mouse_y,
        random_seed,
        side_move,
        tick_count,
        up_move,
        view_angle,
        item_definition,
        weapon_subtype,
        save_frames,
        did_fire,
        clip,
        projectiles,
    })
}

// ── Header ──────────────────────────────────────────────────────

/// Encode the five header integers.
pub fn encode_header(w: &mut dyn Write, h: &RecordingHeader) -> Result<(), RecordingError> {
    write_int(w, h.is_recording)?;
    write_int(w, h.is_playing)?;
    write_int(w, h.current_tick)?;
    write_int(w, h.tick_count)?;
    write_int(w, h.position_count)?;
    Ok(())
}

/// Decode the five header integers.
pub fn decode_header<R: BufRead>(
    lines: &mut LineReader<R>,
) -> Result<RecordingHeader, RecordingError> {
    let header = RecordingHeader {
        is_recording: lines.read_int("is_recording")?,
        is_playing: lines.read_int("is_playing")?,
        current_tick: lines.read_int("current_tick")?,
        tick_count: lines.read_int("tick_count")?,
        position_count: lines.read_int("position_count")?,
    };
    debug!(
        tick_count = header.tick_count,
        position_count = header.position_count,
        "decoded recording header"
    );
    Ok(header)
}

/// Declared frame count as a loop bound, rejecting negative values.
pub(crate) fn declared_frames(header: &RecordingHeader) -> Result<usize, RecordingError> {
    header
        .declared_frames()
        .ok_or(RecordingError::NegativeCount {
            line: 4,
            field: "tick_count",
            count: header.tick_count,
        })
}

/// Deal with whatever follows the last frame, per the reader's config.
pub(crate) fn finish_decode<R: BufRead>(lines: &mut LineReader<R>) -> Result<(), RecordingError> {
    let consumed = lines.lines_read();
    if lines.config().reject_trailing_data {
        if let Some(line) = lines.next_non_blank()? {
            return Err(RecordingError::TrailingData { line });
        }
    } else if !lines.at_end()? {
        debug!(line = consumed + 1, "ignoring data after last frame");
    }
    debug!(lines = consumed, "finished decoding recording");
    Ok(())
}

// ── Recording ───────────────────────────────────────────────────

/// Encode a recording.
///
/// Frames are bounded by the declared `tick_count`, not by
/// `frames.len()`. A mismatch is the caller's mistake: it is logged and
/// the output follows `tick_count` as far as the available frames allow.
pub fn encode_recording(w: &mut dyn Write, r: &Recording) -> Result<(), RecordingError> {
    let header = r.header();
    encode_header(w, &header)?;

    let declared = header.declared_frames().unwrap_or(0);
    if declared != r.frames.len() {
        warn!(
            tick_count = r.tick_count,
            frames = r.frames.len(),
            "recording tick_count disagrees with frame count"
        );
    }
    for f in r.frames.iter().take(declared) {
        encode_frame(w, f)?;
    }
    Ok(())
}

/// Decode a complete recording.
///
/// Reads the header, then exactly `tick_count` frames. Any malformed or
/// missing line aborts the whole decode; no partial recording is returned.
pub fn decode_recording<R: BufRead>(
    lines: &mut LineReader<R>,
) -> Result<Recording, RecordingError> {
    let header = decode_header(lines)?;
    let declared = declared_frames(&header)?;

    let mut frames = Vec::with_capacity(lines.config().capacity_for(declared));
    for index in 0..declared {
        let frame = decode_frame(lines)?;
        trace!(index, projectiles = frame.projectiles.len(), "decoded frame");
        frames.push(frame);
    }
    finish_decode(lines)?;

    Ok(Recording::from_parts(header, frames))
}

/// Render a recording to its text form.
///
/// # Examples
///
/// ```
/// use tasrec_codec::{from_text, to_text};
/// use tasrec_core::{Frame, Recording};
///
/// let mut rec = Recording::default();
/// rec.push_frame(Frame::default());
///
/// let text = to_text(&rec);
/// assert!(text.starts_with("0\n0\n0\n1\n0\n"));
/// assert_eq!(from_text(&text).unwrap(), rec);
/// ```
pub fn to_text(r: &Recording) -> String {
    let mut buf = Vec::new();
    // `Write for Vec<u8>` never fails.
    let _ = encode_recording(&mut buf, r);
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Parse a recording from its text form with the default config.
pub fn from_text(text: &str) -> Result<Recording, RecordingError> {
    from_text_with(text, DecodeConfig::default())
}

/// Parse a recording from its text form.
pub fn from_text_with(text: &str, config: DecodeConfig) -> Result<Recording, RecordingError> {
    decode_recording(&mut LineReader::with_config(text.as_bytes(), config))
}
