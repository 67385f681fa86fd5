//! Streaming recording writer.
//!
//! [`RecordingWriter`] writes the header on construction and then one
//! frame per call to any `Write` sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tasrec_core::{Frame, Recording, RecordingHeader};
use tracing::warn;

use crate::codec::{encode_frame, encode_header, encode_recording};
use crate::error::RecordingError;

/// Writes a recording one frame at a time.
///
/// The header, including `tick_count`, is written before any frame, so
/// the caller must know the frame count up front. Writing a different
/// number of frames produces a file that will not decode; [`finish`]
/// logs a warning when that happens.
///
/// [`finish`]: RecordingWriter::finish
///
/// # Examples
///
/// ```
/// use tasrec_codec::{from_text, RecordingWriter};
/// use tasrec_core::{Frame, RecordingHeader};
///
/// let header = RecordingHeader { tick_count: 2, ..RecordingHeader::default() };
/// let mut writer = RecordingWriter::new(Vec::new(), &header).unwrap();
/// writer.write_frame(&Frame::default()).unwrap();
/// writer.write_frame(&Frame::default()).unwrap();
/// assert_eq!(writer.frames_written(), 2);
///
/// let bytes = writer.finish().unwrap();
/// let rec = from_text(std::str::from_utf8(&bytes).unwrap()).unwrap();
/// assert_eq!(rec.frames.len(), 2);
/// ```
pub struct RecordingWriter<W: Write> {
    writer: W,
    tick_count: i32,
    frames_written: usize,
}

impl<W: Write> RecordingWriter<W> {
    /// Create a new writer, immediately writing the header.
    pub fn new(mut writer: W, header: &RecordingHeader) -> Result<Self, RecordingError> {
        encode_header(&mut writer, header)?;
        Ok(Self {
            writer,
            tick_count: header.tick_count,
            frames_written: 0,
        })
    }

    /// Write one frame and its projectiles.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), RecordingError> {
        encode_frame(&mut self.writer, frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), RecordingError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn finish(mut self) -> Result<W, RecordingError> {
        if usize::try_from(self.tick_count).ok() != Some(self.frames_written) {
            warn!(
                tick_count = self.tick_count,
                frames_written = self.frames_written,
                "header tick_count disagrees with frames written"
            );
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Encode a complete recording to any byte sink.
pub fn write_recording(
    mut writer: impl Write,
    recording: &Recording,
) -> Result<(), RecordingError> {
    encode_recording(&mut writer, recording)?;
    writer.flush()?;
    Ok(())
}

/// Save a recording to a file, replacing any existing contents.
pub fn save_recording(
    path: impl AsRef<Path>,
    recording: &Recording,
) -> Result<(), RecordingError> {
    write_recording(BufWriter::new(File::create(path)?), recording)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::to_text;
    use tasrec_core::Projectile;

    #[test]
    fn streamed_output_matches_to_text() {
        let mut rec = Recording::default();
        rec.push_frame(Frame {
            buttons: 2,
            ..Frame::default()
        });
        rec.push_frame(Frame {
            projectiles: vec![Projectile::default()],
            ..Frame::default()
        });

        let mut writer = RecordingWriter::new(Vec::new(), &rec.header()).unwrap();
        for frame in &rec.frames {
            writer.write_frame(frame).unwrap();
        }
        let bytes = writer.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), to_text(&rec));
    }

    #[test]
    fn header_written_on_construction() {
        let header = RecordingHeader {
            is_recording: 1,
            is_playing: 0,
            current_tick: 9,
            tick_count: 0,
            position_count: 2,
        };
        let writer = RecordingWriter::new(Vec::new(), &header).unwrap();
        assert_eq!(writer.finish().unwrap(), b"1\n0\n9\n0\n2\n");
    }

    #[test]
    fn write_recording_to_vec() {
        let mut rec = Recording::default();
        rec.push_frame(Frame::default());
        let mut buf = Vec::new();
        write_recording(&mut buf, &rec).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_text(&rec));
    }
}
