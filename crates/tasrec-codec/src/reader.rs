//! Streaming recording reader.
//!
//! [`RecordingReader`] decodes the header on construction, then yields
//! exactly `tick_count` frames from any `BufRead` source.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tasrec_core::{Frame, Recording, RecordingHeader};
use tracing::trace;

use crate::codec::{declared_frames, decode_frame, decode_header, finish_decode};
use crate::config::DecodeConfig;
use crate::error::RecordingError;
use crate::text::LineReader;

/// Reads a recording one frame at a time.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
///
/// # Examples
///
/// ```
/// use tasrec_codec::{to_text, RecordingReader};
/// use tasrec_core::{Frame, Recording};
///
/// let mut rec = Recording::default();
/// rec.push_frame(Frame { tick_count: 1, ..Frame::default() });
/// rec.push_frame(Frame { tick_count: 2, ..Frame::default() });
/// let text = to_text(&rec);
///
/// let mut reader = RecordingReader::open(text.as_bytes()).unwrap();
/// assert_eq!(reader.header().tick_count, 2);
/// assert_eq!(reader.next_frame().unwrap().unwrap().tick_count, 1);
/// assert_eq!(reader.next_frame().unwrap().unwrap().tick_count, 2);
/// assert!(reader.next_frame().unwrap().is_none());
/// ```
pub struct RecordingReader<R: BufRead> {
    lines: LineReader<R>,
    header: RecordingHeader,
    declared: usize,
    frames_read: usize,
    finished: bool,
}

impl<R: BufRead> RecordingReader<R> {
    /// Open a recording stream with the default config, reading the header.
    pub fn open(reader: R) -> Result<Self, RecordingError> {
        Self::open_with(reader, DecodeConfig::default())
    }

    /// Open a recording stream, reading the header.
    pub fn open_with(reader: R, config: DecodeConfig) -> Result<Self, RecordingError> {
        let mut lines = LineReader::with_config(reader, config);
        let header = decode_header(&mut lines)?;
        let declared = declared_frames(&header)?;
        Ok(Self {
            lines,
            header,
            declared,
            frames_read: 0,
            finished: false,
        })
    }

    /// The decoded header.
    pub fn header(&self) -> &RecordingHeader {
        &self.header
    }

    /// Read the next frame, or `None` once `tick_count` frames have been read.
    ///
    /// After the last frame, trailing input is checked according to the
    /// reader's [`DecodeConfig`].
    pub fn next_frame(&mut self) -> Result<Option<Frame>, RecordingError> {
        if self.frames_read == self.declared {
            if !self.finished {
                self.finished = true;
                finish_decode(&mut self.lines)?;
            }
            return Ok(None);
        }
        let frame = decode_frame(&mut self.lines)?;
        trace!(
            index = self.frames_read,
            projectiles = frame.projectiles.len(),
            "decoded frame"
        );
        self.frames_read += 1;
        Ok(Some(frame))
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    /// Number of frames still to be read.
    pub fn frames_remaining(&self) -> usize {
        self.declared - self.frames_read
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines.lines_read()
    }

    /// Convert into a frame iterator.
    pub fn frames(self) -> FrameIter<R> {
        FrameIter {
            reader: self,
            done: false,
        }
    }

    /// Read all remaining frames into a [`Recording`].
    pub fn into_recording(mut self) -> Result<Recording, RecordingError> {
        let capacity = self.lines.config().capacity_for(self.frames_remaining());
        let mut frames = Vec::with_capacity(capacity);
        while let Some(frame) = self.next_frame()? {
            frames.push(frame);
        }
        Ok(Recording::from_parts(self.header, frames))
    }
}

/// Iterator adapter over recording frames.
///
/// Yields at most one error, then stops.
pub struct FrameIter<R: BufRead> {
    reader: RecordingReader<R>,
    done: bool,
}

impl<R: BufRead> FrameIter<R> {
    /// The decoded header.
    pub fn header(&self) -> &RecordingHeader {
        self.reader.header()
    }
}

impl<R: BufRead> Iterator for FrameIter<R> {
    type Item = Result<Frame, RecordingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.reader.frames_remaining()))
        }
    }
}

/// Decode a complete recording from any byte source.
pub fn read_recording(reader: impl Read) -> Result<Recording, RecordingError> {
    RecordingReader::open(BufReader::new(reader))?.into_recording()
}

/// Load a recording from a file.
pub fn load_recording(path: impl AsRef<Path>) -> Result<Recording, RecordingError> {
    read_recording(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::to_text;
    use tasrec_core::{Impulse, Projectile};

    fn sample(ticks: i32) -> Recording {
        let mut rec = Recording {
            is_playing: 1,
            position_count: 4,
            ..Recording::default()
        };
        for tick in 0..ticks {
            rec.push_frame(Frame {
                tick_count: tick,
                impulse: if tick % 2 == 0 { Impulse::None } else { Impulse::Code(1) },
                projectiles: vec![Projectile::default(); tick as usize],
                ..Frame::default()
            });
        }
        rec
    }

    #[test]
    fn reads_declared_frames_then_none() {
        let text = to_text(&sample(3));
        let mut reader = RecordingReader::open(text.as_bytes()).unwrap();
        assert_eq!(reader.frames_remaining(), 3);
        for tick in 0..3 {
            let frame = reader.next_frame().unwrap().unwrap();
            assert_eq!(frame.tick_count, tick);
            assert_eq!(frame.projectiles.len(), tick as usize);
        }
        assert!(reader.next_frame().unwrap().is_none());
        assert!(reader.next_frame().unwrap().is_none());
        assert_eq!(reader.frames_read(), 3);
    }

    #[test]
    fn frame_iterator_collects() {
        let text = to_text(&sample(4));
        let reader = RecordingReader::open(text.as_bytes()).unwrap();
        let frames: Vec<_> = reader.frames().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].tick_count, 3);
    }

    #[test]
    fn iterator_stops_after_error() {
        let rec = sample(2);
        let text = to_text(&rec);
        let cut = text.len() - 3;
        let reader = RecordingReader::open(&text.as_bytes()[..cut]).unwrap();
        let results: Vec<_> = reader.frames().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn into_recording_matches_source() {
        let rec = sample(3);
        let text = to_text(&rec);
        let got = RecordingReader::open(text.as_bytes())
            .unwrap()
            .into_recording()
            .unwrap();
        assert_eq!(got, rec);
    }

    #[test]
    fn short_header_errors_on_open() {
        let result = RecordingReader::open("1\n0\n".as_bytes());
        assert!(matches!(
            result,
            Err(RecordingError::UnexpectedEof {
                line: 3,
                field: "current_tick"
            })
        ));
    }

    #[test]
    fn trailing_data_reported_after_last_frame() {
        let mut text = to_text(&sample(1));
        text.push_str("junk\n");
        let config = DecodeConfig::new().with_reject_trailing_data(true);
        let mut reader = RecordingReader::open_with(text.as_bytes(), config).unwrap();
        assert!(reader.next_frame().unwrap().is_some());
        assert!(matches!(
            reader.next_frame(),
            Err(RecordingError::TrailingData { .. })
        ));
    }

    #[test]
    fn read_recording_from_read() {
        let rec = sample(2);
        let text = to_text(&rec);
        let got = read_recording(std::io::Cursor::new(text.into_bytes())).unwrap();
        assert_eq!(got, rec);
    }
}
