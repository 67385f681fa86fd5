//! Fingerprints of frames and recordings.
//!
//! Uses FNV-1a over the encoded text, so two values hash equally exactly
//! when they would be written to identical bytes. Float noise below the
//! fourth decimal place does not change a hash. These hashes are not
//! cryptographically secure.

use std::io::{self, Write};

use tasrec_core::{Frame, Recording};

use crate::codec::{encode_frame, encode_recording};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// A `Write` sink that folds every byte into an FNV-1a state.
struct FnvWriter(u64);

impl FnvWriter {
    fn new() -> Self {
        Self(FNV_OFFSET)
    }
}

impl Write for FnvWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &b in buf {
            self.0 = (self.0 ^ b as u64).wrapping_mul(FNV_PRIME);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hash a frame, including its projectiles.
pub fn frame_hash(frame: &Frame) -> u64 {
    let mut h = FnvWriter::new();
    // FnvWriter never fails.
    let _ = encode_frame(&mut h, frame);
    h.0
}

/// Hash a whole recording as it would be written.
pub fn recording_hash(recording: &Recording) -> u64 {
    let mut h = FnvWriter::new();
    let _ = encode_recording(&mut h, recording);
    h.0
}
