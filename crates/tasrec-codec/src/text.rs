//! Scalar text primitives: one value per line.
//!
//! Integers are base-10. Floats use a fixed four fractional digits with
//! trailing zeros stripped (see [`format_float`]). Impulses are lowercase
//! hex, except the "no impulse" sentinel which is a lone NUL byte.

use std::io::{BufRead, Write};

use tasrec_core::{Impulse, Vec3};

use crate::config::DecodeConfig;
use crate::error::{RecordingError, ScalarKind};
use crate::NO_IMPULSE;

/// Format a float the way recording files store it.
///
/// The value is rounded to four fractional digits (ties to even on the
/// exact binary value), then trailing zeros and a bare trailing point are
/// removed. Non-finite values are written as `nan`, `inf` and `-inf`.
///
/// # Examples
///
/// ```
/// use tasrec_codec::format_float;
///
/// assert_eq!(format_float(1.5), "1.5");
/// assert_eq!(format_float(2.0), "2");
/// assert_eq!(format_float(0.123), "0.123");
/// assert_eq!(format_float(1.23456), "1.2346");
/// ```
pub fn format_float(v: f32) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let mut s = format!("{v:.4}");
    let keep = s.trim_end_matches('0').trim_end_matches('.').len();
    s.truncate(keep);
    s
}

// ── Primitive writers ───────────────────────────────────────────

/// Write a base-10 integer line.
pub fn write_int(w: &mut dyn Write, v: i32) -> Result<(), RecordingError> {
    writeln!(w, "{v}")?;
    Ok(())
}

/// Write a count line.
pub fn write_count(w: &mut dyn Write, n: usize) -> Result<(), RecordingError> {
    writeln!(w, "{n}")?;
    Ok(())
}

/// Write a float line using [`format_float`].
pub fn write_float(w: &mut dyn Write, v: f32) -> Result<(), RecordingError> {
    writeln!(w, "{}", format_float(v))?;
    Ok(())
}

/// Write a vector as three float lines, `x, y, z`.
pub fn write_vec3(w: &mut dyn Write, v: Vec3) -> Result<(), RecordingError> {
    write_float(w, v.x)?;
    write_float(w, v.y)?;
    write_float(w, v.z)?;
    Ok(())
}

/// Write an impulse line: NUL for [`Impulse::None`], lowercase hex otherwise.
pub fn write_impulse(w: &mut dyn Write, impulse: Impulse) -> Result<(), RecordingError> {
    match impulse {
        Impulse::None => writeln!(w, "{NO_IMPULSE}")?,
        Impulse::Code(code) => writeln!(w, "{code:x}")?,
    }
    Ok(())
}

// ── Line reader ─────────────────────────────────────────────────

/// Forward-only reader that yields one scalar per line.
///
/// Owns (or mutably borrows, via `&mut R`) the underlying source for the
/// duration of a decode and counts lines so errors can point at the
/// offending one. Line terminators may be `\n` or `\r\n`; surrounding
/// whitespace is ignored when parsing a scalar.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line: usize,
    config: DecodeConfig,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a source with the default [`DecodeConfig`].
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, DecodeConfig::default())
    }

    /// Wrap a source with an explicit config.
    pub fn with_config(inner: R, config: DecodeConfig) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(32),
            line: 0,
            config,
        }
    }

    /// Decode configuration in effect.
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Release the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next raw line without its terminator.
    fn next_line(&mut self, field: &'static str) -> Result<(usize, &str), RecordingError> {
        self.buf.clear();
        let n = self.inner.read_until(b'\n', &mut self.buf)?;
        self.line += 1;
        let line = self.line;
        if n == 0 {
            return Err(RecordingError::UnexpectedEof { line, field });
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| RecordingError::InvalidUtf8 { line })?;
        Ok((line, text))
    }

    /// Read a base-10 integer line.
    pub fn read_int(&mut self, field: &'static str) -> Result<i32, RecordingError> {
        let (line, text) = self.next_line(field)?;
        let text = text.trim();
        text.parse()
            .map_err(|_| invalid(line, field, ScalarKind::Integer, text))
    }

    /// Read a count line, rejecting negative values.
    pub fn read_count(&mut self, field: &'static str) -> Result<usize, RecordingError> {
        let count = self.read_int(field)?;
        usize::try_from(count).map_err(|_| RecordingError::NegativeCount {
            line: self.line,
            field,
            count,
        })
    }

    /// Read a float line.
    pub fn read_float(&mut self, field: &'static str) -> Result<f32, RecordingError> {
        let (line, text) = self.next_line(field)?;
        let text = text.trim();
        text.parse()
            .map_err(|_| invalid(line, field, ScalarKind::Float, text))
    }

    /// Read three float lines as a vector.
    pub fn read_vec3(&mut self, field: &'static str) -> Result<Vec3, RecordingError> {
        Ok(Vec3 {
            x: self.read_float(field)?,
            y: self.read_float(field)?,
            z: self.read_float(field)?,
        })
    }

    /// Read an impulse line: a lone NUL byte or a base-16 integer.
    ///
    /// A hex value of `-1` is read as the sentinel too; other negative
    /// values and values beyond `u32` are rejected.
    pub fn read_impulse(&mut self, field: &'static str) -> Result<Impulse, RecordingError> {
        let (line, text) = self.next_line(field)?;
        let text = text.trim();
        if text == NO_IMPULSE {
            return Ok(Impulse::None);
        }
        parse_hex(text)
            .and_then(Impulse::from_raw)
            .ok_or_else(|| invalid(line, field, ScalarKind::Impulse, text))
    }

    /// Whether the source has no more bytes.
    pub fn at_end(&mut self) -> Result<bool, RecordingError> {
        Ok(self.inner.fill_buf()?.is_empty())
    }

    /// Skip blank lines and report the first non-blank one, if any.
    ///
    /// Consumes the rest of the input.
    pub fn next_non_blank(&mut self) -> Result<Option<usize>, RecordingError> {
        loop {
            match self.next_line("trailing data") {
                Ok((line, text)) if !text.trim().is_empty() => return Ok(Some(line)),
                Ok(_) => {}
                Err(RecordingError::UnexpectedEof { .. }) => {
                    self.line -= 1;
                    return Ok(None);
                }
                Err(RecordingError::InvalidUtf8 { line }) => return Ok(Some(line)),
                Err(e) => return Err(e),
            }
        }
    }
}

fn parse_hex(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, 16).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn invalid(line: usize, field: &'static str, kind: ScalarKind, text: &str) -> RecordingError {
    RecordingError::InvalidScalar {
        line,
        field,
        kind,
        found: text.to_string(),
    }
}
