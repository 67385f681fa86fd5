//! Per-frame impulse command code.

use std::fmt;

/// The impulse command issued on a frame.
///
/// Recordings store "no impulse" as the raw sentinel `-1`, which the text
/// format writes as a lone NUL byte rather than as a number. Every other
/// value is a non-negative command code written in lowercase hex.
///
/// # Examples
///
/// ```
/// use tasrec_core::Impulse;
///
/// assert_eq!(Impulse::from_raw(-1), Some(Impulse::None));
/// assert_eq!(Impulse::from_raw(101), Some(Impulse::Code(101)));
/// assert_eq!(Impulse::from_raw(-7), None);
/// assert_eq!(Impulse::None.raw(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Impulse {
    /// No impulse this frame (raw sentinel `-1`).
    None,
    /// A command code.
    Code(u32),
}

impl Impulse {
    /// Raw value used for [`Impulse::None`].
    pub const SENTINEL: i64 = -1;

    /// Map a raw integer to an impulse.
    ///
    /// Returns `None` for negative values other than the sentinel and for
    /// values that do not fit in a `u32`.
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw == Self::SENTINEL {
            return Some(Self::None);
        }
        u32::try_from(raw).ok().map(Self::Code)
    }

    /// The raw integer form, `-1` for [`Impulse::None`].
    pub fn raw(self) -> i64 {
        match self {
            Self::None => Self::SENTINEL,
            Self::Code(code) => i64::from(code),
        }
    }

    /// Whether this is the "no impulse" sentinel.
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// The command code, if any.
    pub fn code(self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::Code(code) => Some(code),
        }
    }
}

impl Default for Impulse {
    fn default() -> Self {
        Self::Code(0)
    }
}

impl From<u32> for Impulse {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

impl From<Option<u32>> for Impulse {
    fn from(code: Option<u32>) -> Self {
        code.map_or(Self::None, Self::Code)
    }
}

impl fmt::Display for Impulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Code(code) => write!(f, "{code:#x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sentinel_is_distinct_from_zero() {
        assert_ne!(Impulse::None, Impulse::Code(0));
        assert_eq!(Impulse::None.raw(), -1);
        assert_eq!(Impulse::Code(0).raw(), 0);
    }

    #[test]
    fn default_is_code_zero() {
        assert_eq!(Impulse::default(), Impulse::Code(0));
        assert!(!Impulse::default().is_none());
    }

    #[test]
    fn out_of_range_raw_rejected() {
        assert_eq!(Impulse::from_raw(-2), None);
        assert_eq!(Impulse::from_raw(i64::from(u32::MAX) + 1), None);
        assert_eq!(
            Impulse::from_raw(i64::from(u32::MAX)),
            Some(Impulse::Code(u32::MAX))
        );
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Impulse::from(None), Impulse::None);
        assert_eq!(Impulse::from(Some(5)), Impulse::Code(5));
        assert_eq!(Impulse::Code(5).code(), Some(5));
        assert_eq!(Impulse::None.code(), None);
    }

    proptest! {
        #[test]
        fn raw_roundtrip(code in any::<u32>()) {
            let imp = Impulse::Code(code);
            prop_assert_eq!(Impulse::from_raw(imp.raw()), Some(imp));
        }
    }
}
