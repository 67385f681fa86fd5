//! Benchmark profiles for the tasrec codec.
//!
//! - [`reference_profile`]: one level at 66 ticks/s, about 45 seconds
//! - [`stress_profile`]: a long segment with a busy projectile load

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tasrec_core::Recording;
use tasrec_test_utils::sample_recording;

/// Ticks in [`reference_profile`].
pub const REFERENCE_TICKS: usize = 3_000;

/// Ticks in [`stress_profile`].
pub const STRESS_TICKS: usize = 30_000;

/// Build a reference recording: 3000 frames, 2 projectiles each.
pub fn reference_profile() -> Recording {
    sample_recording(REFERENCE_TICKS, 2)
}

/// Build a stress recording: 30000 frames, 8 projectiles each.
///
/// Encodes to roughly 3.3 million lines.
pub fn stress_profile() -> Recording {
    sample_recording(STRESS_TICKS, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_consistent() {
        let rec = reference_profile();
        assert_eq!(rec.frames.len(), REFERENCE_TICKS);
        assert!(rec.counts_consistent());
        assert_eq!(rec.projectile_count(), REFERENCE_TICKS * 2);
    }
}
