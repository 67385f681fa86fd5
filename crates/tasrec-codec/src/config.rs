//! Decoder configuration.

/// Configuration for recording decoding.
///
/// The defaults accept every existing recording file. All
/// values are plain data and can be set directly or through the `with_*`
/// helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Upper bound on capacity reserved up front from a declared count.
    ///
    /// Default: 4096. Counts come from the file, so a corrupt count line
    /// would otherwise reserve memory before any of the lines it promises
    /// have been read. Vectors still grow past this as records arrive.
    pub max_preallocate: usize,

    /// Reject non-empty input after the last declared frame.
    ///
    /// Default: `false`. Existing readers stop after `tick_count` frames
    /// and ignore whatever follows.
    pub reject_trailing_data: bool,
}

impl DecodeConfig {
    /// Default capacity bound for declared counts.
    pub const DEFAULT_MAX_PREALLOCATE: usize = 4096;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_preallocate: Self::DEFAULT_MAX_PREALLOCATE,
            reject_trailing_data: false,
        }
    }

    /// Set [`max_preallocate`](Self::max_preallocate).
    pub fn with_max_preallocate(mut self, max: usize) -> Self {
        self.max_preallocate = max;
        self
    }

    /// Set [`reject_trailing_data`](Self::reject_trailing_data).
    pub fn with_reject_trailing_data(mut self, reject: bool) -> Self {
        self.reject_trailing_data = reject;
        self
    }

    /// Capacity to reserve for `declared` records.
    pub fn capacity_for(&self, declared: usize) -> usize {
        declared.min(self.max_preallocate)
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
