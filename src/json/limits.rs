//! Parser configuration.
//!
//! The nesting depth limit is the only guard against unbounded stack growth:
//! the parser recurses once per nested container, so call-stack depth tracks
//! JSON nesting depth directly.

/// Default maximum nesting depth for arrays/objects.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 200;

/// Default maximum input size for [`Limits::strict`].
pub const DEFAULT_MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Limits and strictness options for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested containers. Input nested exactly this deep
    /// is accepted; one more level fails with `DepthExceeded`.
    pub max_nesting_depth: usize,
    /// Maximum total input size in bytes
    pub max_input_size: usize,
    /// Whether bytes after the top-level value are ignored instead of
    /// rejected with `TrailingData`
    pub allow_trailing_data: bool,
}

impl Limits {
    /// Default limits: trailing data rejected, 16 MiB input cap.
    pub const fn strict() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            allow_trailing_data: false,
        }
    }

    /// Trailing data ignored and no input size cap. The depth guard still
    /// applies.
    pub const fn lenient() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_input_size: usize::MAX,
            allow_trailing_data: true,
        }
    }

    /// Return a copy with a different nesting limit.
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Return a copy with a different trailing-data policy.
    pub const fn with_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing_data = allow;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert_eq!(limits.max_nesting_depth, 200);
        assert_eq!(limits.max_input_size, 16 * 1024 * 1024);
        assert!(!limits.allow_trailing_data);
        assert_eq!(limits, Limits::default());
    }

    #[test]
    fn test_lenient_limits() {
        let limits = Limits::lenient();
        assert!(limits.allow_trailing_data);
        assert!(limits.max_input_size > Limits::strict().max_input_size);
        assert_eq!(limits.max_nesting_depth, Limits::strict().max_nesting_depth);
    }

    #[test]
    fn test_builders() {
        let limits = Limits::strict()
            .with_max_nesting_depth(3)
            .with_trailing_data(true);
        assert_eq!(limits.max_nesting_depth, 3);
        assert!(limits.allow_trailing_data);
    }
}
