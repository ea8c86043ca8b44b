//! Language version and parse options.

/// Target language version.
///
/// The version only affects which words count as reserved when validating
/// identifiers; token classification is identical across versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageVersion {
    /// ES3 additionally reserves `abstract`, `boolean`, `int`, ... .
    EcmaScript3,
    #[default]
    EcmaScript5,
}

/// Options threaded from the tree down to the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub language_version: LanguageVersion,
    /// Capacity in bytes of the scanner's sliding window.
    pub window_capacity: usize,
}

impl ParseOptions {
    /// Default sliding window capacity.
    pub const DEFAULT_WINDOW_CAPACITY: usize = 2048;
    /// Smallest window the scanner will allocate.
    pub const MIN_WINDOW_CAPACITY: usize = 16;

    #[must_use]
    pub const fn new() -> Self {
        ParseOptions {
            language_version: LanguageVersion::EcmaScript5,
            window_capacity: Self::DEFAULT_WINDOW_CAPACITY,
        }
    }

    #[must_use]
    pub const fn with_language_version(mut self, version: LanguageVersion) -> Self {
        self.language_version = version;
        self
    }

    /// Set the window capacity, clamped to [`Self::MIN_WINDOW_CAPACITY`].
    #[must_use]
    pub const fn with_window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = if capacity < Self::MIN_WINDOW_CAPACITY {
            Self::MIN_WINDOW_CAPACITY
        } else {
            capacity
        };
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.language_version, LanguageVersion::EcmaScript5);
        assert_eq!(options.window_capacity, 2048);
    }

    #[test]
    fn window_capacity_is_clamped() {
        assert_eq!(ParseOptions::new().with_window_capacity(4).window_capacity, 16);
        assert_eq!(ParseOptions::new().with_window_capacity(64).window_capacity, 64);
    }

    #[test]
    fn version_ordering() {
        assert!(LanguageVersion::EcmaScript3 < LanguageVersion::EcmaScript5);
    }
}
