//! Parser limits.

/// Default maximum nesting depth of rule invocations.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum input length, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Default maximum number of rule engine consultations per parse.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Limits applied to every call to [`MarkupParser::parse`](crate::MarkupParser::parse).
///
/// # Examples
///
/// ```
/// use markup::ParserConfig;
///
/// let config = ParserConfig::default().with_max_depth(8);
/// assert_eq!(config.max_depth, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// How deep rules may recurse into the parser before the input is
    /// rejected as too complex.
    pub max_depth: usize,
    /// Longest accepted input, in characters.
    pub max_input_len: usize,
    /// How many times a single parse may consult the rule engine. Failed tag
    /// scans are retried from every later position, so badly nested input can
    /// cost far more than its length suggests.
    pub max_steps: usize,
}

impl ParserConfig {
    /// Create a config with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum number of rule engine consultations.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the maximum input length.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
