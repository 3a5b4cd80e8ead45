/// Default maximum nesting depth. Each S in the derivation counts as
/// one level, including the S after each +.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for a driver. Nothing here is global; each driver owns its
/// own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth. 0 means no limit.
    pub max_depth: usize,
    /// Dump the source and its tokens before the trace.
    pub debug: bool,
    /// Exit with a non-zero code when any parse errors are reported.
    pub fail_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, debug: false, fail_on_error: false }
    }
}

impl Config {
    pub fn new(max_depth: usize, debug: bool, fail_on_error: bool) -> Self {
        Self { max_depth, debug, fail_on_error }
    }
}
