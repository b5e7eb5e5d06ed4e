/// Configuration for a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Whether operator results may be NaN or infinite (e.g. `1/0`).
    /// When false such results fail with `InvalidOperation`.
    pub allow_invalid_results: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            allow_invalid_results: false,
        }
    }
}

impl EvalConfig {
    /// Returns a copy with the invalid-result policy set to `allow`
    pub fn with_invalid_results(mut self, allow: bool) -> Self {
        self.allow_invalid_results = allow;
        self
    }
}
