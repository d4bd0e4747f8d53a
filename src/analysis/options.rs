//! Analysis options

use crate::hir::DuplicatePolicy;

/// Options controlling a [`crate::build_with_options`] run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// What to do when two declarations produce the same fully qualified name
    pub duplicate_types: DuplicatePolicy,
    /// What to do when two extension fields produce the same option path
    pub duplicate_options: DuplicatePolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            duplicate_types: DuplicatePolicy::Error,
            duplicate_options: DuplicatePolicy::Error,
        }
    }
}

impl AnalysisOptions {
    /// Use the same duplicate policy for types and options
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_types = policy;
        self.duplicate_options = policy;
        self
    }

    /// Last registration wins everywhere, without warnings
    pub fn last_write_wins() -> Self {
        Self::default().with_duplicate_policy(DuplicatePolicy::Overwrite)
    }
}
