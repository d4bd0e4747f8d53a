//! Helpers for running analyses in tests.

use protosema::syntax::SourceUnit;
use protosema::{Analysis, build};

/// Build an analysis and fail the test with the error message if it fails.
pub fn analyze(units: &[SourceUnit]) -> Analysis {
    build(units).unwrap_or_else(|err| panic!("analysis failed: {err}"))
}

/// Build an analysis over a single unit.
pub fn analyze_unit(unit: SourceUnit) -> Analysis {
    analyze(&[unit])
}
