//! Invariant checking for arena-backed mesh data.
//!
//! Evaluators assume valid vertex references, distinct vertices and unit
//! normals and never re-check them. Types that hold such data implement
//! [`DebugInvariants`] so callers can verify a mesh once before scanning it.

use crate::mesh_error::QualityError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), QualityError>;

    /// Panic on the first violated invariant in debug builds, or in release
    /// builds with the `strict-invariants` feature. No-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "mesh invariants");
    }
}

/// Run a fallible check and panic with the error when invariant checking is
/// enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
