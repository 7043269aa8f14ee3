//! Marker that tells outcomes apart from raw values
//!
//! Flattening operations (`and_then`, `or_else` and their async forms) accept
//! callbacks that return something implementing [`IntoOutcome`]. The trait is
//! sealed: only [`Outcome`] and [`std::result::Result`] carry it, so a caller's
//! own type can never be mistaken for an outcome, whatever its shape.

use crate::outcome::Outcome;

mod sealed {
    pub trait Sealed {}
}

/// Types that already are an outcome and must be adopted as-is, not wrapped.
pub trait IntoOutcome<V, E>: sealed::Sealed {
    /// Convert into an [`Outcome`] without re-wrapping.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> sealed::Sealed for Outcome<V, E> {}

impl<V, E> IntoOutcome<V, E> for Outcome<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self
    }
}

impl<V, E> sealed::Sealed for Result<V, E> {}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        match self {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}
