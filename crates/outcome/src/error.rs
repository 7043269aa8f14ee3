//! Failure raised when an `Err` outcome is unwrapped

use thiserror::Error;

/// Error produced by unwrapping an `Err` outcome.
///
/// The held domain failure is kept by value so callers can inspect or recover
/// it. It is never stringified away; only the `Display` form formats it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[nebula-outcome] cannot unwrap an Err result: {cause:?}")]
pub struct UnwrapError<E> {
    cause: E,
}

impl<E> UnwrapError<E> {
    /// Wrap a domain failure.
    pub fn new(cause: E) -> Self {
        Self { cause }
    }

    /// The original failure held by the `Err`.
    #[inline]
    pub fn cause(&self) -> &E {
        &self.cause
    }

    /// Take the original failure back.
    pub fn into_cause(self) -> E {
        self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_identifies_library() {
        let error = UnwrapError::new("boom");
        assert_eq!(
            error.to_string(),
            "[nebula-outcome] cannot unwrap an Err result: \"boom\""
        );
    }

    #[test]
    fn test_cause_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = UnwrapError::new(io);

        assert_eq!(error.cause().kind(), std::io::ErrorKind::NotFound);
        assert_eq!(error.into_cause().to_string(), "missing");
    }
}
