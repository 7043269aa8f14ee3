//! The [`Outcome`] type and its chaining algebra

use std::fmt;
use std::future::Future;

use tracing::debug;

use crate::error::UnwrapError;
use crate::future::AsyncOutcome;
use crate::tag::IntoOutcome;

/// Result of an operation that either succeeded with `V` or failed with `E`.
///
/// Every operation consumes the outcome and yields a new one, so a chain reads
/// top to bottom without intermediate unwrapping:
///
/// ```rust
/// use nebula_outcome::prelude::*;
///
/// let port: Outcome<u16, String> = err::<u16, _>("missing")
///     .map(|p| p + 1)
///     .or_else(|e| err(format!("config: {e}")))
///     .catch(|_| 8080);
///
/// assert_eq!(port, ok(8080));
/// ```
///
/// Raw-value callbacks go through [`map`](Self::map) and
/// [`catch`](Self::catch), which lift the return value. Callbacks that may
/// themselves fail go through [`and_then`](Self::and_then) and
/// [`or_else`](Self::or_else), which adopt the returned outcome directly.
#[must_use = "this `Outcome` may be an `Err` that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<V, E> {
    /// Success payload.
    Ok(V),
    /// Failure payload.
    Err(E),
}

impl<V, E> Outcome<V, E> {
    /// Returns `true` for `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow the success payload, if any.
    #[inline]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrow the failure payload, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Take the success payload, discarding any error.
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Take the failure payload, discarding any value.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Transform the success value. `Err` passes through and `f` is not called.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the success value with a callback that may fail.
    ///
    /// The returned outcome (or std `Result`) becomes the new outcome as-is.
    pub fn and_then<U, R, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> R,
        R: IntoOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value).into_outcome(),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the failure. `Ok` passes through and `f` is not called.
    pub fn map_err<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Recover from a failure with a replacement value. `Ok` passes through
    /// and `f` is not called.
    pub fn catch<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => Self::Ok(f(error)),
        }
    }

    /// Recover from a failure with a callback that may fail again.
    pub fn or_else<E2, R, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> R,
        R: IntoOutcome<V, E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error).into_outcome(),
        }
    }

    /// Observe the success value without changing the outcome.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the failure without changing the outcome.
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Handle both branches, invoking exactly one of them.
    pub fn match_with<R, OkFn, ErrFn>(self, on_ok: OkFn, on_err: ErrFn) -> R
    where
        OkFn: FnOnce(V) -> R,
        ErrFn: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Return the success value, or hand back the failure as an [`UnwrapError`].
    pub fn try_unwrap(self) -> Result<V, UnwrapError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => {
                debug!(
                    error_type = std::any::type_name::<E>(),
                    "unwrapping an Err outcome"
                );
                Err(UnwrapError::new(error))
            }
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapError`] message if this is an `Err`. Use
    /// [`try_unwrap`](Self::try_unwrap) to keep the cause inspectable.
    #[track_caller]
    pub fn unwrap(self) -> V
    where
        E: fmt::Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Return the success value or `default`.
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Return the success value or compute one from the failure.
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Convert into a std `Result`.
    pub fn into_std(self) -> Result<V, E> {
        self.into()
    }

    // =========================================================================
    // Bridges into the async vocabulary
    // =========================================================================

    /// Lift into an already-settled [`AsyncOutcome`].
    pub fn into_async<'a>(self) -> AsyncOutcome<'a, V, E>
    where
        V: Send + 'a,
        E: Send + 'a,
    {
        AsyncOutcome::ready(self)
    }

    /// Transform the success value with an async callback.
    pub fn map_async<'a, U, F, Fut>(self, f: F) -> AsyncOutcome<'a, U, E>
    where
        V: Send + 'a,
        E: Send + 'a,
        U: Send + 'a,
        F: FnOnce(V) -> Fut + Send + 'a,
        Fut: Future<Output = U> + Send + 'a,
    {
        self.into_async().map_async(f)
    }

    /// Transform the success value with an async callback that may fail.
    pub fn and_then_async<'a, U, R, F, Fut>(self, f: F) -> AsyncOutcome<'a, U, E>
    where
        V: Send + 'a,
        E: Send + 'a,
        U: Send + 'a,
        R: IntoOutcome<U, E>,
        F: FnOnce(V) -> Fut + Send + 'a,
        Fut: Future<Output = R> + Send + 'a,
    {
        self.into_async().and_then_async(f)
    }

    /// Recover from a failure with an async replacement value.
    pub fn catch_async<'a, F, Fut>(self, f: F) -> AsyncOutcome<'a, V, E>
    where
        V: Send + 'a,
        E: Send + 'a,
        F: FnOnce(E) -> Fut + Send + 'a,
        Fut: Future<Output = V> + Send + 'a,
    {
        self.into_async().catch_async(f)
    }

    /// Recover from a failure with an async callback that may fail again.
    pub fn or_else_async<'a, E2, R, F, Fut>(self, f: F) -> AsyncOutcome<'a, V, E2>
    where
        V: Send + 'a,
        E: Send + 'a,
        E2: Send + 'a,
        R: IntoOutcome<V, E2>,
        F: FnOnce(E) -> Fut + Send + 'a,
        Fut: Future<Output = R> + Send + 'a,
    {
        self.into_async().or_else_async(f)
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Collapse one level of nesting left by a raw [`map`](Outcome::map).
    pub fn flatten(self) -> Outcome<V, E> {
        self.and_then(|inner| inner)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        result.into_outcome()
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
