//! Constructors for [`Outcome`] and [`AsyncOutcome`]

use std::future::Future;

use tracing::trace;

use crate::future::AsyncOutcome;
use crate::outcome::Outcome;
use crate::tag::IntoOutcome;

/// A successful outcome.
#[inline]
pub fn ok<V, E>(value: V) -> Outcome<V, E> {
    Outcome::Ok(value)
}

/// A failed outcome.
#[inline]
pub fn err<V, E>(error: E) -> Outcome<V, E> {
    Outcome::Err(error)
}

fn capture<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    if result.is_err() {
        trace!(
            error_type = std::any::type_name::<E>(),
            "captured failure into Err outcome"
        );
    }
    result.into_outcome()
}

/// Run a fallible closure now and capture its result.
///
/// The closure must return a std `Result`. Async work does not fit that
/// signature; use [`wrap_async`] for it.
///
/// ```rust
/// use nebula_outcome::prelude::*;
///
/// let port = wrap(|| "80".parse::<u16>());
/// assert_eq!(port, ok(80));
/// ```
pub fn wrap<V, E, F>(f: F) -> Outcome<V, E>
where
    F: FnOnce() -> Result<V, E>,
{
    capture(f())
}

/// Run a fallible async closure and capture its result.
///
/// `f` itself is called right away; the future it returns is awaited when
/// the [`AsyncOutcome`] is first polled.
pub fn wrap_async<'a, V, E, F, Fut>(f: F) -> AsyncOutcome<'a, V, E>
where
    V: Send + 'a,
    E: Send + 'a,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>> + Send + 'a,
{
    let pending = f();
    AsyncOutcome::new(async move { capture(pending.await) })
}

/// View a future that settles to an outcome (or std `Result`) as an
/// [`AsyncOutcome`], without re-wrapping what it produces.
pub fn from_future<'a, V, E, Fut, R>(future: Fut) -> AsyncOutcome<'a, V, E>
where
    V: Send + 'a,
    E: Send + 'a,
    Fut: Future<Output = R> + Send + 'a,
    R: IntoOutcome<V, E>,
{
    AsyncOutcome::new(future)
}
