//! Asynchronous counterpart of [`Outcome`]
//!
//! [`AsyncOutcome`] wraps one future that settles to an [`Outcome`] and
//! replays the chaining vocabulary on top of it. Each operation composes a new
//! future that awaits the previous one first, so steps run strictly in the
//! order they were chained.
//!
//! The wrapped future can only settle to `Ok` or `Err`. A panic while polling
//! it is a failure of the async machinery, not a domain failure: it is never
//! caught here and never becomes an `Err`.

use std::future::{Future, IntoFuture};

use futures::future::{self, BoxFuture, FutureExt, Shared};

use crate::error::UnwrapError;
use crate::outcome::Outcome;
use crate::tag::IntoOutcome;

/// An [`Outcome`] that becomes available later.
///
/// Awaiting an `AsyncOutcome` (or calling [`resolve`](Self::resolve)) yields
/// the settled outcome:
///
/// ```rust
/// use nebula_outcome::prelude::*;
///
/// # futures::executor::block_on(async {
/// let total = ok::<u32, String>(1)
///     .map_async(|v| async move { v + 1 })
///     .and_then(|v| if v > 10 { err("too big".to_string()) } else { ok(v) })
///     .await;
///
/// assert_eq!(total, ok(2));
/// # });
/// ```
#[must_use = "an `AsyncOutcome` does nothing unless awaited"]
pub struct AsyncOutcome<'a, V, E> {
    inner: BoxFuture<'a, Outcome<V, E>>,
}

fn chained<'a, V, E>(
    future: impl Future<Output = Outcome<V, E>> + Send + 'a,
) -> AsyncOutcome<'a, V, E> {
    AsyncOutcome {
        inner: future.boxed(),
    }
}

impl<'a, V, E> AsyncOutcome<'a, V, E>
where
    V: Send + 'a,
    E: Send + 'a,
{
    /// Adopt a future whose output already is an outcome (or std `Result`).
    pub fn new<Fut, R>(future: Fut) -> Self
    where
        Fut: Future<Output = R> + Send + 'a,
        R: IntoOutcome<V, E>,
    {
        chained(async move { future.await.into_outcome() })
    }

    /// An `AsyncOutcome` that is settled from the start.
    pub fn ready(outcome: Outcome<V, E>) -> Self {
        chained(future::ready(outcome))
    }

    /// The settled outcome.
    pub fn resolve(self) -> BoxFuture<'a, Outcome<V, E>> {
        self.inner
    }

    /// Turn into a cloneable handle whose clones all observe the same
    /// settled outcome. The wrapped future is polled at most once.
    pub fn shared(self) -> SharedOutcome<'a, V, E>
    where
        V: Clone,
        E: Clone,
    {
        SharedOutcome {
            inner: self.inner.shared(),
        }
    }

    // =========================================================================
    // Success branch
    // =========================================================================

    /// Transform the success value once settled.
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<'a, U, E>
    where
        U: Send + 'a,
        F: FnOnce(V) -> U + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.map(f) })
    }

    /// Transform the success value with an async callback once settled.
    pub fn map_async<U, F, Fut>(self, f: F) -> AsyncOutcome<'a, U, E>
    where
        U: Send + 'a,
        F: FnOnce(V) -> Fut + Send + 'a,
        Fut: Future<Output = U> + Send + 'a,
    {
        let inner = self.inner;
        chained(async move {
            match inner.await {
                Outcome::Ok(value) => Outcome::Ok(f(value).await),
                Outcome::Err(error) => Outcome::Err(error),
            }
        })
    }

    /// Continue with a callback that may fail, adopting its outcome.
    pub fn and_then<U, R, F>(self, f: F) -> AsyncOutcome<'a, U, E>
    where
        U: Send + 'a,
        R: IntoOutcome<U, E>,
        F: FnOnce(V) -> R + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.and_then(f) })
    }

    /// Continue with an async callback that may fail, adopting its outcome.
    pub fn and_then_async<U, R, F, Fut>(self, f: F) -> AsyncOutcome<'a, U, E>
    where
        U: Send + 'a,
        R: IntoOutcome<U, E>,
        F: FnOnce(V) -> Fut + Send + 'a,
        Fut: Future<Output = R> + Send + 'a,
    {
        let inner = self.inner;
        chained(async move {
            match inner.await {
                Outcome::Ok(value) => f(value).await.into_outcome(),
                Outcome::Err(error) => Outcome::Err(error),
            }
        })
    }

    /// Observe the success value once settled.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&V) + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.tap(f) })
    }

    // =========================================================================
    // Failure branch
    // =========================================================================

    /// Transform the failure once settled.
    pub fn map_err<E2, F>(self, f: F) -> AsyncOutcome<'a, V, E2>
    where
        E2: Send + 'a,
        F: FnOnce(E) -> E2 + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.map_err(f) })
    }

    /// Recover from a failure with a replacement value.
    pub fn catch<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> V + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.catch(f) })
    }

    /// Recover from a failure with an async replacement value.
    pub fn catch_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Fut + Send + 'a,
        Fut: Future<Output = V> + Send + 'a,
    {
        let inner = self.inner;
        chained(async move {
            match inner.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error) => Outcome::Ok(f(error).await),
            }
        })
    }

    /// Recover with a callback that may fail again, adopting its outcome.
    pub fn or_else<E2, R, F>(self, f: F) -> AsyncOutcome<'a, V, E2>
    where
        E2: Send + 'a,
        R: IntoOutcome<V, E2>,
        F: FnOnce(E) -> R + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.or_else(f) })
    }

    /// Recover with an async callback that may fail again.
    pub fn or_else_async<E2, R, F, Fut>(self, f: F) -> AsyncOutcome<'a, V, E2>
    where
        E2: Send + 'a,
        R: IntoOutcome<V, E2>,
        F: FnOnce(E) -> Fut + Send + 'a,
        Fut: Future<Output = R> + Send + 'a,
    {
        let inner = self.inner;
        chained(async move {
            match inner.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(error) => f(error).await.into_outcome(),
            }
        })
    }

    /// Observe the failure once settled.
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'a,
    {
        let inner = self.inner;
        chained(async move { inner.await.tap_err(f) })
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Handle both branches once settled.
    pub fn match_with<R, OkFn, ErrFn>(
        self,
        on_ok: OkFn,
        on_err: ErrFn,
    ) -> impl Future<Output = R> + 'a
    where
        OkFn: FnOnce(V) -> R + 'a,
        ErrFn: FnOnce(E) -> R + 'a,
    {
        let inner = self.inner;
        async move { inner.await.match_with(on_ok, on_err) }
    }

    /// Handle both branches with async callbacks once settled.
    pub fn match_async<R, OkFn, ErrFn, OkFut, ErrFut>(
        self,
        on_ok: OkFn,
        on_err: ErrFn,
    ) -> impl Future<Output = R> + 'a
    where
        OkFn: FnOnce(V) -> OkFut + 'a,
        ErrFn: FnOnce(E) -> ErrFut + 'a,
        OkFut: Future<Output = R> + 'a,
        ErrFut: Future<Output = R> + 'a,
    {
        let inner = self.inner;
        async move {
            match inner.await {
                Outcome::Ok(value) => on_ok(value).await,
                Outcome::Err(error) => on_err(error).await,
            }
        }
    }

    /// The success value, or an [`UnwrapError`] holding the failure.
    ///
    /// Unlike [`Outcome::unwrap`] this never panics: the failure is the
    /// future's output.
    pub fn unwrap_async(self) -> impl Future<Output = Result<V, UnwrapError<E>>> + 'a {
        let inner = self.inner;
        async move { inner.await.try_unwrap() }
    }

    /// The success value, or one computed from the failure.
    pub fn unwrap_or_else<F>(self, f: F) -> impl Future<Output = V> + 'a
    where
        F: FnOnce(E) -> V + 'a,
    {
        let inner = self.inner;
        async move { inner.await.unwrap_or_else(f) }
    }

    /// The success value, or one computed asynchronously from the failure.
    pub fn unwrap_or_async<F, Fut>(self, f: F) -> impl Future<Output = V> + 'a
    where
        F: FnOnce(E) -> Fut + 'a,
        Fut: Future<Output = V> + 'a,
    {
        let inner = self.inner;
        async move {
            match inner.await {
                Outcome::Ok(value) => value,
                Outcome::Err(error) => f(error).await,
            }
        }
    }
}

impl<'a, V, E> IntoFuture for AsyncOutcome<'a, V, E> {
    type Output = Outcome<V, E>;
    type IntoFuture = BoxFuture<'a, Outcome<V, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<V, E> std::fmt::Debug for AsyncOutcome<'_, V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}

/// Cloneable view over one [`AsyncOutcome`].
///
/// All clones observe the same settled outcome and the underlying future is
/// only ever driven once.
#[must_use = "a `SharedOutcome` does nothing unless awaited"]
pub struct SharedOutcome<'a, V, E> {
    inner: Shared<BoxFuture<'a, Outcome<V, E>>>,
}

impl<V, E> Clone for SharedOutcome<'_, V, E>
where
    V: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V, E> SharedOutcome<'a, V, E>
where
    V: Clone + 'a,
    E: Clone + 'a,
{
    /// The settled outcome, driving the shared future if nobody has yet.
    pub fn resolve(&self) -> Shared<BoxFuture<'a, Outcome<V, E>>> {
        self.inner.clone()
    }

    /// A fresh [`AsyncOutcome`] chain over the shared outcome.
    ///
    /// The shared output is handed between tasks, hence `Sync`.
    pub fn to_async(&self) -> AsyncOutcome<'a, V, E>
    where
        V: Send + Sync,
        E: Send + Sync,
    {
        AsyncOutcome::new(self.inner.clone())
    }

    /// The outcome if some clone already drove the future to completion.
    pub fn peek(&self) -> Option<&Outcome<V, E>> {
        self.inner.peek()
    }
}

impl<'a, V, E> IntoFuture for SharedOutcome<'a, V, E>
where
    V: Clone,
    E: Clone,
{
    type Output = Outcome<V, E>;
    type IntoFuture = Shared<BoxFuture<'a, Outcome<V, E>>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<V, E> std::fmt::Debug for SharedOutcome<'_, V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOutcome").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{err, ok};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_ready_resolves_immediately() {
        let outcome = AsyncOutcome::<i32, &str>::ready(ok(1)).resolve().await;
        assert_eq!(outcome, ok(1));
    }

    #[tokio::test]
    async fn test_await_through_into_future() {
        let outcome = AsyncOutcome::<i32, &str>::ready(err("bad")).await;
        assert_eq!(outcome, err("bad"));
    }

    #[tokio::test]
    async fn test_new_accepts_std_result_future() {
        let outcome: Outcome<i32, String> =
            AsyncOutcome::new(async { Ok::<_, String>(3) }).await;
        assert_eq!(outcome, ok(3));
    }

    #[tokio::test]
    async fn test_map_async_skips_err() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let outcome = AsyncOutcome::<i32, &str>::ready(err("bad"))
            .map_async(move |v| {
                counter.fetch_add(1, Ordering::SeqCst);
                async move { v + 1 }
            })
            .await;

        assert_eq!(outcome, err("bad"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_steps_run_in_chain_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let (first, second, third) = (Arc::clone(&order), Arc::clone(&order), Arc::clone(&order));

        let outcome = AsyncOutcome::<i32, String>::ready(ok(1))
            .map_async(move |v| async move {
                tokio::task::yield_now().await;
                first.lock().unwrap().push("first");
                v + 1
            })
            .tap(move |_| second.lock().unwrap().push("second"))
            .and_then_async(move |v| async move {
                third.lock().unwrap().push("third");
                ok::<_, String>(v * 10)
            })
            .await;

        assert_eq!(outcome, ok(20));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_map_err_and_tap_err_touch_only_failures() {
        let seen = Arc::new(AtomicUsize::new(0));
        let on_err = Arc::clone(&seen);
        let on_ok = Arc::clone(&seen);

        let outcome = AsyncOutcome::<i32, &str>::ready(err("bad"))
            .tap(move |_| {
                on_ok.fetch_add(100, Ordering::SeqCst);
            })
            .tap_err(move |e| {
                on_err.fetch_add(e.len(), Ordering::SeqCst);
            })
            .map_err(str::len)
            .await;

        assert_eq!(outcome, err(3));
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_map_err_and_tap_err_leave_ok_alone() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let outcome = AsyncOutcome::<i32, &str>::ready(ok(5))
            .tap_err(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .map_err(str::len)
            .await;

        assert_eq!(outcome, ok(5));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_catch_async_recovers() {
        let outcome = AsyncOutcome::<String, &str>::ready(err("bad"))
            .catch_async(|e| async move { format!("recovered from {e}") })
            .await;
        assert_eq!(outcome, ok("recovered from bad".to_string()));
    }

    #[tokio::test]
    async fn test_or_else_async_can_fail_again() {
        let outcome = AsyncOutcome::<i32, &str>::ready(err("bad"))
            .or_else_async(|e| async move { err::<i32, _>(e.len()) })
            .await;
        assert_eq!(outcome, err(3));
    }

    #[tokio::test]
    async fn test_match_async_runs_one_branch() {
        let value = AsyncOutcome::<i32, &str>::ready(ok(1))
            .match_async(|v| async move { v + 1 }, |_| async { 0 })
            .await;
        assert_eq!(value, 2);
    }

    #[tokio::test]
    async fn test_shared_drives_source_once() {
        let polls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&polls);

        let shared = AsyncOutcome::<i32, String>::new(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            ok::<_, String>(7)
        })
        .shared();

        let first = shared.clone();
        assert!(shared.peek().is_none());
        assert_eq!(first.resolve().await, ok(7));
        assert_eq!(shared.peek(), Some(&ok(7)));
        assert_eq!(shared.to_async().map(|v| v * 2).await, ok(14));
        assert_eq!(shared.await, ok(7));
        assert_eq!(polls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_peek_works_for_non_sync_values() {
        use std::cell::Cell;

        let shared = AsyncOutcome::<Cell<i32>, ()>::ready(ok(Cell::new(1))).shared();
        assert!(shared.peek().is_none());

        let settled = shared.clone().resolve().await;
        assert_eq!(settled, ok(Cell::new(1)));
        assert_eq!(shared.peek(), Some(&ok(Cell::new(1))));
    }
}
