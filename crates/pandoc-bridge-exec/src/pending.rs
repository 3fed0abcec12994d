//! The value returned by facade calls in either execution mode.

use std::fmt;
use std::future::IntoFuture;

use futures::future::{self, BoxFuture, FutureExt};

use crate::Result;

/// Outcome of a facade call.
///
/// A blocking facade hands back an already settled result. An async facade
/// hands back a future that has not started yet; pandoc is only spawned once
/// it is awaited. Both forms can be `.await`ed, and both can be settled on
/// the calling thread with [`Pending::wait`].
pub enum Pending<T> {
    Ready(Result<T>),
    Deferred(BoxFuture<'static, Result<T>>),
}

impl<T: Send + 'static> Pending<T> {
    /// Wrap an unstarted future.
    pub fn deferred(fut: impl std::future::Future<Output = Result<T>> + Send + 'static) -> Self {
        Pending::Deferred(fut.boxed())
    }

    /// Whether the result is already available without running anything.
    pub fn is_ready(&self) -> bool {
        matches!(self, Pending::Ready(_))
    }

    /// Settle on the calling thread.
    ///
    /// A deferred value is driven on a fresh current-thread tokio runtime,
    /// so this must not be called from inside a runtime.
    pub fn wait(self) -> Result<T> {
        match self {
            Pending::Ready(result) => result,
            Pending::Deferred(fut) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(fut),
        }
    }

    /// Transform the successful value without settling.
    pub fn map<U, F>(self, f: F) -> Pending<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self {
            Pending::Ready(result) => Pending::Ready(result.map(f)),
            Pending::Deferred(fut) => Pending::Deferred(fut.map(|r| r.map(f)).boxed()),
        }
    }
}

impl<T: Send + 'static> IntoFuture for Pending<T> {
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'static, Result<T>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Pending::Ready(result) => future::ready(result).boxed(),
            Pending::Deferred(fut) => fut,
        }
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pending::Ready(Ok(_)) => f.write_str("Ready(Ok(..))"),
            Pending::Ready(Err(err)) => f.debug_tuple("Ready").field(&Err::<(), _>(err)).finish(),
            Pending::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
