//! Scoped, single-use access to a database session.

use async_trait::async_trait;
use futures::future::BoxFuture;

use schemalens_core::Result;

/// An open database session that must be released exactly once.
#[async_trait]
pub trait Session: Send + Sized {
    /// Release the session, consuming it.
    async fn close(self) -> Result<()>;
}

/// Run `run` against `session`, then close the session.
///
/// The session is closed exactly once on both the success and the failure
/// path, before the outcome is returned. A failure from `run` takes priority
/// over a failure to close.
pub async fn scoped<S, T, F>(mut session: S, run: F) -> Result<T>
where
    S: Session,
    T: Send,
    F: for<'s> FnOnce(&'s mut S) -> BoxFuture<'s, Result<T>> + Send,
{
    let outcome = run(&mut session).await;
    let closed = session.close().await;
    tracing::debug!(success = outcome.is_ok(), "session closed");

    match outcome {
        Ok(value) => closed.map(|()| value),
        Err(err) => Err(err),
    }
}
