//! Callback adapter for callers that do not drive futures themselves.
//!
//! [`CallbackClient`] runs a call on a tokio runtime and forwards the already
//! resolved [`Outcome`] to a [`ResponseCallback`]. It performs no error
//! handling of its own.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::client::SketchwareClient;
use crate::error::{Result, SketchwareError};
use crate::outcome::Outcome;

/// Push-style receiver of a call's outcome.
///
/// Both methods consume the callback, so exactly one of them runs, once.
pub trait ResponseCallback<T> {
    fn on_success(self, value: T);
    fn on_error(self, cause: SketchwareError);
}

/// A [`ResponseCallback`] made of two closures.
pub struct FnCallback<S, E> {
    on_success: S,
    on_error: E,
}

/// Build a callback from a success and an error closure.
pub fn callback<T, S, E>(on_success: S, on_error: E) -> FnCallback<S, E>
where
    S: FnOnce(T),
    E: FnOnce(SketchwareError),
{
    FnCallback {
        on_success,
        on_error,
    }
}

impl<T, S, E> ResponseCallback<T> for FnCallback<S, E>
where
    S: FnOnce(T),
    E: FnOnce(SketchwareError),
{
    fn on_success(self, value: T) {
        (self.on_success)(value);
    }

    fn on_error(self, cause: SketchwareError) {
        (self.on_error)(cause);
    }
}

impl<T> Outcome<T> {
    /// Hand the outcome to `callback`.
    pub fn deliver<C: ResponseCallback<T>>(self, callback: C) {
        match self {
            Self::Success(value) => callback.on_success(value),
            Self::Failure(cause) => callback.on_error(cause),
        }
    }
}

/// Runs client calls in the background and reports through callbacks.
#[derive(Debug, Clone)]
pub struct CallbackClient {
    client: SketchwareClient,
    runtime: Handle,
}

impl CallbackClient {
    /// Wrap `client`, spawning calls on `runtime`.
    pub fn new(client: SketchwareClient, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Wrap `client`, spawning calls on the runtime of the current context.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn current(client: SketchwareClient) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| SketchwareError::Config(format!("no tokio runtime: {e}")))?;
        Ok(Self::new(client, runtime))
    }

    pub fn client(&self) -> &SketchwareClient {
        &self.client
    }

    /// Run `call` against the client and deliver its outcome to `callback`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sketchware_api::{callback, CallbackClient, CollectionKind, SketchwareClient};
    ///
    /// # async fn example() -> sketchware_api::Result<()> {
    /// let adapter = CallbackClient::current(SketchwareClient::default_client()?)?;
    /// adapter.call(
    ///     |client| async move { client.shared().recent(CollectionKind::Block, 10, 0).await },
    ///     callback(
    ///         |blocks: Vec<sketchware_api::SharedItem>| println!("{} blocks", blocks.len()),
    ///         |err| eprintln!("failed: {err}"),
    ///     ),
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn call<T, F, Fut, C>(&self, call: F, callback: C) -> JoinHandle<()>
    where
        F: FnOnce(SketchwareClient) -> Fut,
        Fut: Future<Output = Outcome<T>> + Send + 'static,
        C: ResponseCallback<T> + Send + 'static,
        T: Send + 'static,
    {
        self.spawn(call(self.client.clone()), callback)
    }

    /// Drive `future` on the runtime and deliver its outcome to `callback`.
    pub fn spawn<T, Fut, C>(&self, future: Fut, callback: C) -> JoinHandle<()>
    where
        Fut: Future<Output = Outcome<T>> + Send + 'static,
        C: ResponseCallback<T> + Send + 'static,
        T: Send + 'static,
    {
        self.runtime.spawn(async move {
            future.await.deliver(callback);
        })
    }
}
