//! The success/failure container returned by every remote call.

use crate::error::{Result, SketchwareError};

/// Outcome of exactly one remote call.
///
/// Every endpoint method resolves to an `Outcome` instead of returning an
/// error: transport failures, status errors and schema mismatches are all
/// captured in [`Outcome::Failure`].
///
/// # Example
///
/// ```no_run
/// use sketchware_api::{CollectionKind, SketchwareClient};
///
/// # async fn example() -> sketchware_api::Result<()> {
/// let client = SketchwareClient::default_client()?;
/// client
///     .shared()
///     .recent(CollectionKind::View, 10, 0)
///     .await
///     .on_success(|views| println!("{} views", views.len()))
///     .on_error(|err| eprintln!("listing failed: {err}"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use = "an Outcome may be a Failure which should be inspected"]
pub enum Outcome<T> {
    /// The call completed and its body decoded.
    Success(T),
    /// The call failed; the cause is preserved as raised.
    Failure(SketchwareError),
}

impl<T> Outcome<T> {
    /// Run `handler` with the value if this is a success.
    pub fn on_success<F: FnOnce(&T)>(&self, handler: F) -> &Self {
        if let Self::Success(value) = self {
            handler(value);
        }
        self
    }

    /// Run `handler` with the cause if this is a failure.
    pub fn on_error<F: FnOnce(&SketchwareError)>(&self, handler: F) -> &Self {
        if let Self::Failure(cause) = self {
            handler(cause);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure cause, if any.
    pub fn failure(&self) -> Option<&SketchwareError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Transform the success value, keeping a failure as is.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Convert into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<T> {
        self.into()
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(cause),
        }
    }
}
