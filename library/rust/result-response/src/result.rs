//! Accumulated-failure result model.
//!
//! An [`Outcome`] is either a success carrying a payload or a failure carrying
//! every [`Error`] collected along the way. Each error holds zero or more
//! [`Reason`]s; by convention a reason message is the string form of an HTTP
//! status code (`"404"`), a free-form diagnostic, or absent.

use http::StatusCode;
use serde::Serialize;

/// Reason is a sub-error attached to an [`Error`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reason {
    pub message: Option<String>,
}

impl Reason {
    /// Create a reason with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Create a reason without a message.
    ///
    /// An error carrying one of these is treated as having no status code.
    pub fn empty() -> Self {
        Self { message: None }
    }

    /// Create a reason encoding an HTTP status code, e.g. `"404"`.
    pub fn status(code: StatusCode) -> Self {
        Self::new(code.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Error is a named failure carried inside a failed [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub message: String,
    pub reasons: Vec<Reason>,
}

impl Error {
    /// Create an error with no reasons.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reasons: Vec::new(),
        }
    }

    /// Attach a reason.
    #[must_use]
    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.reasons.push(reason);
        self
    }

    /// Attach a reason built from a message.
    #[must_use]
    pub fn caused_by(self, message: impl Into<String>) -> Self {
        self.with_reason(Reason::new(message))
    }

    /// Whether any reason carries exactly `message`.
    pub fn has_reason_message(&self, message: &str) -> bool {
        self.reasons.iter().any(|r| r.message() == Some(message))
    }

    /// Whether the error has zero reasons or at least one reason without a message.
    pub fn lacks_status_code(&self) -> bool {
        self.reasons.is_empty() || self.reasons.iter().any(|r| r.message.is_none())
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Outcome is either a success payload or the ordered list of accumulated errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Ok(T),
    Failed(Vec<Error>),
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Create a failed outcome holding a single error.
    pub fn fail(error: impl Into<Error>) -> Self {
        Self::Failed(vec![error.into()])
    }

    pub fn fail_many(errors: impl IntoIterator<Item = Error>) -> Self {
        Self::Failed(errors.into_iter().collect())
    }

    /// Errors carried by this outcome; empty on success.
    pub fn errors(&self) -> &[Error] {
        match self {
            Self::Ok(_) => &[],
            Self::Failed(errors) => errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Accumulate an error. A success turns into a failure and drops its payload.
    #[must_use]
    pub fn with_error(self, error: impl Into<Error>) -> Self {
        match self {
            Self::Ok(_) => Self::fail(error),
            Self::Failed(mut errors) => {
                errors.push(error.into());
                Self::Failed(errors)
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Failed(errors) => Outcome::Failed(errors),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::fail(err),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Body<'a, T> {
            is_success: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            value: Option<&'a T>,
            errors: &'a [Error],
        }

        Body {
            is_success: !self.has_errors(),
            value: self.value(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}
