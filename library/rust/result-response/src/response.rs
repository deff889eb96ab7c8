//! Conversion of accumulated-failure results into HTTP responses.
//!
//! A failed [`Outcome`] may carry errors of mixed severity. The response status
//! is the most severe code found among the errors' reasons (see
//! [`SEVERITY_ORDER`](crate::severity::SEVERITY_ORDER)), and the errors are
//! reordered band by band, most severe first. Errors without a status code
//! are appended last.

use http::StatusCode;

use crate::options::{DuplicatePolicy, ResolutionOptions, UnrecognizedPolicy};
use crate::result::{Error, Outcome, Reason};
use crate::severity::{SeverityTable, DEFAULT_STATUS, SUCCESS_STATUS};

/// Resolution is the selected status and the reordered error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: StatusCode,
    pub errors: Vec<Error>,
}

/// Resolve the response status and error order with default options.
pub fn resolve(errors: &[Error]) -> Resolution {
    resolve_with(errors, &ResolutionOptions::default())
}

/// Resolve the response status and error order.
///
/// 1. Walk the severity table; every error with a reason equal to the current
///    code joins that band, in input order. The first non-empty band sets the
///    status (400 if none).
/// 2. Append errors with zero reasons or a reason without a message.
///
/// Errors whose reasons are all set but unrecognized are dropped unless
/// [`UnrecognizedPolicy::AppendLast`] is selected.
pub fn resolve_with(errors: &[Error], options: &ResolutionOptions) -> Resolution {
    let table = SeverityTable::default();
    let dedupe = options.duplicates == DuplicatePolicy::HighestOnly;

    let mut status = DEFAULT_STATUS;
    let mut ordered: Vec<Error> = Vec::with_capacity(errors.len());
    let mut emitted = vec![false; errors.len()];

    for code in table.iter() {
        let band: Vec<Error> = errors
            .iter()
            .zip(emitted.iter_mut())
            .filter_map(|(error, seen)| {
                if !error.has_reason_message(code.as_str()) || (dedupe && *seen) {
                    return None;
                }
                *seen = true;
                Some(error.clone())
            })
            .collect();

        if band.is_empty() {
            continue;
        }
        if ordered.is_empty() {
            status = code;
        }
        ordered.extend(band);
    }

    let mut dropped = 0usize;
    for (error, seen) in errors.iter().zip(&emitted) {
        if error.lacks_status_code() {
            if dedupe && *seen {
                continue;
            }
            ordered.push(error.clone());
        } else if !table.recognizes(error) {
            match options.unrecognized {
                UnrecognizedPolicy::AppendLast => ordered.push(error.clone()),
                UnrecognizedPolicy::Drop => {
                    dropped += 1;
                    tracing::warn!(
                        error = %error,
                        "dropping error without a recognized status code"
                    );
                }
            }
        }
    }

    tracing::debug!(
        status = status.as_u16(),
        input = errors.len(),
        output = ordered.len(),
        dropped,
        "resolved response status"
    );

    Resolution {
        status,
        errors: ordered,
    }
}

/// Build the `(status, result)` pair for an HTTP handler with default options.
///
/// A result without errors is returned unchanged with 200.
pub fn build_result_response<T>(result: Outcome<T>) -> (StatusCode, Outcome<T>) {
    build_result_response_with(result, &ResolutionOptions::default())
}

pub fn build_result_response_with<T>(
    result: Outcome<T>,
    options: &ResolutionOptions,
) -> (StatusCode, Outcome<T>) {
    if !result.has_errors() {
        return (SUCCESS_STATUS, result);
    }

    let Resolution { status, errors } = resolve_with(result.errors(), options);
    (status, Outcome::Failed(errors))
}

/// Method-style access to [`build_result_response`].
pub trait ResultResponseExt<T> {
    fn build_result_response(self) -> (StatusCode, Outcome<T>);

    fn build_result_response_with(self, options: &ResolutionOptions) -> (StatusCode, Outcome<T>);
}

impl<T> ResultResponseExt<T> for Outcome<T> {
    fn build_result_response(self) -> (StatusCode, Outcome<T>) {
        build_result_response(self)
    }

    fn build_result_response_with(self, options: &ResolutionOptions) -> (StatusCode, Outcome<T>) {
        build_result_response_with(self, options)
    }
}

/// Create the `(200, Ok(()))` pair.
pub fn build_ok() -> (StatusCode, Outcome) {
    (SUCCESS_STATUS, Outcome::ok(()))
}

/// Create an error with an empty message and a single "404" reason.
pub fn not_found_error() -> Error {
    Error::new(String::new()).with_reason(Reason::status(StatusCode::NOT_FOUND))
}

/// Create a failed outcome holding [`not_found_error`].
pub fn not_found<T>() -> Outcome<T> {
    Outcome::fail(not_found_error())
}

pub fn bad_request_error(message: impl Into<String>) -> Error {
    Error::new(message).with_reason(Reason::status(StatusCode::BAD_REQUEST))
}

pub fn internal_server_error(message: impl Into<String>) -> Error {
    Error::new(message).with_reason(Reason::status(StatusCode::INTERNAL_SERVER_ERROR))
}

/// Create an error with a single reason; `None` yields a reason without a message.
pub fn build_error(message: impl Into<String>, status_code: Option<StatusCode>) -> Error {
    let reason = status_code.map_or_else(Reason::empty, Reason::status);
    Error::new(message).with_reason(reason)
}

/// ResultResponse is a resolved status paired with the result to serialize.
///
/// When the `axum` feature is enabled, ResultResponse implements `IntoResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultResponse<T = ()> {
    pub status: StatusCode,
    pub result: Outcome<T>,
}

impl<T> ResultResponse<T> {
    pub fn from_outcome(result: Outcome<T>) -> Self {
        build_result_response(result).into()
    }

    pub fn from_outcome_with(result: Outcome<T>, options: &ResolutionOptions) -> Self {
        build_result_response_with(result, options).into()
    }
}

impl<T> From<(StatusCode, Outcome<T>)> for ResultResponse<T> {
    fn from((status, result): (StatusCode, Outcome<T>)) -> Self {
        Self { status, result }
    }
}

impl<T> From<Outcome<T>> for ResultResponse<T> {
    fn from(result: Outcome<T>) -> Self {
        Self::from_outcome(result)
    }
}

// --- axum integration ---

#[cfg(feature = "axum")]
impl<T: serde::Serialize> axum::response::IntoResponse for ResultResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, axum::Json(self.result)).into_response()
    }
}
