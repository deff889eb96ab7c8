//! k1s0-result-response: HTTP responses for accumulated-failure results.
//!
//! Picks a single HTTP status for a failed [`Outcome`] from a fixed severity
//! table, reorders its errors by severity band, and optionally turns the pair
//! into an axum response.

pub mod options;
pub mod response;
pub mod result;
pub mod severity;

pub use options::{ConfigError, DuplicatePolicy, ResolutionOptions, UnrecognizedPolicy};
pub use response::{
    bad_request_error, build_error, build_ok, build_result_response, build_result_response_with,
    internal_server_error, not_found, not_found_error, resolve, resolve_with, Resolution,
    ResultResponse, ResultResponseExt,
};
pub use result::{Error, Outcome, Reason};
pub use severity::{SeverityTable, DEFAULT_STATUS, SEVERITY_ORDER, SUCCESS_STATUS};
