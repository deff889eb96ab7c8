//! Fixed severity ranking of HTTP status codes.
//!
//! When a failed result carries errors of different severities, the first
//! entry of [`SEVERITY_ORDER`] that any error matches becomes the response
//! status.

use http::StatusCode;

use crate::result::Error;

/// Status codes ordered from most to least severe.
pub const SEVERITY_ORDER: [StatusCode; 7] = [
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::BAD_REQUEST,
    StatusCode::NOT_FOUND,
    StatusCode::FORBIDDEN,
    StatusCode::UNAUTHORIZED,
];

/// Status returned when no error matches the table.
pub const DEFAULT_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Status returned for results without errors.
pub const SUCCESS_STATUS: StatusCode = StatusCode::OK;

/// SeverityTable is a read-only view over an ordered list of status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityTable {
    codes: &'static [StatusCode],
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self {
            codes: &SEVERITY_ORDER,
        }
    }
}

impl SeverityTable {
    /// Iterate codes from most to least severe.
    pub fn iter(&self) -> impl Iterator<Item = StatusCode> + '_ {
        self.codes.iter().copied()
    }

    /// Position of a reason message in the table, 0 being the most severe.
    pub fn rank(&self, message: &str) -> Option<usize> {
        self.codes.iter().position(|code| code.as_str() == message)
    }

    /// Whether a reason message names a code in the table.
    pub fn contains(&self, message: &str) -> bool {
        self.rank(message).is_some()
    }

    /// Most severe code among the error's reasons.
    pub fn matching(&self, error: &Error) -> Option<StatusCode> {
        self.iter()
            .find(|code| error.has_reason_message(code.as_str()))
    }

    /// Whether any of the error's reasons names a code in the table.
    pub fn recognizes(&self, error: &Error) -> bool {
        self.matching(error).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Reason;

    #[test]
    fn test_default_table_order() {
        let codes: Vec<u16> = SeverityTable::default().iter().map(|c| c.as_u16()).collect();
        assert_eq!(codes, vec![503, 500, 429, 400, 404, 403, 401]);
    }

    #[test]
    fn test_rank() {
        let table = SeverityTable::default();
        assert_eq!(table.rank("503"), Some(0));
        assert_eq!(table.rank("401"), Some(6));
        assert_eq!(table.rank("418"), None);
        assert!(!table.contains("teapot"));
    }

    #[test]
    fn test_matching_picks_most_severe() {
        let table = SeverityTable::default();
        let err = Error::new("multi")
            .caused_by("404")
            .caused_by("500")
            .with_reason(Reason::empty());
        assert_eq!(table.matching(&err), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_matching_unrecognized() {
        let table = SeverityTable::default();
        let err = Error::new("teapot").caused_by("teapot");
        assert_eq!(table.matching(&err), None);
        assert!(!table.recognizes(&err));
    }
}
