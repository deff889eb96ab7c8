//! Resolution options and their YAML loading.
//!
//! The defaults keep the plain severity-band ordering; the policies opt in to
//! collapsing duplicate emissions and keeping errors with unrecognized reasons.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
}

/// How an error matching several severity bands is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Once per matching band.
    #[default]
    Repeat,
    /// Once, in its most severe band.
    HighestOnly,
}

/// What happens to errors whose reasons are all set but match no severity band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    #[default]
    Drop,
    /// Keep them in the trailing bucket with errors lacking a status code.
    AppendLast,
}

/// Options for status resolution. The defaults reproduce the plain ordering rules.
///
/// ```yaml
/// duplicates: highest_only
/// unrecognized: append_last
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolutionOptions {
    pub duplicates: DuplicatePolicy,
    pub unrecognized: UnrecognizedPolicy,
}

impl ResolutionOptions {
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    #[must_use]
    pub fn with_unrecognized(mut self, unrecognized: UnrecognizedPolicy) -> Self {
        self.unrecognized = unrecognized;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a YAML file into ResolutionOptions.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let options = ResolutionOptions::default();
        assert_eq!(options.duplicates, DuplicatePolicy::Repeat);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::Drop);
    }

    #[test]
    fn test_from_yaml_str() {
        let options =
            ResolutionOptions::from_yaml_str("duplicates: highest_only\nunrecognized: append_last\n")
                .unwrap();
        assert_eq!(options.duplicates, DuplicatePolicy::HighestOnly);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::AppendLast);
    }

    #[test]
    fn test_from_yaml_str_partial() {
        let options = ResolutionOptions::from_yaml_str("unrecognized: append_last").unwrap();
        assert_eq!(options.duplicates, DuplicatePolicy::Repeat);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::AppendLast);
    }

    #[test]
    fn test_from_yaml_str_unknown_variant() {
        let result = ResolutionOptions::from_yaml_str("duplicates: sometimes");
        assert!(matches!(result, Err(ConfigError::ParseYaml(_))));
    }

    #[test]
    fn test_load() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "duplicates: highest_only").unwrap();
        let options = ResolutionOptions::load(f.path().to_str().unwrap()).unwrap();
        assert_eq!(options.duplicates, DuplicatePolicy::HighestOnly);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::Drop);
    }

    #[test]
    fn test_load_file_not_found() {
        let result = ResolutionOptions::load("/nonexistent/resolution.yaml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("failed to read file"));
    }

    #[test]
    fn test_builder_setters() {
        let options = ResolutionOptions::default()
            .with_duplicates(DuplicatePolicy::HighestOnly)
            .with_unrecognized(UnrecognizedPolicy::AppendLast);
        assert_eq!(options.duplicates, DuplicatePolicy::HighestOnly);
        assert_eq!(options.unrecognized, UnrecognizedPolicy::AppendLast);
    }
}
