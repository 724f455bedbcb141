//! Error types for migration runs
//!
//! Three disjoint failure kinds, all unrecoverable from the runner's
//! perspective: the first failure aborts the run and no partial state is
//! returned.

use vershift_schema::Issue;

/// Chain well-formedness failures
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The step sequence is empty
    #[error("migration chain is empty")]
    EmptyChain,

    /// Adjacent steps violate strict ascending order (covers duplicates)
    #[error("migration versions must be strictly ascending: found {prev} before {next}")]
    NotAscending {
        /// Version of the earlier step in the offending pair
        prev: u64,
        /// Version of the later step in the offending pair
        next: u64,
    },
}

/// A step's transformation failed
#[derive(Debug, thiserror::Error)]
#[error("migration to version {version} failed: {source}")]
pub struct MigrationError {
    version: u64,
    #[source]
    source: anyhow::Error,
}

impl MigrationError {
    /// Wrap a transformation failure for `version`
    #[must_use]
    pub fn new(version: u64, source: anyhow::Error) -> Self {
        Self { version, source }
    }

    /// Version of the failing step
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The underlying cause
    #[must_use]
    pub fn cause(&self) -> &anyhow::Error {
        &self.source
    }
}

/// A step's output failed schema validation
#[derive(Debug, thiserror::Error)]
#[error("validation failed for version {}: {}", .version, issue_summary(.issues))]
pub struct ValidationError {
    version: u64,
    issues: Vec<Issue>,
}

impl ValidationError {
    /// Record a validation failure for `version`
    #[must_use]
    pub fn new(version: u64, issues: Vec<Issue>) -> Self {
        Self { version, issues }
    }

    /// Version of the failing step
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Every issue the validator reported
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

fn issue_summary(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Combined migration run error
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Chain well-formedness failure
    #[error("version error: {0}")]
    Version(#[from] VersionError),

    /// Transformation failure
    #[error("migration error: {0}")]
    Migration(#[from] MigrationError),

    /// Schema validation failure
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_error_display() {
        let err = VersionError::NotAscending { prev: 2, next: 1 };
        assert_eq!(
            err.to_string(),
            "migration versions must be strictly ascending: found 2 before 1"
        );
    }

    #[test]
    fn migration_error_preserves_cause_message() {
        let err = MigrationError::new(3, anyhow::anyhow!("state corrupted"));
        assert_eq!(err.version(), 3);
        assert!(err.to_string().contains("state corrupted"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn validation_error_summarises_issues() {
        let err = ValidationError::new(
            2,
            vec![Issue::new("too short"), Issue::new("missing field")],
        );
        assert_eq!(err.version(), 2);
        assert_eq!(err.issues().len(), 2);
        assert_eq!(
            err.to_string(),
            "validation failed for version 2: too short, missing field"
        );
    }

    #[test]
    fn error_conversions() {
        let err: MigrateError = VersionError::EmptyChain.into();
        assert!(matches!(err, MigrateError::Version(_)));

        let err: MigrateError = MigrationError::new(1, anyhow::anyhow!("boom")).into();
        assert!(matches!(err, MigrateError::Migration(_)));

        let err: MigrateError = ValidationError::new(1, vec![]).into();
        assert!(matches!(err, MigrateError::Validation(_)));
    }
}
