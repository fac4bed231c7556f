use thiserror::Error;

/// Root domain error type.
///
/// Every variant is fatal to the current generation run: validation is
/// applied in order and the first failure aborts before any cleanup runs.
/// Messages carry the offending value and the rule it violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The project name is not a lowercase identifier.
    #[error(
        "invalid project name '{name}': must be a valid lowercase identifier \
         (no spaces or special characters, must not start with a digit)"
    )]
    InvalidName { name: String },

    /// The project name collides with a keyword of the target runtime.
    #[error("project name '{name}' is a reserved Python keyword")]
    ReservedName { name: String },

    /// The runtime version lies outside the supported range, or is not a
    /// dotted numeric version at all.
    #[error("python version '{version}' is not supported (supported: {min} to {max})")]
    UnsupportedVersion {
        version: String,
        min: &'static str,
        max: &'static str,
    },

    /// The structural-variant selector is not one of the closed set.
    #[error("unknown project structure '{value}' (expected 'simple' or 'advanced')")]
    InvalidVariant { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name } => vec![
                format!("'{}' cannot be used as a package name", name),
                "Use only lowercase letters, digits, and underscores".into(),
                "Start with a letter or underscore, not a digit".into(),
                "Examples: my_app, backend, worker2".into(),
            ],
            Self::ReservedName { name } => vec![
                format!("'{}' is a Python keyword and would cause syntax errors", name),
                "Pick a different name, or suffix it: e.g. class_ -> classifier".into(),
            ],
            Self::UnsupportedVersion { min, max, .. } => vec![
                format!("Choose a Python version between {} and {} (inclusive)", min, max),
                "These are the versions that still receive support".into(),
                "See https://devguide.python.org/versions/".into(),
            ],
            Self::InvalidVariant { .. } => vec![
                "Valid project structures:".into(),
                "  • simple   - minimal layout".into(),
                "  • advanced - full layout with CI, docs, and containers".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        // Every domain rule is an input-validation rule.
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
