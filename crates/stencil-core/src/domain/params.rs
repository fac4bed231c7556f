//! Generation parameters: the three values the template engine substitutes
//! and hands to the post-generation hook.
//!
//! # Design
//!
//! `GenerationParams` is a read-only snapshot for a single generation run.
//! Validation lives here, applied in a fixed order with first-failure-wins
//! semantics:
//!
//! 1. name well-formedness (lowercase identifier)
//! 2. reserved-word collision
//! 3. runtime version inside the supported range

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{error::DomainError, keywords, version::PyVersion};

/// Oldest supported Python version (inclusive).
pub const MIN_PYTHON: &str = "3.10";
/// Newest supported Python version (inclusive).
pub const MAX_PYTHON: &str = "3.13";

// ── StructureVariant ─────────────────────────────────────────────────────────

/// Structural variant of the generated project.
///
/// Closed set: the selector decides which optional directories the generated
/// project keeps. `Simple` triggers the post-generation cleanup sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureVariant {
    Simple,
    Advanced,
}

impl StructureVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for StructureVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "advanced" => Ok(Self::Advanced),
            other => Err(DomainError::InvalidVariant {
                value: other.to_string(),
            }),
        }
    }
}

// ── GenerationParams ─────────────────────────────────────────────────────────

/// The substituted template variables for one generation run.
///
/// Values are fixed strings by the time the hook sees them; this type treats
/// them as read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub project_name: String,
    pub python_version: String,
    pub structure: StructureVariant,
}

impl GenerationParams {
    pub fn new(
        project_name: impl Into<String>,
        python_version: impl Into<String>,
        structure: StructureVariant,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            python_version: python_version.into(),
            structure,
        }
    }

    /// Validate all parameters, in order. The first rule that fails wins and
    /// no further checks run.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_lowercase_identifier(&self.project_name) {
            return Err(DomainError::InvalidName {
                name: self.project_name.clone(),
            });
        }

        if keywords::is_reserved(&self.project_name) {
            return Err(DomainError::ReservedName {
                name: self.project_name.clone(),
            });
        }

        self.validate_python_version()?;
        Ok(())
    }

    fn validate_python_version(&self) -> Result<(), DomainError> {
        let unsupported = || DomainError::UnsupportedVersion {
            version: self.python_version.clone(),
            min: MIN_PYTHON,
            max: MAX_PYTHON,
        };

        // A malformed version string is just as unsupported as an
        // out-of-range one.
        let version = PyVersion::parse(&self.python_version).ok_or_else(unsupported)?;

        // The range bounds are compile-time constants and always parse.
        let min = PyVersion::parse(MIN_PYTHON).expect("MIN_PYTHON is a valid version");
        let max = PyVersion::parse(MAX_PYTHON).expect("MAX_PYTHON is a valid version");

        if version < min || version > max {
            return Err(unsupported());
        }
        Ok(())
    }
}

/// Identifier rule of the target ecosystem, restricted to ASCII, combined
/// with the all-lowercase rule: at least one lowercase letter, no uppercase
/// letters anywhere (so `"_"` alone is rejected, as Python's `islower` would).
fn is_lowercase_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let leading_ok = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => return false,
    };
    let body_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    leading_ok
        && body_ok
        && name.chars().any(|c| c.is_ascii_lowercase())
        && !name.chars().any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, version: &str) -> GenerationParams {
        GenerationParams::new(name, version, StructureVariant::Simple)
    }

    // ── name well-formedness ──────────────────────────────────────────────

    #[test]
    fn valid_lowercase_names_pass() {
        for name in ["my_app", "backend", "worker2", "_private", "a"] {
            assert!(params(name, "3.11").validate().is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn uppercase_names_fail() {
        for name in ["My-App", "MyApp", "APP", "my_App"] {
            assert!(matches!(
                params(name, "3.11").validate(),
                Err(DomainError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn names_with_spaces_or_specials_fail() {
        for name in ["my app", "my-app", "my.app", "app!", ""] {
            assert!(matches!(
                params(name, "3.11").validate(),
                Err(DomainError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn leading_digit_fails() {
        assert!(matches!(
            params("2fast", "3.11").validate(),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn underscore_only_fails() {
        // No cased character at all: Python's islower() says no.
        assert!(matches!(
            params("_", "3.11").validate(),
            Err(DomainError::InvalidName { .. })
        ));
    }

    // ── reserved words ────────────────────────────────────────────────────

    #[test]
    fn reserved_keyword_fails() {
        assert!(matches!(
            params("class", "3.11").validate(),
            Err(DomainError::ReservedName { .. })
        ));
        assert!(matches!(
            params("lambda", "3.11").validate(),
            Err(DomainError::ReservedName { .. })
        ));
    }

    #[test]
    fn uppercase_keyword_fails_as_invalid_name_first() {
        // "False" is a keyword, but the well-formedness rule runs first.
        assert!(matches!(
            params("False", "3.11").validate(),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn keyword_check_runs_before_version_check() {
        // Both name and version are bad; the name rule wins.
        assert!(matches!(
            params("class", "9.9").validate(),
            Err(DomainError::ReservedName { .. })
        ));
    }

    // ── version range ─────────────────────────────────────────────────────

    #[test]
    fn versions_inside_range_pass() {
        for version in ["3.10", "3.11", "3.12", "3.13", "3.10.0", "3.12.4"] {
            assert!(
                params("my_app", version).validate().is_ok(),
                "{version} should pass"
            );
        }
    }

    #[test]
    fn versions_outside_range_fail() {
        for version in ["3.9", "3.14", "4.0", "2.7", "3"] {
            assert!(
                matches!(
                    params("my_app", version).validate(),
                    Err(DomainError::UnsupportedVersion { .. })
                ),
                "{version} should fail"
            );
        }
    }

    #[test]
    fn range_check_is_numeric_not_lexical() {
        // Lexically "3.9" sorts above "3.10" and would wrongly pass.
        assert!(params("my_app", "3.9").validate().is_err());
        assert!(params("my_app", "3.10").validate().is_ok());
    }

    #[test]
    fn malformed_versions_fail_as_unsupported() {
        for version in ["3.11rc1", "latest", ""] {
            assert!(matches!(
                params("my_app", version).validate(),
                Err(DomainError::UnsupportedVersion { .. })
            ));
        }
    }

    // ── variant parsing ───────────────────────────────────────────────────

    #[test]
    fn variant_from_str() {
        assert_eq!(
            "simple".parse::<StructureVariant>().unwrap(),
            StructureVariant::Simple
        );
        assert_eq!(
            "Advanced".parse::<StructureVariant>().unwrap(),
            StructureVariant::Advanced
        );
        assert!("fancy".parse::<StructureVariant>().is_err());
    }

    #[test]
    fn variant_display_is_lowercase() {
        assert_eq!(StructureVariant::Simple.to_string(), "simple");
        assert_eq!(StructureVariant::Advanced.to_string(), "advanced");
    }
}
