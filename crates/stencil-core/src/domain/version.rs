//! Dotted numeric runtime versions.
//!
//! The version-range check must compare numerically per segment, never
//! lexically: `"3.9" < "3.10"`, although a plain string comparison says
//! otherwise. Missing trailing segments compare as zero, so `3 == 3.0`.

use std::cmp::Ordering;
use std::fmt;

/// A runtime version such as `3.10` or `3.12.1`.
///
/// Parsing rejects anything that is not dot-separated decimal numbers;
/// pre-release suffixes and the like are not versions this tool supports.
#[derive(Debug, Clone)]
pub struct PyVersion {
    segments: Vec<u32>,
}

impl PyVersion {
    /// Returns `None` for anything that is not dot-separated decimals; the
    /// caller folds that into its own unsupported-version error, which
    /// carries the original string.
    pub fn parse(s: &str) -> Option<Self> {
        let segments = s
            .split('.')
            .map(|seg| seg.parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()?;
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    fn segment(&self, i: usize) -> u32 {
        self.segments.get(i).copied().unwrap_or(0)
    }
}

impl fmt::Display for PyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

// Manual comparison impls: `[3]` and `[3, 0]` must be equal, so the derived
// element-wise versions would be wrong.

impl PartialEq for PyVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PyVersion {}

impl Ord for PyVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            match self.segment(i).cmp(&other.segment(i)) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for PyVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
