//! Depth bound for the undo and redo stacks.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Maximum number of entries kept on each history stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryLimit {
    /// Stacks grow without bound.
    #[default]
    Unbounded,
    /// Each stack keeps at most this many entries, discarding the oldest.
    Bounded(NonZeroUsize),
}

impl HistoryLimit {
    /// Creates a bounded limit. Returns `None` for a depth of zero.
    #[must_use]
    pub fn bounded(depth: usize) -> Option<Self> {
        NonZeroUsize::new(depth).map(Self::Bounded)
    }

    /// Number of entries that must be dropped from a stack of `len` entries.
    #[must_use]
    pub fn excess(self, len: usize) -> usize {
        match self {
            Self::Unbounded => 0,
            Self::Bounded(max) => len.saturating_sub(max.get()),
        }
    }
}

impl FromStr for HistoryLimit {
    type Err = String;

    /// Parses `unbounded` or a positive depth.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(Self::Unbounded);
        }
        let depth: usize =
            s.parse().map_err(|e| format!("Invalid history depth '{s}': {e}"))?;
        Self::bounded(depth).ok_or_else(|| "History depth must be at least 1".to_string())
    }
}

impl fmt::Display for HistoryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Bounded(max) => write!(f, "{max}"),
        }
    }
}
