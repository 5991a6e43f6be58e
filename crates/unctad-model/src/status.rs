//! Observation status ranking.
//!
//! Competing observations for the same (area, year, indicator) are resolved
//! by status: a lower rank is a better estimate. Codes missing from the table
//! fall back to [`StatusPriority::fallback`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rank assigned to status codes not present in the table.
pub const UNKNOWN_STATUS_RANK: u32 = 99;

/// Rank table over observation status codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPriority {
    ranks: BTreeMap<String, u32>,
    fallback: u32,
}

impl Default for StatusPriority {
    /// Actual > Estimated > Provisional > Other > anything else.
    fn default() -> Self {
        Self::new([("A", 0), ("E", 1), ("P", 2), ("O", 3)], UNKNOWN_STATUS_RANK)
    }
}

impl StatusPriority {
    pub fn new<I, S>(ranks: I, fallback: u32) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            ranks: ranks
                .into_iter()
                .map(|(code, rank)| (code.into(), rank))
                .collect(),
            fallback,
        }
    }

    /// Rank for a status code; exact match, no trimming or case folding.
    pub fn rank(&self, status: &str) -> u32 {
        self.ranks.get(status).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> u32 {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_orders_actual_first() {
        let priority = StatusPriority::default();
        assert_eq!(priority.rank("A"), 0);
        assert_eq!(priority.rank("E"), 1);
        assert_eq!(priority.rank("P"), 2);
        assert_eq!(priority.rank("O"), 3);
    }

    #[test]
    fn unknown_and_missing_codes_use_fallback() {
        let priority = StatusPriority::default();
        assert_eq!(priority.rank("X"), 99);
        assert_eq!(priority.rank(""), 99);
        assert_eq!(priority.rank("a"), 99);
    }

    #[test]
    fn custom_table() {
        let priority = StatusPriority::new([("F", 0)], 5);
        assert_eq!(priority.rank("F"), 0);
        assert_eq!(priority.rank("A"), 5);
        assert_eq!(priority.fallback(), 5);
    }
}
