//! Per-item outcome reporting for the batch drivers.

use std::fmt;

use crate::error::{Error, Result};

/// Aggregate of the per-item outcomes of one driver run.
///
/// Items are recorded in the order they were attempted. A failure never stops
/// the fold; the driver always records every item of its fixed list.
#[derive(Debug, Default)]
pub struct Summary {
    total: usize,
    failures: Vec<(String, Error)>,
}

impl Summary {
    /// Create an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome into the summary and print its progress line.
    pub fn record(&mut self, name: impl Into<String>, outcome: Result<()>) {
        let name = name.into();
        self.total += 1;

        match outcome {
            Ok(()) => println!("✓ {name}"),
            Err(err) => {
                println!("✗ {name}: {err}");
                tracing::warn!("{name} failed: {err:?}");
                self.failures.push((name, err));
            }
        }
    }

    /// Number of items attempted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of items that succeeded.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.total - self.failures.len()
    }

    /// Failed items with their errors, in attempt order.
    #[must_use]
    pub fn failures(&self) -> &[(String, Error)] {
        &self.failures
    }

    /// Whether every attempted item succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded(), self.total)
    }
}
