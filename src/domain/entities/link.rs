//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counters.
///
/// `code` and `target_url` never change after creation. `total_clicks` and
/// `last_clicked` are only moved forward by the store's atomic increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link that has never been clicked.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            total_clicks: 0,
            last_clicked: None,
            created_at,
        }
    }

    /// Returns true once the link has been followed at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }

    /// Records one click at `at`.
    ///
    /// Only for stores that serialise access themselves; SQL stores do this in
    /// a single `UPDATE`.
    pub fn record_click(&mut self, at: DateTime<Utc>) {
        self.total_clicks += 1;
        self.last_clicked = Some(match self.last_clicked {
            Some(prev) if prev > at => prev,
            _ => at,
        });
    }
}
