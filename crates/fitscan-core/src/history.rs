//! Bounded meal/workout histories.
//!
//! Histories are most-recent-first sequences with a fixed cap: the entry
//! past the cap is unconditionally dropped on append regardless of age or
//! content (count-based truncation, not a time window).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::PathBuf;
use uuid::Uuid;

/// Maximum number of entries kept per history.
pub const HISTORY_CAP: usize = 50;

/// One successfully analyzed meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealHistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub calories: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl MealHistoryEntry {
    /// Creates an entry stamped with the current time and a fresh id.
    pub fn new(calories: f64, image: Option<PathBuf>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            calories,
            image,
        }
    }
}

/// One successfully generated workout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub title: String,
}

impl WorkoutHistoryEntry {
    /// Creates an entry stamped with the current time and a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            title: title.into(),
        }
    }
}

fn default_cap() -> usize {
    HISTORY_CAP
}

/// A most-recent-first sequence with a fixed capacity.
///
/// `push_front` inserts at the front and drops the overflow from the back,
/// so the sequence never holds more than `cap` entries, even transiently.
/// Deserialized histories always carry the production cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CappedHistory<T> {
    #[serde(skip, default = "default_cap")]
    cap: usize,
    entries: VecDeque<T>,
}

impl<T> CappedHistory<T> {
    /// Creates an empty history with the production cap.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAP)
    }

    /// Creates an empty history with a custom cap.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            cap,
            entries: VecDeque::with_capacity(cap),
        }
    }

    /// Prepends an entry, dropping the oldest one past the cap.
    pub fn push_front(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries, keeping the cap.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> CappedHistory<T> {
    /// Clones the entries into a vector, newest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<T> Default for CappedHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut history = CappedHistory::new();
        history.push_front(1);
        history.push_front(2);
        history.push_front(3);
        assert_eq!(history.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = CappedHistory::with_capacity(3);
        for n in 1..=5 {
            history.push_front(n);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.to_vec(), vec![5, 4, 3]);
    }

    #[test]
    fn test_never_exceeds_cap_transiently() {
        let mut history = CappedHistory::with_capacity(2);
        history.push_front("a");
        history.push_front("b");
        history.push_front("c");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut history = CappedHistory::new();
        history.push_front(MealHistoryEntry::new(420.0, None));
        history.push_front(MealHistoryEntry::new(510.0, None));
        let json = serde_json::to_string(&history).unwrap();
        let restored: CappedHistory<MealHistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.to_vec(), history.to_vec());
    }

    #[test]
    fn test_entries_have_unique_ids() {
        let a = WorkoutHistoryEntry::new("Upper body A");
        let b = WorkoutHistoryEntry::new("Upper body A");
        assert_ne!(a.id, b.id);
    }
}
