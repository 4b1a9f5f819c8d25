//! Aggregate statistics for the analytics view.
//!
//! Every function first applies the category filter and then aggregates the
//! remaining tasks. Results are recomputed from the full collection on each
//! call; nothing is cached or persisted.
//!
//! ## Completion rate
//!
//! ```text
//! completion_rate = completed / total * 100   (0 when total == 0)
//!
//! Where:
//! - completed = filtered tasks in the `success` category
//! - total     = all filtered tasks
//! ```

use super::query::filter_by_category;
use super::task::{Category, FilterCategory, Task};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Number of days covered by [`last_7_days_histogram`].
pub const HISTORY_DAYS: usize = 7;

/// Per-category task counts in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub success: usize,
    pub warning: usize,
    pub issue: usize,
    pub info: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Success => self.success,
            Category::Warning => self.warning,
            Category::Issue => self.issue,
            Category::Info => self.info,
        }
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::Success => self.success += 1,
            Category::Warning => self.warning += 1,
            Category::Issue => self.issue += 1,
            Category::Info => self.info += 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }

    pub fn to_array(&self) -> [usize; 4] {
        [self.success, self.warning, self.issue, self.info]
    }

    pub fn total(&self) -> usize {
        self.success + self.warning + self.issue + self.info
    }
}

/// Tasks scheduled on one day of the rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStats {
    pub total: usize,
    pub completed_count: usize,
    /// Percentage in `[0, 100]`.
    pub completion_rate: f64,
}

pub fn category_counts(tasks: &[Task], filter_category: FilterCategory) -> CategoryCounts {
    filter_by_category(tasks, filter_category)
        .into_iter()
        .fold(CategoryCounts::default(), |mut counts, task| {
            counts.bump(task.category);
            counts
        })
}

/// The seven days ending at `today` (oldest first) with filtered task counts.
pub fn last_7_days_histogram(tasks: &[Task], filter_category: FilterCategory, today: NaiveDate) -> Vec<DayCount> {
    let filtered = filter_by_category(tasks, filter_category);

    (0..HISTORY_DAYS as i64)
        .rev()
        .map(|days_back| today - Duration::days(days_back))
        .map(|date| DayCount {
            date,
            count: filtered.iter().filter(|task| task.date == date).count(),
        })
        .collect()
}

pub fn completion_stats(tasks: &[Task], filter_category: FilterCategory) -> CompletionStats {
    let filtered = filter_by_category(tasks, filter_category);
    let total = filtered.len();
    let completed_count = filtered.iter().filter(|task| task.category == Category::Success).count();

    let completion_rate = if total > 0 {
        completed_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    CompletionStats {
        total,
        completed_count,
        completion_rate,
    }
}
