//! Selection queries feeding the calendar and list views.
//!
//! Pure functions over a task slice. Results borrow from the input and keep
//! its relative order, which is creation order since the store never
//! reorders tasks.

use super::task::{FilterCategory, Task};
use chrono::{Datelike, NaiveDate};

/// Tasks scheduled exactly on `date`.
pub fn tasks_on_date(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|task| task.date == date).collect()
}

/// Case-insensitive substring match against title or description.
///
/// An empty `search_term` matches every task.
pub fn matches_search(task: &Task, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}

/// Tasks on `selected_date` that pass the category filter and the search term.
pub fn filtered_task_list<'a>(
    tasks: &'a [Task],
    selected_date: NaiveDate,
    filter_category: FilterCategory,
    search_term: &str,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.date == selected_date)
        .filter(|task| filter_category.matches(task.category))
        .filter(|task| matches_search(task, search_term))
        .collect()
}

/// Tasks passing the category filter, in source order.
pub fn filter_by_category(tasks: &[Task], filter_category: FilterCategory) -> Vec<&Task> {
    tasks.iter().filter(|task| filter_category.matches(task.category)).collect()
}

/// One calendar cell: a day and the tasks scheduled on it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub tasks: Vec<&'a Task>,
}

/// Every day of `year`-`month` with its tasks, first day first.
///
/// Returns an empty vector for an invalid month.
pub fn month_calendar(tasks: &[Task], year: i32, month: u32) -> Vec<CalendarDay<'_>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| CalendarDay {
            date,
            tasks: tasks_on_date(tasks, date),
        })
        .collect()
}
