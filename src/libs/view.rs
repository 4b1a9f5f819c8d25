use super::analytics::{CategoryCounts, DayCount};
use super::formatter::{format_bar, format_created_at, format_day_label, truncate};
use super::query::CalendarDay;
use super::task::Task;
use chrono::Datelike;
use prettytable::{row, Cell, Row, Table};

const DESCRIPTION_WIDTH: usize = 40;
const CELL_TITLE_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DATE", "CATEGORY", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                truncate(task.description.as_deref().unwrap_or(""), DESCRIPTION_WIDTH),
                task.date,
                task.category.label(),
                format_created_at(&task.created_at)
            ]);
        }
        table.printstd();
    }

    /// Month grid, one row per week starting on Monday.
    pub fn calendar(days: &[CalendarDay<'_>]) {
        let mut table = Table::new();
        table.add_row(row!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        let Some(first) = days.first() else {
            table.printstd();
            return;
        };
        let mut cells: Vec<String> = vec![String::new(); first.date.weekday().num_days_from_monday() as usize];
        cells.extend(days.iter().map(Self::calendar_cell));
        while cells.len() % 7 != 0 {
            cells.push(String::new());
        }

        for week in cells.chunks(7) {
            table.add_row(Row::new(week.iter().map(|cell| Cell::new(cell)).collect()));
        }
        table.printstd();
    }

    fn calendar_cell(day: &CalendarDay<'_>) -> String {
        let mut lines = vec![day.date.day().to_string()];
        lines.extend(
            day.tasks
                .iter()
                .map(|task| format!("[{}] {}", task.category.badge(), truncate(&task.title, CELL_TITLE_WIDTH))),
        );
        lines.join("\n")
    }

    pub fn category_counts(counts: &CategoryCounts) {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "COUNT", ""]);
        for (category, count) in counts.iter() {
            table.add_row(row![category.label(), count, format_bar(count, BAR_WIDTH)]);
        }
        table.add_row(row!["Total", counts.total(), ""]);
        table.printstd();
    }

    pub fn histogram(days: &[DayCount]) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "DATE", "TASKS", ""]);
        for day in days {
            table.add_row(row![format_day_label(day.date), day.date, day.count, format_bar(day.count, BAR_WIDTH)]);
        }
        table.printstd();
    }
}
