use super::AppStore;
use crate::libs::analytics::{category_counts, completion_stats, last_7_days_histogram, HISTORY_DAYS};
use crate::libs::formatter::format_rate;
use crate::libs::messages::Message;
use crate::libs::task::parse_date;
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Last day of the history window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    today: Option<String>,
}

pub fn cmd(store: &AppStore, args: StatsArgs) -> Result<()> {
    let today = match args.today {
        Some(value) => match parse_date(&value) {
            Ok(date) => date,
            Err(e) => {
                msg_error!(e);
                return Ok(());
            }
        },
        None => Local::now().date_naive(),
    };

    let tasks = store.tasks();
    let filter = store.filter_category();
    let stats = completion_stats(tasks, filter);

    msg_print!(Message::StatsHeader(filter.to_string()), true);
    msg_print!(Message::CompletionSummary(
        stats.total,
        stats.completed_count,
        format_rate(stats.completion_rate)
    ));

    msg_print!(Message::CategoryCountsHeader, true);
    View::category_counts(&category_counts(tasks, filter));

    msg_print!(Message::HistoryHeader(HISTORY_DAYS), true);
    View::histogram(&last_7_days_histogram(tasks, filter, today));

    Ok(())
}
