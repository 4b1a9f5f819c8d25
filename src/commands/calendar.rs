use super::AppStore;
use crate::libs::messages::Message;
use crate::libs::query::month_calendar;
use crate::libs::task::{FilterCategory, DATE_FORMAT};
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the selected date's month
    #[arg(short, long)]
    month: Option<String>,
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), DATE_FORMAT).ok()
}

pub fn cmd(store: &AppStore, args: CalendarArgs) -> Result<()> {
    let first = match args.month {
        Some(month) => match parse_month(&month) {
            Some(first) => first,
            None => {
                msg_error!(Message::InvalidMonth(month));
                return Ok(());
            }
        },
        None => store.selected_date().with_day(1).unwrap_or(store.selected_date()),
    };

    let days = month_calendar(store.tasks(), first.year(), first.month());
    msg_print!(Message::CalendarHeader(first.format("%B %Y").to_string()), true);
    View::calendar(&days);

    let filter = store.filter_category();
    if filter != FilterCategory::All {
        msg_print!(Message::ActiveFilter(filter.to_string()));
    }

    Ok(())
}
