use super::AppStore;
use crate::libs::messages::Message;
use crate::libs::query::filtered_task_list;
use crate::libs::task::{parse_date, FilterCategory};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Select this date (YYYY-MM-DD) before listing
    #[arg(long)]
    date: Option<String>,
    /// Case-insensitive text to look for in titles and descriptions
    #[arg(short, long, default_value = "")]
    search: String,
}

pub fn cmd(store: &mut AppStore, args: ListArgs) -> Result<()> {
    if let Some(date) = args.date {
        match parse_date(&date) {
            Ok(date) => store.set_selected_date(date),
            Err(e) => {
                msg_error!(e);
                return Ok(());
            }
        }
    }

    let selected_date = store.selected_date();
    let filter = store.filter_category();
    let tasks = filtered_task_list(store.tasks(), selected_date, filter, &args.search);

    msg_print!(Message::TasksHeader(selected_date.to_string(), tasks.len()), true);
    if filter != FilterCategory::All {
        msg_print!(Message::ActiveFilter(filter.to_string()));
    }

    if tasks.is_empty() {
        if !args.search.is_empty() || filter != FilterCategory::All {
            msg_info!(Message::TasksNotFoundMatching);
            msg_print!(Message::TasksNotFoundHint);
        } else {
            msg_info!(Message::TasksNotFoundForDate(selected_date.to_string()));
        }
        return Ok(());
    }

    View::tasks(&tasks);

    Ok(())
}
