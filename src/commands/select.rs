use super::AppStore;
use crate::libs::messages::Message;
use crate::libs::task::parse_date;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Date to select (YYYY-MM-DD)
    date: String,
}

pub fn cmd(store: &mut AppStore, args: SelectArgs) -> Result<()> {
    match parse_date(&args.date) {
        Ok(date) => {
            store.set_selected_date(date);
            msg_success!(Message::SelectedDateSet(date.to_string()));
        }
        Err(e) => msg_error!(e),
    }

    Ok(())
}
