use super::AppStore;
use crate::libs::messages::Message;
use crate::libs::task::FilterCategory;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// all, success, warning, issue or info
    #[arg(required_unless_present = "reset")]
    category: Option<FilterCategory>,
    /// Show all categories again
    #[arg(long, conflicts_with = "category")]
    reset: bool,
}

pub fn cmd(store: &mut AppStore, args: FilterArgs) -> Result<()> {
    let value = match (args.reset, args.category) {
        (true, _) => FilterCategory::All,
        (false, Some(category)) => category,
        (false, None) => msg_bail_anyhow!("a category or --reset is required"),
    };

    store.set_filter_category(value);
    if value == FilterCategory::All {
        msg_success!(Message::FilterReset);
    } else {
        msg_success!(Message::FilterSet(value.to_string()));
    }

    Ok(())
}
