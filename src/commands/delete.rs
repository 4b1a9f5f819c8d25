use super::AppStore;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(store: &mut AppStore, args: DeleteArgs) -> Result<()> {
    if let Some(task) = store.task(&args.id) {
        if !args.yes {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::TaskDeleteCancelled);
                return Ok(());
            }
        }
    }

    if store.delete_task(&args.id) {
        msg_success!(Message::TaskDeleted);
    } else {
        msg_warning!(Message::TaskNotFound(args.id));
    }

    Ok(())
}
