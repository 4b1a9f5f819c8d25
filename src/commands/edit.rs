use super::AppStore;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Task, DATE_FORMAT};
use crate::libs::validation::{validate_patch, TaskEditForm};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    id: String,
    #[arg(short, long)]
    title: Option<String>,
    /// New description; an empty value clears it
    #[arg(short, long)]
    description: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(short, long)]
    category: Option<String>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.date.is_some() || self.category.is_some()
    }
}

pub fn cmd(store: &mut AppStore, args: EditArgs) -> Result<()> {
    let Some(current) = store.task(&args.id).cloned() else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    let form = if args.has_changes() {
        TaskEditForm {
            title: args.title,
            description: args.description,
            date: args.date,
            category: args.category,
        }
    } else {
        View::tasks(&[&current]);
        prompt_edit(&current)?
    };

    let patch = match validate_patch(&form) {
        Ok(patch) => patch,
        Err(e) => {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
            return Ok(());
        }
    };
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if store.edit_task(&args.id, &patch) {
        msg_success!(Message::TaskUpdated);
        if let Some(updated) = store.task(&args.id) {
            View::tasks(&[updated]);
        }
    } else {
        msg_error!(Message::TaskNotFound(args.id));
    }

    Ok(())
}

/// Prompts for every field, pre-filled with the current values. Unchanged
/// fields are left out of the form.
fn prompt_edit(current: &Task) -> Result<TaskEditForm> {
    let theme = ColorfulTheme::default();
    let current_description = current.description.clone().unwrap_or_default();
    let current_date = current.date.format(DATE_FORMAT).to_string();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current_description.clone())
        .allow_empty(true)
        .interact_text()?;
    let date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDate.to_string())
        .default(current_date.clone())
        .interact_text()?;
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let selected = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&labels)
        .default(Category::ALL.iter().position(|c| *c == current.category).unwrap_or(0))
        .interact()?;
    let category = Category::ALL[selected];

    Ok(TaskEditForm {
        title: (title != current.title).then_some(title),
        description: (description != current_description).then_some(description),
        date: (date != current_date).then_some(date),
        category: (category != current.category).then(|| category.to_string()),
    })
}
