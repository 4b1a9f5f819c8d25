use super::AppStore;
use crate::libs::messages::Message;
use crate::libs::task::{Category, DATE_FORMAT};
use crate::libs::validation::{validate_new_task, TaskForm};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompts for every field when omitted
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    /// Task date (YYYY-MM-DD), defaults to the selected date
    #[arg(long)]
    date: Option<String>,
    /// success, warning, issue or info
    #[arg(short, long, default_value = "info")]
    category: String,
}

pub fn cmd(store: &mut AppStore, args: AddArgs) -> Result<()> {
    let selected = store.selected_date().format(DATE_FORMAT).to_string();
    let form = match args.title {
        Some(title) => TaskForm {
            title,
            description: args.description,
            date: args.date.unwrap_or(selected),
            category: args.category,
        },
        None => prompt_form(&selected)?,
    };

    match validate_new_task(&form) {
        Ok(new_task) => {
            store.add_task(new_task);
            msg_success!(Message::TaskCreated);
        }
        Err(e) => msg_error!(Message::TaskCreateFailed(e.to_string())),
    }

    Ok(())
}

fn prompt_form(default_date: &str) -> Result<TaskForm> {
    let theme = ColorfulTheme::default();
    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDate.to_string())
        .default(default_date.to_string())
        .interact_text()?;
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let category = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&labels)
        .default(Category::ALL.len() - 1)
        .interact()?;

    Ok(TaskForm {
        title,
        description: Some(description),
        date,
        category: Category::ALL[category].to_string(),
    })
}
