pub mod add;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod init;
pub mod list;
pub mod select;
pub mod stats;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::persistence::{open_persistence, Persistence};
use crate::libs::store::TaskStore;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};

/// Store handle used by every command.
pub type AppStore = TaskStore<Box<dyn Persistence>>;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure where tasks are stored")]
    Init,
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "List tasks for the selected date")]
    List(list::ListArgs),
    #[command(about = "Select the date the list view shows")]
    Select(select::SelectArgs),
    #[command(about = "Set or reset the category filter")]
    Filter(filter::FilterArgs),
    #[command(about = "Show a month calendar with tasks")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Show task statistics")]
    Stats(stats::StatsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(&mut open_store(), args),
            Commands::Edit(args) => edit::cmd(&mut open_store(), args),
            Commands::Delete(args) => delete::cmd(&mut open_store(), args),
            Commands::List(args) => list::cmd(&mut open_store(), args),
            Commands::Select(args) => select::cmd(&mut open_store(), args),
            Commands::Filter(args) => filter::cmd(&mut open_store(), args),
            Commands::Calendar(args) => calendar::cmd(&open_store(), args),
            Commands::Stats(args) => stats::cmd(&open_store(), args),
        }
    }
}

/// Opens the store on the configured backend.
///
/// An unreadable config falls back to the default backend.
pub fn open_store() -> AppStore {
    let config = Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    });
    TaskStore::open(open_persistence(&config.storage_or_default()))
}
