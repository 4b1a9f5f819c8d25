//! # Taskcal - calendar task manager
//!
//! A command-line task manager for dated, categorized tasks.
//!
//! ## Features
//!
//! - **Task Store**: add, edit and delete tasks; every change is saved at once
//! - **Calendar and List Views**: tasks per day, filtered by category and text
//! - **Analytics**: counts per category, a 7-day history and a completion rate
//! - **Local Persistence**: one snapshot in SQLite or a JSON file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskcal::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
