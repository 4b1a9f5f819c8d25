//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task added successfully!".to_string(),
            Message::TaskUpdated => "Task updated successfully!".to_string(),
            Message::TaskDeleted => "Task deleted successfully!".to_string(),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskCreateFailed(reason) => format!("Failed to save task: {}", reason),
            Message::TaskUpdateFailed(reason) => format!("Failed to update task: {}", reason),
            Message::TaskDeleteCancelled => "Deletion cancelled.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::NoChangesDetected => "No changes supplied. Nothing to update.".to_string(),
            Message::TasksHeader(date, count) => format!("Tasks for {} ({} tasks)", date, count),
            Message::TasksNotFoundForDate(date) => format!("📅 No tasks found for {}", date),
            Message::TasksNotFoundMatching => "🔍 No tasks found matching your criteria".to_string(),
            Message::TasksNotFoundHint => "Try adjusting your search or filter".to_string(),

            // === SELECTION MESSAGES ===
            Message::SelectedDateSet(date) => format!("Selected date: {}", date),
            Message::FilterSet(filter) => format!("Category filter set to: {}", filter),
            Message::FilterReset => "Category filter reset to all categories".to_string(),
            Message::ActiveFilter(filter) => format!("Filter: {}", filter),

            // === CALENDAR MESSAGES ===
            Message::CalendarHeader(month) => format!("Calendar for {}", month),
            Message::InvalidMonth(value) => format!("Invalid month '{}' (expected YYYY-MM)", value),

            // === ANALYTICS MESSAGES ===
            Message::StatsHeader(filter) => format!("Task statistics ({})", filter),
            Message::CategoryCountsHeader => "Tasks by category:".to_string(),
            Message::HistoryHeader(days) => format!("Tasks over the last {} days:", days),
            Message::CompletionSummary(total, completed, rate) => {
                format!("Total tasks: {} | Completed: {} | Completion rate: {}", total, completed, rate)
            }

            // === STORAGE MESSAGES ===
            Message::StateSaved(slot) => format!("Saved task state to {}", slot),
            Message::StateLoadFailed(slot, error) => format!("Could not load state from {}: {}", slot, error),
            Message::StateSaveFailed(slot, error) => format!("Could not save state to {}: {}", slot, error),
            Message::StorageUnavailable(error) => {
                format!("Storage is unavailable, changes will not be kept: {}", error)
            }
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptStorageBackend => "Where should tasks be stored?".to_string(),
            Message::PromptSlotKey => "Storage key".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
        };

        write!(f, "{}", text)
    }
}
