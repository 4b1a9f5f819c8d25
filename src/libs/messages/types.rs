//! Every user-facing message of the application.
//!
//! Text lives in [`super::display`]; call sites only pick a variant and fill in
//! its parameters, then hand it to one of the `msg_*!` macros.

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskNotFound(String),        // id
    TaskCreateFailed(String),    // reason
    TaskUpdateFailed(String),    // reason
    TaskDeleteCancelled,
    ConfirmDeleteTask(String),   // title
    NoChangesDetected,
    TasksHeader(String, usize),  // date, count
    TasksNotFoundForDate(String),
    TasksNotFoundMatching,
    TasksNotFoundHint,

    // === SELECTION MESSAGES ===
    SelectedDateSet(String),
    FilterSet(String),
    FilterReset,
    ActiveFilter(String),

    // === CALENDAR MESSAGES ===
    CalendarHeader(String),      // "January 2024"
    InvalidMonth(String),

    // === ANALYTICS MESSAGES ===
    StatsHeader(String),         // filter
    CategoryCountsHeader,
    HistoryHeader(usize),        // days
    CompletionSummary(usize, usize, String), // total, completed, rate

    // === STORAGE MESSAGES ===
    StateSaved(String),                  // slot
    StateLoadFailed(String, String),     // slot, error
    StateSaveFailed(String, String),     // slot, error
    StorageUnavailable(String),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String),
    ConfigModuleStorage,
    PromptStorageBackend,
    PromptSlotKey,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDate,
    PromptTaskCategory,
}
