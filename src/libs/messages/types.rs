/// All user-facing messages, grouped by application area.
///
/// Text lives in the `Display` implementation in `display.rs`; the rest of
/// the codebase only ever names a variant.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32),
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskCompleted(i32),
    TaskReopened(i32),
    TaskNotFound(i32),
    NoTasksFound,
    NoTasksForDay(String),
    TasksHeader,
    TasksForDayHeader(String),
    NoFieldsToUpdate,
    PriorityDropped(String),
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String),
    NoSearchResults(String),
    SearchTermEmpty,

    // === VALIDATION MESSAGES ===
    EmptyTitle,
    InvalidTime(String),
    UnknownWeekday(String),
    UnknownWeekdayId(i32),
    UnknownPriority(String),
    UnknownStatus(String),
    DuplicateEntry(String),

    // === WEEKDAY MESSAGES ===
    WeekdaysHeader,

    // === STATISTICS MESSAGES ===
    StatsHeader,
    NoStatsAvailable,

    // === DATABASE MESSAGES ===
    DbInitialized(u32),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    MigrationsCompleted,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskTime,
    PromptSelectDay,
    PromptSelectPriority,
}
