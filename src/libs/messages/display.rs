//! Display implementation for application messages.
//!
//! Single source of truth for every piece of user-facing text. Variants
//! carry their parameters; formatting happens here and nowhere else.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => write!(f, "Task #{} created", id),
            Message::TaskUpdated(id) => write!(f, "Task #{} updated", id),
            Message::TaskDeleted(id) => write!(f, "Task #{} deleted", id),
            Message::TaskCompleted(id) => write!(f, "Task #{} marked as done", id),
            Message::TaskReopened(id) => write!(f, "Task #{} reopened", id),
            Message::TaskNotFound(id) => write!(f, "Task #{} not found", id),
            Message::NoTasksFound => write!(f, "No tasks in the agenda yet"),
            Message::NoTasksForDay(day) => write!(f, "No tasks for {}", day),
            Message::TasksHeader => write!(f, "📋 Weekly agenda"),
            Message::TasksForDayHeader(day) => write!(f, "📋 Tasks for {}", day),
            Message::NoFieldsToUpdate => write!(f, "Nothing to update"),
            Message::PriorityDropped(value) => write!(f, "Ignoring unknown priority '{}'", value),
            Message::ConfirmDeleteTask(title) => write!(f, "Delete task '{}'?", title),
            Message::DeleteCancelled => write!(f, "Deletion cancelled"),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(term) => write!(f, "🔍 Tasks matching '{}'", term),
            Message::NoSearchResults(term) => write!(f, "No tasks match '{}'", term),
            Message::SearchTermEmpty => write!(f, "Search term must not be empty"),

            // === VALIDATION MESSAGES ===
            Message::EmptyTitle => write!(f, "Title must not be empty"),
            Message::InvalidTime(value) => write!(f, "Invalid time '{}', expected HH:MM", value),
            Message::UnknownWeekday(name) => write!(f, "Unknown weekday '{}'", name),
            Message::UnknownWeekdayId(id) => write!(f, "No weekday with id {}", id),
            Message::UnknownPriority(value) => write!(f, "Unknown priority '{}', expected baixa, media or alta", value),
            Message::UnknownStatus(value) => write!(f, "Unknown status '{}', expected all, pending or done", value),
            Message::DuplicateEntry(name) => write!(f, "'{}' already exists", name),

            // === WEEKDAY MESSAGES ===
            Message::WeekdaysHeader => write!(f, "🗓️ Days of the week"),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader => write!(f, "📊 Agenda statistics"),
            Message::NoStatsAvailable => write!(f, "No tasks yet, nothing to summarize"),

            // === DATABASE MESSAGES ===
            Message::DbInitialized(version) => write!(f, "Database ready (schema version {})", version),
            Message::RunningMigration(version, name) => write!(f, "Applying migration v{}: {}", version, name),
            Message::MigrationFailed(version, err) => write!(f, "Migration v{} failed: {}", version, err),
            Message::MigrationsCompleted => write!(f, "Database schema is up to date"),

            // === PROMPTS ===
            Message::PromptTaskTitle => write!(f, "Task title"),
            Message::PromptTaskDescription => write!(f, "Description (optional)"),
            Message::PromptTaskTime => write!(f, "Time slot HH:MM (optional)"),
            Message::PromptSelectDay => write!(f, "Day of the week"),
            Message::PromptSelectPriority => write!(f, "Priority"),
        }
    }
}
