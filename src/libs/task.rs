use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency level, stored as the schema's lowercase Portuguese strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parses user or stored input, tolerating case and the accented
    /// spellings people actually type. Returns `None` for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "baixa" | "low" => Some(Priority::Low),
            "media" | "média" | "medium" => Some(Priority::Medium),
            "alta" | "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Write-time normalization: absent or unrecognized input becomes
    /// `media`.
    pub fn normalize(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Priority::Medium)
    }

    pub fn as_db_str(&self) -> &'static str {
        match self {
            Priority::Low => "baixa",
            Priority::Medium => "media",
            Priority::High => "alta",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

/// Validates a `HH:MM` time slot.
///
/// Strictly two-digit hours and minutes, so stored values sort correctly
/// as plain strings.
pub fn parse_time(value: &str) -> Option<String> {
    let value = value.trim();
    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    Some(value.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub weekday_id: i32,
    /// Weekday display name, present on rows read back through the join.
    pub weekday: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(weekday_id: i32, title: &str, description: Option<&str>, time: Option<&str>, priority: Option<&str>) -> Self {
        Task {
            id: None,
            weekday_id,
            weekday: None,
            title: title.to_string(),
            description: description.map(str::to_string),
            time: time.map(str::to_string),
            priority: Priority::normalize(priority),
            completed: false,
            created_at: None,
        }
    }
}

/// Field-by-field task update.
///
/// Only these five fields are updatable; each is validated independently
/// by the store. `None` leaves a field untouched. An empty `description`
/// or `time` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub weekday_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    /// Raw priority input; unrecognized values are dropped from the
    /// update instead of failing it.
    pub priority: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.weekday_id.is_none() && self.title.is_none() && self.description.is_none() && self.time.is_none() && self.priority.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" | "todas" => Some(StatusFilter::All),
            "pending" | "pendente" => Some(StatusFilter::Pending),
            "done" | "completed" | "concluida" | "concluída" => Some(StatusFilter::Completed),
            _ => None,
        }
    }
}

/// In-memory filtering over an already-fetched task listing.
///
/// The three filters compose with AND semantics; a filter left at its
/// "all" state is a no-op. No storage access happens here.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub weekday: Option<String>,
}

impl TaskFilter {
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| match self.status {
                StatusFilter::All => true,
                StatusFilter::Pending => !task.completed,
                StatusFilter::Completed => task.completed,
            })
            .filter(|task| self.priority.map_or(true, |p| task.priority == p))
            .filter(|task| {
                self.weekday
                    .as_deref()
                    .map_or(true, |name| task.weekday.as_deref() == Some(name))
            })
            .cloned()
            .collect()
    }
}
