//! Task management subcommands.
//!
//! Flag-driven where possible, with dialoguer prompts filling in whatever
//! the user left out. This layer owns the guards the store does not:
//! empty search terms are rejected here, weekday names are resolved to
//! ids here, and recoverable store errors become messages instead of
//! aborting the process.

use crate::db::{
    error::DbError,
    tasks::Tasks,
    weekdays::{Weekday, Weekdays},
};
use crate::libs::{
    messages::Message,
    task::{Priority, StatusFilter, Task, TaskFilter, TaskUpdate},
    view::View,
};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const PRIORITY_CHOICES: [&str; 3] = ["baixa", "media", "alta"];

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task to the weekly agenda
    Add {
        /// Weekday name; prompted when omitted
        #[arg(short, long)]
        day: Option<String>,
        /// Task title; prompted when omitted
        #[arg(short, long)]
        title: Option<String>,
        /// Longer description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Time slot in HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Priority: baixa, media or alta (defaults to media)
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// List tasks, for the whole week or one day
    List {
        /// Show a single weekday
        #[arg(short, long)]
        day: Option<String>,
        /// Filter by status: all, pending or done
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by priority
        #[arg(short, long)]
        priority: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit fields of an existing task
    Edit {
        /// Task id to edit
        id: i32,
        #[arg(short, long)]
        day: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short = 'D', long)]
        description: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task id to delete
        id: i32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Mark a task as done
    Done {
        /// Task id
        id: i32,
    },
    /// Reopen a completed task
    Undone {
        /// Task id
        id: i32,
    },
    /// Search tasks by title or description
    Search {
        /// Substring to look for
        term: String,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            day,
            title,
            description,
            time,
            priority,
        } => handle_add(day, title, description, time, priority),
        TaskCommand::List { day, status, priority, json } => handle_list(day, status, priority, json),
        TaskCommand::Edit {
            id,
            day,
            title,
            description,
            time,
            priority,
        } => handle_edit(id, day, title, description, time, priority),
        TaskCommand::Delete { id, yes } => handle_delete(id, yes),
        TaskCommand::Done { id } => handle_toggle(id, true),
        TaskCommand::Undone { id } => handle_toggle(id, false),
        TaskCommand::Search { term } => handle_search(term),
    }
}

fn handle_add(day: Option<String>, title: Option<String>, description: Option<String>, time: Option<String>, priority: Option<String>) -> Result<()> {
    let days = Weekdays::new()?.fetch()?;

    let weekday = match day {
        Some(name) => match resolve_day(&days, &name) {
            Some(d) => d,
            None => {
                msg_error!(Message::UnknownWeekday(name));
                return Ok(());
            }
        },
        None => select_day(&days, 0)?,
    };

    let title = match title {
        Some(t) => t,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };

    let task = Task::new(weekday.id, &title, description.as_deref(), time.as_deref(), priority.as_deref());

    match Tasks::new()?.insert(&task) {
        Ok(id) => {
            msg_success!(Message::TaskCreated(id));
            Ok(())
        }
        Err(e) => report_db_error(e),
    }
}

fn handle_list(day: Option<String>, status: Option<String>, priority: Option<String>, json: bool) -> Result<()> {
    let mut filter = TaskFilter::default();
    if let Some(value) = status {
        match StatusFilter::parse(&value) {
            Some(parsed) => filter.status = parsed,
            None => {
                msg_error!(Message::UnknownStatus(value));
                return Ok(());
            }
        }
    }
    if let Some(value) = priority {
        match Priority::parse(&value) {
            Some(parsed) => filter.priority = Some(parsed),
            None => {
                msg_error!(Message::UnknownPriority(value));
                return Ok(());
            }
        }
    }

    let mut tasks_db = Tasks::new()?;
    let (tasks, header, empty) = match day {
        Some(name) => {
            let days = Weekdays::new()?.fetch()?;
            let weekday = match resolve_day(&days, &name) {
                Some(d) => d,
                None => {
                    msg_error!(Message::UnknownWeekday(name));
                    return Ok(());
                }
            };
            let tasks = tasks_db.fetch_by_day(weekday.id)?;
            let name = weekday.name;
            (tasks, Message::TasksForDayHeader(name.clone()), Message::NoTasksForDay(name))
        }
        None => (tasks_db.fetch_all()?, Message::TasksHeader, Message::NoTasksFound),
    };

    let tasks = filter.apply(&tasks);

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(empty);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(&tasks)?;
    Ok(())
}

fn handle_edit(
    id: i32,
    day: Option<String>,
    title: Option<String>,
    description: Option<String>,
    time: Option<String>,
    priority: Option<String>,
) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let current = match tasks_db.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    let no_flags = day.is_none() && title.is_none() && description.is_none() && time.is_none() && priority.is_none();

    let update = if no_flags {
        edit_interactive(&current)?
    } else {
        let weekday_id = match day {
            Some(name) => {
                let days = Weekdays::new()?.fetch()?;
                match resolve_day(&days, &name) {
                    Some(d) => Some(d.id),
                    None => {
                        msg_error!(Message::UnknownWeekday(name));
                        return Ok(());
                    }
                }
            }
            None => None,
        };
        TaskUpdate {
            weekday_id,
            title,
            description,
            time,
            priority,
        }
    };

    if update.is_empty() {
        msg_info!(Message::NoFieldsToUpdate);
        return Ok(());
    }

    match tasks_db.update(id, &update) {
        Ok(()) => {
            msg_success!(Message::TaskUpdated(id));
            Ok(())
        }
        Err(e) => report_db_error(e),
    }
}

/// Prompts for every updatable field, prefilled with the current values.
fn edit_interactive(current: &Task) -> Result<TaskUpdate> {
    let days = Weekdays::new()?.fetch()?;
    let current_index = days.iter().position(|d| d.id == current.weekday_id).unwrap_or(0);
    let weekday = select_day(&days, current_index)?;

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let time: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTime.to_string())
        .default(current.time.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let priority_index = match current.priority {
        Priority::Low => 0,
        Priority::Medium => 1,
        Priority::High => 2,
    };
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectPriority.to_string())
        .items(&PRIORITY_CHOICES)
        .default(priority_index)
        .interact()?;

    Ok(TaskUpdate {
        weekday_id: Some(weekday.id),
        title: Some(title),
        description: Some(description),
        time: Some(time),
        priority: Some(PRIORITY_CHOICES[selected].to_string()),
    })
}

fn handle_delete(id: i32, yes: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    tasks_db.delete(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}

fn handle_toggle(id: i32, completed: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    if tasks_db.get_by_id(id)?.is_none() {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    }

    tasks_db.set_completed(id, completed)?;
    if completed {
        msg_success!(Message::TaskCompleted(id));
    } else {
        msg_success!(Message::TaskReopened(id));
    }
    Ok(())
}

fn handle_search(term: String) -> Result<()> {
    // The store itself matches everything on an empty term; guard here
    if term.trim().is_empty() {
        msg_error!(Message::SearchTermEmpty);
        return Ok(());
    }

    let tasks = Tasks::new()?.search(&term)?;

    if tasks.is_empty() {
        msg_info!(Message::NoSearchResults(term));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(term), true);
    View::tasks(&tasks)?;
    Ok(())
}

fn resolve_day(days: &[Weekday], name: &str) -> Option<Weekday> {
    let needle = name.trim().to_lowercase();
    days.iter().find(|d| d.name.to_lowercase() == needle).cloned()
}

fn select_day(days: &[Weekday], default: usize) -> Result<Weekday> {
    let names: Vec<&str> = days.iter().map(|d| d.name.as_str()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectDay.to_string())
        .items(&names)
        .default(default)
        .interact()?;
    Ok(days[index].clone())
}

/// Turns recoverable store errors into messages; storage faults propagate.
fn report_db_error(err: DbError) -> Result<()> {
    match err {
        DbError::EmptyTitle => msg_error!(Message::EmptyTitle),
        DbError::InvalidTime(value) => msg_error!(Message::InvalidTime(value)),
        DbError::Duplicate(name) => msg_error!(Message::DuplicateEntry(name)),
        DbError::UnknownWeekday(id) => msg_error!(Message::UnknownWeekdayId(id)),
        DbError::Sqlite(e) => return Err(e.into()),
    }
    Ok(())
}
