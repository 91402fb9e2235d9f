//! # Semana - Weekly Agenda Manager
//!
//! A command-line utility for planning tasks across the days of the week,
//! stored in a local SQLite database.
//!
//! ## Features
//!
//! - **Weekly Planning**: Schedule tasks against any of the seven weekdays
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Schedules & Priorities**: Optional HH:MM time slots and low/medium/high priorities
//! - **Search**: Find tasks by title or description
//! - **Statistics**: Totals, completion rate and per-priority breakdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use semana::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
