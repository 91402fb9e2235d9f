//! Database layer for the semana application.
//!
//! A small persistence layer over a single SQLite file. Each store struct
//! owns one connection, opened per logical operation and configured on
//! every open (foreign keys are a connection-scoped SQLite setting).
//! Schema creation and the weekday seed run through the migration system
//! and are idempotent, so startup is always safe to repeat.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use semana::db::tasks::Tasks;
//! use semana::libs::task::Task;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let task = Task::new(1, "Review PR", None, Some("09:30"), Some("alta"));
//! let _id = tasks.insert(&task)?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization.
pub mod db;

/// Typed data-access error taxonomy.
pub mod error;

/// Versioned schema migrations and the weekday seed.
pub mod migrations;

/// Task CRUD, listing, ordering and search.
pub mod tasks;

/// Weekday reference data access.
pub mod weekdays;
