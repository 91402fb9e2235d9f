//! Database schema migration management and versioning.
//!
//! Tracks applied schema versions in a `migrations` table and applies any
//! pending migrations during database initialization. Every migration runs
//! inside a transaction, and the whole system is idempotent: re-running
//! initialization against an already-current database is a no-op, and the
//! weekday seed uses insert-if-absent semantics so repeated startups never
//! duplicate reference rows.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// The seven canonical weekdays, in display order.
///
/// Seeded once at initialization; `ordem` 1-7 is the only valid sort key
/// for day ordering anywhere in the application.
pub const WEEKDAYS: [(&str, u32); 7] = [
    ("Segunda-feira", 1),
    ("Terça-feira", 2),
    ("Quarta-feira", 3),
    ("Quinta-feira", 4),
    ("Sexta-feira", 5),
    ("Sábado", 6),
    ("Domingo", 7),
];

/// A single database migration with its execution logic.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all known migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: agenda schema and weekday reference data.
        // Creates the weekday table, the task table referencing it, and
        // seeds the seven canonical days.
        self.add_migration(1, "create_agenda_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS dias_semana (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nome TEXT NOT NULL UNIQUE,
                    ordem INTEGER NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tarefas (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    dia_semana_id INTEGER NOT NULL,
                    titulo TEXT NOT NULL,
                    descricao TEXT,
                    horario TEXT,
                    prioridade TEXT DEFAULT 'media',
                    concluida BOOLEAN DEFAULT 0,
                    data_criacao TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (dia_semana_id) REFERENCES dias_semana (id)
                )",
                [],
            )?;

            // Index task lookups by day, the dominant query pattern
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tarefas_dia ON tarefas(dia_semana_id)", [])?;

            seed_weekdays(tx)?;

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in the correct order.
    ///
    /// Creates the tracking table if needed, determines the current schema
    /// version and applies everything newer inside a single transaction.
    /// A failed migration rolls back and aborts initialization.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::MigrationsCompleted);

        Ok(())
    }

    /// Highest applied migration version, or 0 on a fresh database.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeds the seven weekday rows, skipping any that already exist.
///
/// Keyed on the unique `nome` column, so running this any number of times
/// leaves exactly seven rows.
fn seed_weekdays(tx: &Transaction) -> Result<()> {
    for (nome, ordem) in WEEKDAYS {
        tx.execute("INSERT OR IGNORE INTO dias_semana (nome, ordem) VALUES (?1, ?2)", params![nome, ordem])?;
    }
    Ok(())
}

/// Initializes a database connection with all pending migrations applied.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Retrieves the current database schema version.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}
