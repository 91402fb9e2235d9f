use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "semana.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the agenda database and brings it up to date.
    ///
    /// Foreign key enforcement is a connection-scoped SQLite setting, so it
    /// is re-armed here on every open before anything else touches the
    /// connection. Pending migrations (including the weekday seed) run
    /// immediately after.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
