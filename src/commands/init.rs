//! Database initialization command.
//!
//! Opening the database already creates the schema and seeds the weekday
//! reference rows, so this command only has to open it and report the
//! resulting schema version. Running it repeatedly is safe.

use crate::db::{db::Db, migrations};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let db = Db::new()?;
    let version = migrations::get_db_version(&db.conn)?;

    msg_success!(Message::DbInitialized(version));
    Ok(())
}
