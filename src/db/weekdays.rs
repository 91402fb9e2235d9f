use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const SELECT_WEEKDAYS: &str = "SELECT id, nome, ordem FROM dias_semana ORDER BY ordem";
const SELECT_BY_NAME: &str = "SELECT id, nome, ordem FROM dias_semana WHERE nome = ?1";
const SELECT_BY_ID: &str = "SELECT id, nome, ordem FROM dias_semana WHERE id = ?1";

/// One of the seven canonical weekdays.
///
/// Reference data, seeded at initialization and never modified by the
/// application afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weekday {
    pub id: i32,
    pub name: String,
    pub order: u32,
}

pub struct Weekdays {
    conn: Connection,
}

impl Weekdays {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Weekdays { conn: db.conn })
    }

    /// All seven weekdays in canonical `ordem` order.
    pub fn fetch(&mut self) -> Result<Vec<Weekday>> {
        let mut stmt = self.conn.prepare(SELECT_WEEKDAYS)?;
        let day_iter = stmt.query_map([], |row| {
            Ok(Weekday {
                id: row.get(0)?,
                name: row.get(1)?,
                order: row.get(2)?,
            })
        })?;

        let mut days = Vec::new();
        for day in day_iter {
            days.push(day?);
        }
        Ok(days)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Weekday>> {
        self.conn
            .query_row(SELECT_BY_NAME, params![name], |row| {
                Ok(Weekday {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    order: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Weekday>> {
        self.conn
            .query_row(SELECT_BY_ID, params![id], |row| {
                Ok(Weekday {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    order: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
