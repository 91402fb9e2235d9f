//! Task storage operations.
//!
//! Every method opens with an already-migrated connection (via [`Db`]),
//! runs one statement and returns plain model structs. Listing queries do
//! their ordering in SQL; the only in-memory post-processing the
//! application performs on top of them is [`crate::libs::task::TaskFilter`].
//!
//! Ordering contract for the two listing operations: tasks with a time
//! slot come before tasks without one, then ascending time, then priority
//! rank (alta, media, baixa, unrecognized last). Search deliberately does
//! NOT group missing times; it orders by weekday and raw time only.

use crate::db::db::Db;
use crate::db::error::{is_foreign_key_violation, is_unique_violation, DbError};
use crate::libs::messages::Message;
use crate::libs::task::{parse_time, Priority, Task, TaskUpdate};
use crate::msg_debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

const TASK_COLUMNS: &str = "t.id, t.dia_semana_id, d.nome, t.titulo, t.descricao, t.horario, t.prioridade, t.concluida, t.data_criacao";

const PRIORITY_RANK: &str = "CASE t.prioridade WHEN 'alta' THEN 1 WHEN 'media' THEN 2 WHEN 'baixa' THEN 3 ELSE 4 END";

const INSERT_TASK: &str = "INSERT INTO tarefas (dia_semana_id, titulo, descricao, horario, prioridade) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_TASK: &str = "DELETE FROM tarefas WHERE id = ?1";
const SET_COMPLETED: &str = "UPDATE tarefas SET concluida = ?2 WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> anyhow::Result<Self> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task and returns its id.
    ///
    /// The title must be non-empty and the time slot, when given, a valid
    /// `HH:MM` string; both are checked before anything is written. The
    /// priority was already normalized to a known value when the [`Task`]
    /// was built, so the stored value is always one of the three levels.
    pub fn insert(&mut self, task: &Task) -> Result<i32, DbError> {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(DbError::EmptyTitle);
        }
        let time = match task.time.as_deref() {
            Some(t) => Some(parse_time(t).ok_or_else(|| DbError::InvalidTime(t.to_string()))?),
            None => None,
        };

        match self.conn.execute(
            INSERT_TASK,
            params![task.weekday_id, title, task.description, time, task.priority.as_db_str()],
        ) {
            Ok(_) => Ok(self.conn.last_insert_rowid() as i32),
            Err(e) if is_foreign_key_violation(&e) => Err(DbError::UnknownWeekday(task.weekday_id)),
            Err(e) if is_unique_violation(&e) => Err(DbError::Duplicate(title.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies a field-by-field update to one task.
    ///
    /// Each present field is validated on its own: an empty title is
    /// rejected, a malformed time is rejected, and an unrecognized
    /// priority is dropped from the update without failing the rest.
    /// An empty description or time clears the stored value. Updating an
    /// id that does not exist is a silent no-op.
    pub fn update(&mut self, id: i32, update: &TaskUpdate) -> Result<(), DbError> {
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = update.title.as_deref() {
            let title = title.trim();
            if title.is_empty() {
                return Err(DbError::EmptyTitle);
            }
            sets.push("titulo = ?");
            values.push(Value::Text(title.to_string()));
        }
        if let Some(description) = update.description.as_deref() {
            sets.push("descricao = ?");
            if description.trim().is_empty() {
                values.push(Value::Null);
            } else {
                values.push(Value::Text(description.to_string()));
            }
        }
        if let Some(time) = update.time.as_deref() {
            sets.push("horario = ?");
            if time.trim().is_empty() {
                values.push(Value::Null);
            } else {
                let time = parse_time(time).ok_or_else(|| DbError::InvalidTime(time.to_string()))?;
                values.push(Value::Text(time));
            }
        }
        if let Some(weekday_id) = update.weekday_id {
            sets.push("dia_semana_id = ?");
            values.push(Value::Integer(i64::from(weekday_id)));
        }
        if let Some(priority) = update.priority.as_deref() {
            match Priority::parse(priority) {
                Some(p) => {
                    sets.push("prioridade = ?");
                    values.push(Value::Text(p.as_db_str().to_string()));
                }
                None => msg_debug!(Message::PriorityDropped(priority.to_string())),
            }
        }

        // Every field may have been dropped; nothing to write then
        if sets.is_empty() {
            return Ok(());
        }

        let sql = format!("UPDATE tarefas SET {} WHERE id = ?", sets.join(", "));
        values.push(Value::Integer(i64::from(id)));

        match self.conn.execute(&sql, params_from_iter(values)) {
            Ok(_) => Ok(()),
            Err(e) if is_foreign_key_violation(&e) => Err(DbError::UnknownWeekday(update.weekday_id.unwrap_or(0))),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a task. Silent no-op when the id does not exist.
    pub fn delete(&mut self, id: i32) -> Result<(), DbError> {
        self.conn.execute(DELETE_TASK, params![id])?;
        Ok(())
    }

    /// Sets the completion flag to the given target value.
    pub fn set_completed(&mut self, id: i32, completed: bool) -> Result<(), DbError> {
        self.conn.execute(SET_COMPLETED, params![id, completed])?;
        Ok(())
    }

    /// All tasks for one weekday, in display order.
    pub fn fetch_by_day(&mut self, weekday_id: i32) -> Result<Vec<Task>, DbError> {
        let sql = format!(
            "SELECT {} FROM tarefas t JOIN dias_semana d ON d.id = t.dia_semana_id
             WHERE t.dia_semana_id = ?1
             ORDER BY (t.horario IS NULL), t.horario, {}",
            TASK_COLUMNS, PRIORITY_RANK
        );
        self.query_tasks(&sql, params![weekday_id])
    }

    /// Every task in the agenda, weekday order first, then the same
    /// per-day ordering as [`Tasks::fetch_by_day`].
    pub fn fetch_all(&mut self) -> Result<Vec<Task>, DbError> {
        let sql = format!(
            "SELECT {} FROM tarefas t JOIN dias_semana d ON d.id = t.dia_semana_id
             ORDER BY d.ordem, (t.horario IS NULL), t.horario, {}",
            TASK_COLUMNS, PRIORITY_RANK
        );
        self.query_tasks(&sql, params![])
    }

    /// Substring search over title and description.
    ///
    /// Matching uses the storage collation (SQLite `LIKE`). Results are
    /// ordered by weekday and raw time; missing times are not grouped
    /// here, unlike the listing operations.
    pub fn search(&mut self, term: &str) -> Result<Vec<Task>, DbError> {
        let sql = format!(
            "SELECT {} FROM tarefas t JOIN dias_semana d ON d.id = t.dia_semana_id
             WHERE t.titulo LIKE '%' || ?1 || '%' OR t.descricao LIKE '%' || ?1 || '%'
             ORDER BY d.ordem, t.horario",
            TASK_COLUMNS
        );
        self.query_tasks(&sql, params![term])
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Task>, DbError> {
        let sql = format!(
            "SELECT {} FROM tarefas t JOIN dias_semana d ON d.id = t.dia_semana_id WHERE t.id = ?1",
            TASK_COLUMNS
        );
        self.conn
            .query_row(&sql, params![id], map_task)
            .optional()
            .map_err(Into::into)
    }

    fn query_tasks<P: rusqlite::Params>(&mut self, sql: &str, params: P) -> Result<Vec<Task>, DbError> {
        let mut stmt = self.conn.prepare(sql)?;
        let task_iter = stmt.query_map(params, map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}

fn map_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let priority: String = row.get(6)?;
    Ok(Task {
        id: row.get(0)?,
        weekday_id: row.get(1)?,
        weekday: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        time: row.get(5)?,
        // Write paths keep this one of the three levels; fall back to
        // media if a foreign writer stored something else
        priority: Priority::parse(&priority).unwrap_or(Priority::Medium),
        completed: row.get(7)?,
        created_at: row.get(8)?,
    })
}
