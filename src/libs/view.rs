use crate::db::weekdays::Weekday;
use crate::libs::stats::TaskStats;
use crate::libs::task::{Priority, Task};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DAY", "TIME", "TITLE", "DESCRIPTION", "PRIORITY", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.weekday.as_deref().unwrap_or("-"),
                task.time.as_deref().unwrap_or("-"),
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.priority,
                if task.completed { "✓" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn weekdays(days: &[Weekday]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DAY"]);
        for day in days {
            table.add_row(row![day.order, day.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "DONE", "PENDING", "HIGH", "MEDIUM", "LOW"]);
        table.add_row(row![
            stats.total,
            stats.completed,
            stats.pending(),
            stats.by_priority.get(&Priority::High).copied().unwrap_or(0),
            stats.by_priority.get(&Priority::Medium).copied().unwrap_or(0),
            stats.by_priority.get(&Priority::Low).copied().unwrap_or(0)
        ]);
        table.printstd();

        // No completion line on an empty agenda
        if let Some(percent) = stats.completion_percent() {
            println!("Completion: {:.1}%", percent);
        }

        Ok(())
    }
}
