use crate::db::tasks::Tasks;
use crate::libs::{messages::Message, stats::TaskStats, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print statistics as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let tasks = Tasks::new()?.fetch_all()?;
    let stats = TaskStats::from_tasks(&tasks);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.total == 0 {
        msg_info!(Message::NoStatsAvailable);
        return Ok(());
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats)?;
    Ok(())
}
