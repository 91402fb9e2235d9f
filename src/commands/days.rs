use crate::db::weekdays::Weekdays;
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let days = Weekdays::new()?.fetch()?;

    msg_print!(Message::WeekdaysHeader, true);
    View::weekdays(&days)?;
    Ok(())
}
