#[cfg(test)]
mod tests {
    use semana::db::tasks::Tasks;
    use semana::db::weekdays::Weekdays;
    use semana::libs::task::Task;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct AgendaTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for AgendaTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            AgendaTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_day_listing_orders_time_then_priority(_ctx: &mut AgendaTestContext) {
        let day = Weekdays::new().unwrap().fetch().unwrap()[0].id;
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(day, "Nine low", None, Some("09:00"), Some("baixa"))).unwrap();
        tasks.insert(&Task::new(day, "Unscheduled high", None, None, Some("alta"))).unwrap();
        tasks.insert(&Task::new(day, "Nine high", None, Some("09:00"), Some("alta"))).unwrap();

        let titles: Vec<String> = tasks.fetch_by_day(day).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Nine high", "Nine low", "Unscheduled high"]);
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_timed_tasks_come_before_unscheduled(_ctx: &mut AgendaTestContext) {
        let day = Weekdays::new().unwrap().fetch().unwrap()[0].id;
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(day, "No slot", None, None, Some("alta"))).unwrap();
        tasks.insert(&Task::new(day, "Evening", None, Some("22:15"), Some("baixa"))).unwrap();
        tasks.insert(&Task::new(day, "Morning", None, Some("07:45"), Some("baixa"))).unwrap();

        let titles: Vec<String> = tasks.fetch_by_day(day).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Morning", "Evening", "No slot"]);
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_unscheduled_group_orders_by_priority_rank(_ctx: &mut AgendaTestContext) {
        let day = Weekdays::new().unwrap().fetch().unwrap()[0].id;
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(day, "Medium", None, None, Some("media"))).unwrap();
        tasks.insert(&Task::new(day, "Low", None, None, Some("baixa"))).unwrap();
        tasks.insert(&Task::new(day, "High", None, None, Some("alta"))).unwrap();

        let titles: Vec<String> = tasks.fetch_by_day(day).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["High", "Medium", "Low"]);
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_full_listing_groups_by_weekday_order(_ctx: &mut AgendaTestContext) {
        let days = Weekdays::new().unwrap().fetch().unwrap();
        let monday = days[0].id;
        let wednesday = days[2].id;
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(wednesday, "Midweek early", None, Some("06:00"), Some("alta"))).unwrap();
        tasks.insert(&Task::new(monday, "Monday late", None, Some("23:00"), Some("baixa"))).unwrap();
        tasks.insert(&Task::new(monday, "Monday open", None, None, Some("alta"))).unwrap();

        let listed = tasks.fetch_all().unwrap();
        let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
        // Weekday order wins over time; within Monday the timed task leads
        assert_eq!(titles, ["Monday late", "Monday open", "Midweek early"]);
        assert_eq!(listed[0].weekday.as_deref(), Some("Segunda-feira"));
        assert_eq!(listed[2].weekday.as_deref(), Some("Quarta-feira"));
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_empty_day_lists_as_empty(_ctx: &mut AgendaTestContext) {
        let day = Weekdays::new().unwrap().fetch().unwrap()[6].id;
        let mut tasks = Tasks::new().unwrap();

        assert!(tasks.fetch_by_day(day).unwrap().is_empty());
    }
}
