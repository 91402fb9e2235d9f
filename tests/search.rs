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
    fn test_search_checks_title_and_description(_ctx: &mut AgendaTestContext) {
        let days = Weekdays::new().unwrap().fetch().unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(days[0].id, "Team Meeting", None, Some("10:00"), None)).unwrap();
        tasks.insert(&Task::new(days[4].id, "Prepare agenda", Some("weekly meeting notes"), None, None)).unwrap();
        tasks.insert(&Task::new(days[0].id, "Lunch", None, Some("12:00"), None)).unwrap();

        let found = tasks.search("meet").unwrap();
        let titles: Vec<&str> = found.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Team Meeting", "Prepare agenda"]);
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_search_folds_case_per_collation(_ctx: &mut AgendaTestContext) {
        let days = Weekdays::new().unwrap().fetch().unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(days[1].id, "REVIEW budget", None, None, None)).unwrap();

        assert_eq!(tasks.search("review").unwrap().len(), 1);
        assert_eq!(tasks.search("Budget").unwrap().len(), 1);
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_search_does_not_group_missing_times(_ctx: &mut AgendaTestContext) {
        let days = Weekdays::new().unwrap().fetch().unwrap();
        let monday = days[0].id;
        let tuesday = days[1].id;
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(monday, "errand one", None, Some("09:00"), None)).unwrap();
        tasks.insert(&Task::new(monday, "errand two", None, None, None)).unwrap();
        tasks.insert(&Task::new(tuesday, "errand three", None, Some("07:00"), None)).unwrap();

        let titles: Vec<String> = tasks.search("errand").unwrap().into_iter().map(|t| t.title).collect();
        // Raw time ascending puts the missing time FIRST within Monday,
        // unlike the listing operations
        assert_eq!(titles, ["errand two", "errand one", "errand three"]);
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_search_without_matches_is_empty(_ctx: &mut AgendaTestContext) {
        let days = Weekdays::new().unwrap().fetch().unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(days[0].id, "Groceries", None, None, None)).unwrap();

        assert!(tasks.search("dentist").unwrap().is_empty());
    }
}
