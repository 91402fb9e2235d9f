#[cfg(test)]
mod tests {
    use semana::db::tasks::Tasks;
    use semana::db::weekdays::Weekdays;
    use semana::libs::stats::TaskStats;
    use semana::libs::task::{Priority, Task};
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

    #[test]
    fn test_stats_on_empty_listing() {
        let stats = TaskStats::from_tasks(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.pending(), 0);
        // No percentage is computed on an empty agenda
        assert_eq!(stats.completion_percent(), None);
        assert_eq!(stats.by_priority.get(&Priority::Low), Some(&0));
        assert_eq!(stats.by_priority.get(&Priority::Medium), Some(&0));
        assert_eq!(stats.by_priority.get(&Priority::High), Some(&0));
    }

    #[test_context(AgendaTestContext)]
    #[test]
    fn test_stats_over_full_listing(_ctx: &mut AgendaTestContext) {
        let days = Weekdays::new().unwrap().fetch().unwrap();
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(days[0].id, "One", None, None, Some("alta"))).unwrap();
        tasks.insert(&Task::new(days[1].id, "Two", None, None, Some("alta"))).unwrap();
        tasks.insert(&Task::new(days[2].id, "Three", None, None, Some("baixa"))).unwrap();
        let done_id = tasks.insert(&Task::new(days[3].id, "Four", None, None, None)).unwrap();
        tasks.set_completed(done_id, true).unwrap();

        let stats = TaskStats::from_tasks(&tasks.fetch_all().unwrap());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending(), 3);
        assert_eq!(stats.by_priority.get(&Priority::High), Some(&2));
        assert_eq!(stats.by_priority.get(&Priority::Medium), Some(&1));
        assert_eq!(stats.by_priority.get(&Priority::Low), Some(&1));
        assert_eq!(stats.completion_percent(), Some(25.0));
    }
}
