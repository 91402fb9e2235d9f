#[cfg(test)]
mod tests {
    use semana::libs::task::{Priority, StatusFilter, Task, TaskFilter};

    fn task(title: &str, day: &str, priority: &str, completed: bool) -> Task {
        let mut task = Task::new(1, title, None, None, Some(priority));
        task.weekday = Some(day.to_string());
        task.completed = completed;
        task
    }

    fn agenda() -> Vec<Task> {
        vec![
            task("Pay bills", "Segunda-feira", "alta", false),
            task("Water plants", "Segunda-feira", "baixa", true),
            task("Gym", "Quarta-feira", "media", false),
            task("Call family", "Domingo", "alta", true),
        ]
    }

    #[test]
    fn test_default_filter_is_a_noop() {
        let tasks = agenda();
        let filtered = TaskFilter::default().apply(&tasks);
        assert_eq!(filtered.len(), tasks.len());
    }

    #[test]
    fn test_status_filter() {
        let tasks = agenda();

        let pending = TaskFilter {
            status: StatusFilter::Pending,
            ..Default::default()
        };
        let titles: Vec<String> = pending.apply(&tasks).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Pay bills", "Gym"]);

        let completed = TaskFilter {
            status: StatusFilter::Completed,
            ..Default::default()
        };
        assert_eq!(completed.apply(&tasks).len(), 2);
    }

    #[test]
    fn test_priority_filter_parses_case_insensitively() {
        let tasks = agenda();

        let filter = TaskFilter {
            priority: Priority::parse("ALTA"),
            ..Default::default()
        };
        let titles: Vec<String> = filter.apply(&tasks).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Pay bills", "Call family"]);
    }

    #[test]
    fn test_weekday_filter() {
        let tasks = agenda();

        let filter = TaskFilter {
            weekday: Some("Segunda-feira".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&tasks).len(), 2);
    }

    #[test]
    fn test_filters_compose_with_and_semantics() {
        let tasks = agenda();

        let filter = TaskFilter {
            status: StatusFilter::Completed,
            priority: Some(Priority::High),
            weekday: Some("Domingo".to_string()),
        };
        let titles: Vec<String> = filter.apply(&tasks).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Call family"]);

        // Same status and priority, wrong day: AND semantics drop everything
        let filter = TaskFilter {
            status: StatusFilter::Completed,
            priority: Some(Priority::High),
            weekday: Some("Segunda-feira".to_string()),
        };
        assert!(filter.apply(&tasks).is_empty());
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!(StatusFilter::parse("all"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse("Pending"), Some(StatusFilter::Pending));
        assert_eq!(StatusFilter::parse("done"), Some(StatusFilter::Completed));
        assert_eq!(StatusFilter::parse("someday"), None);
    }
}
