#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use taskcal::libs::query::{filtered_task_list, matches_search, month_calendar, tasks_on_date};
    use taskcal::libs::task::{Category, FilterCategory, Task};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn task(id: &str, title: &str, description: Option<&str>, date: NaiveDate, category: Category) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            date,
            category,
            created_at: Utc::now(),
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            task("1", "Sample Task", Some("This is a sample task"), day(1), Category::Info),
            task("2", "Pay rent", None, day(1), Category::Issue),
            task("3", "Deploy release", Some("Ship the RENTAL module"), day(1), Category::Success),
            task("4", "Write report", Some("quarterly numbers"), day(2), Category::Warning),
            task("5", "Review rent contract", Some("landlord"), day(2), Category::Issue),
            task("6", "Standup", None, day(1), Category::Info),
        ]
    }

    #[test]
    fn test_tasks_on_date_keeps_order() {
        let tasks = sample_tasks();
        let ids: Vec<&str> = tasks_on_date(&tasks, day(1)).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "6"]);
        assert!(tasks_on_date(&tasks, day(3)).is_empty());
    }

    #[test]
    fn test_filtered_list_combines_predicates() {
        let tasks = sample_tasks();

        let all = filtered_task_list(&tasks, day(1), FilterCategory::All, "");
        assert_eq!(all.len(), 4);

        let issues = filtered_task_list(&tasks, day(1), FilterCategory::Only(Category::Issue), "");
        assert_eq!(issues.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["2"]);

        // "rent" hits a title on day 1 and a description ("RENTAL"); day 2 is excluded.
        let rent = filtered_task_list(&tasks, day(1), FilterCategory::All, "Rent");
        assert_eq!(rent.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["2", "3"]);

        let none = filtered_task_list(&tasks, day(1), FilterCategory::Only(Category::Warning), "rent");
        assert!(none.is_empty());
    }

    #[test]
    fn test_filtered_list_is_exact_selection() {
        let tasks = sample_tasks();
        let filters = [
            FilterCategory::All,
            FilterCategory::Only(Category::Success),
            FilterCategory::Only(Category::Warning),
            FilterCategory::Only(Category::Issue),
            FilterCategory::Only(Category::Info),
        ];

        for date in [day(1), day(2), day(3)] {
            for filter in filters {
                for term in ["", "rent", "TASK", "zzz"] {
                    let result = filtered_task_list(&tasks, date, filter, term);
                    let expected: Vec<&Task> = tasks
                        .iter()
                        .filter(|t| t.date == date && filter.matches(t.category) && matches_search(t, term))
                        .collect();
                    assert_eq!(result, expected, "date={} filter={} term={}", date, filter, term);
                }
            }
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let t = task("1", "Pay Rent", Some("Before the FIFTH"), day(1), Category::Issue);
        assert!(matches_search(&t, "pay rent"));
        assert!(matches_search(&t, "fifth"));
        assert!(matches_search(&t, "AY RE"));
        assert!(!matches_search(&t, "sixth"));
    }

    #[test]
    fn test_month_calendar_groups_by_day() {
        let tasks = sample_tasks();
        let days = month_calendar(&tasks, 2024, 1);
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].date, day(1));
        assert_eq!(days[0].tasks.len(), 4);
        assert_eq!(days[1].tasks.len(), 2);
        assert_eq!(days.iter().map(|d| d.tasks.len()).sum::<usize>(), tasks.len());
    }
}
