#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use taskcal::libs::analytics::{category_counts, completion_stats};
    use taskcal::libs::persistence::{MemorySlot, Persistence};
    use taskcal::libs::query::tasks_on_date;
    use taskcal::libs::store::{StoreState, TaskStore, SEED_TASK_ID};
    use taskcal::libs::task::{Category, FilterCategory, NewTask, TaskPatch};
    use test_context::{test_context, TestContext};

    /// Store seeded with the sample task dated 2024-01-01.
    struct StoreTestContext {
        store: TaskStore<MemorySlot>,
        day: NaiveDate,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            StoreTestContext {
                store: TaskStore::open_at(MemorySlot::new(), day),
                day,
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_default_state_is_seeded(ctx: &mut StoreTestContext) {
        let store = &ctx.store;
        assert_eq!(store.tasks().len(), 1);

        let seed = &store.tasks()[0];
        assert_eq!(seed.id, SEED_TASK_ID);
        assert_eq!(seed.title, "Sample Task");
        assert_eq!(seed.date, ctx.day);
        assert_eq!(seed.category, Category::Info);
        assert_eq!(store.selected_date(), ctx.day);
        assert_eq!(store.filter_category(), FilterCategory::All);

        // Opening does not write.
        assert_eq!(store.persistence().writes(), 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_task_scenario(ctx: &mut StoreTestContext) {
        let id = ctx.store.add_task(NewTask::new("Pay rent", ctx.day, Category::Issue));

        let on_day = tasks_on_date(ctx.store.tasks(), ctx.day);
        assert_eq!(on_day.len(), 2);
        assert_eq!(on_day[0].id, SEED_TASK_ID);
        assert_eq!(on_day[1].id, id);

        let counts = category_counts(ctx.store.tasks(), FilterCategory::All);
        assert_eq!(counts.to_array(), [0, 0, 1, 1]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_then_completion_scenario(ctx: &mut StoreTestContext) {
        ctx.store.add_task(NewTask::new("Pay rent", ctx.day, Category::Issue));
        assert!(ctx.store.edit_task(SEED_TASK_ID, &TaskPatch::default().category(Category::Success)));

        let stats = completion_stats(ctx.store.tasks(), FilterCategory::All);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed_count, 1);
        assert_eq!(stats.completion_rate, 50.0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_unknown_id_leaves_collection(ctx: &mut StoreTestContext) {
        ctx.store.add_task(NewTask::new("Pay rent", ctx.day, Category::Issue));
        let before = ctx.store.tasks().to_vec();

        assert!(!ctx.store.delete_task("999"));
        assert_eq!(ctx.store.tasks(), before.as_slice());

        // Deleting persists even when nothing matched.
        assert_eq!(ctx.store.persistence().writes(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut StoreTestContext) {
        let id = ctx.store.add_task(NewTask::new("Pay rent", ctx.day, Category::Issue));

        assert!(ctx.store.delete_task(&id));
        let after_first = ctx.store.tasks().to_vec();
        assert!(!ctx.store.delete_task(&id));
        assert_eq!(ctx.store.tasks(), after_first.as_slice());
        assert_eq!(after_first.len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_rapid_adds_get_distinct_ids(ctx: &mut StoreTestContext) {
        let ids: Vec<String> = (0..500)
            .map(|i| ctx.store.add_task(NewTask::new(&format!("Task {}", i), ctx.day, Category::Info)))
            .collect();

        let unique: HashSet<&String> = ctx.store.tasks().iter().map(|t| &t.id).collect();
        assert_eq!(unique.len(), ctx.store.tasks().len());
        assert_eq!(ids.len(), 500);

        // Insertion order is kept.
        let titles: Vec<&str> = ctx.store.tasks()[1..].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"Task 0"));
        assert_eq!(titles.last(), Some(&"Task 499"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_keeps_id_and_created_at(ctx: &mut StoreTestContext) {
        let id = ctx.store.add_task(NewTask::new("Pay rent", ctx.day, Category::Issue).with_description("Before the 5th"));
        let created_at = ctx.store.task(&id).unwrap().created_at;

        let next_day = ctx.day.succ_opt().unwrap();
        for patch in [
            TaskPatch::default().title("Pay the rent"),
            TaskPatch::default().date(next_day),
            TaskPatch::default().description(None).category(Category::Success),
        ] {
            assert!(ctx.store.edit_task(&id, &patch));
        }

        let task = ctx.store.task(&id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.title, "Pay the rent");
        assert_eq!(task.date, next_day);
        assert_eq!(task.description, None);
        assert_eq!(task.category, Category::Success);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_unknown_id_is_noop(ctx: &mut StoreTestContext) {
        let before = ctx.store.state().clone();
        assert!(!ctx.store.edit_task("999", &TaskPatch::default().title("Ghost")));
        assert_eq!(ctx.store.state(), &before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_every_mutation_writes_snapshot(ctx: &mut StoreTestContext) {
        let id = ctx.store.add_task(NewTask::new("Pay rent", ctx.day, Category::Issue));
        ctx.store.edit_task(&id, &TaskPatch::default().category(Category::Warning));
        ctx.store.set_selected_date(ctx.day.succ_opt().unwrap());
        ctx.store.set_filter_category(FilterCategory::Only(Category::Warning));
        ctx.store.delete_task(&id);
        assert_eq!(ctx.store.persistence().writes(), 5);

        // The slot holds exactly the latest state.
        let stored = ctx.store.persistence().load().unwrap();
        let restored = stored.merge_over(StoreState::seed(ctx.day));
        assert_eq!(&restored, ctx.store.state());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_selection_is_not_validated(ctx: &mut StoreTestContext) {
        let far = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        ctx.store.set_selected_date(far);
        ctx.store.set_filter_category(FilterCategory::Only(Category::Issue));

        assert_eq!(ctx.store.selected_date(), far);
        assert_eq!(ctx.store.filter_category(), FilterCategory::Only(Category::Issue));
        // Selection never touches tasks.
        assert_eq!(ctx.store.tasks().len(), 1);
    }

    #[test]
    fn test_reopen_restores_state() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut store = TaskStore::open_at(MemorySlot::new(), day);
        let id = store.add_task(NewTask::new("Pay rent", day, Category::Issue));
        store.set_filter_category(FilterCategory::Only(Category::Issue));

        let slot = store.persistence().clone();
        let reopened = TaskStore::open_at(slot, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert_eq!(reopened.state(), store.state());
        assert!(reopened.task(&id).is_some());

        // New ids never collide with restored ones.
        let mut reopened = reopened;
        let new_id = reopened.add_task(NewTask::new("Another", day, Category::Info));
        assert_ne!(new_id, id);
    }
}
