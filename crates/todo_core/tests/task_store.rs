use todo_core::{
    ConfirmPrompt, Confirmer, Decision, FixedDecision, InMemoryTaskRepository, RemoveOutcome,
    TaskId, TaskService, TaskServiceError, DUPLICATE_TITLE_NOTICE, REMOVE_TASK_PROMPT,
};

fn store() -> TaskService<InMemoryTaskRepository> {
    TaskService::new(InMemoryTaskRepository::new())
}

fn titles(store: &TaskService<InMemoryTaskRepository>) -> Vec<String> {
    store.tasks().into_iter().map(|task| task.title).collect()
}

struct RecordingConfirmer {
    answer: Decision,
    prompts: Vec<ConfirmPrompt>,
}

impl Confirmer for RecordingConfirmer {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        self.prompts.push(*prompt);
        self.answer
    }
}

#[test]
fn distinct_titles_are_appended_in_call_order() {
    let mut store = store();
    for title in ["one", "two", "three", "four"] {
        store.add_task(title).unwrap();
    }

    assert_eq!(store.task_count(), 4);
    assert_eq!(titles(&store), vec!["one", "two", "three", "four"]);
    assert!(store.tasks().iter().all(|task| !task.done));
}

#[test]
fn ids_are_unique_under_rapid_creation() {
    let mut store = store();
    let ids: Vec<TaskId> = (0..200)
        .map(|n| store.add_task(format!("task {n}")).unwrap())
        .collect();

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn duplicate_title_is_rejected_without_change() {
    let mut store = store();
    store.add_task("Buy milk").unwrap();
    let before = store.tasks();

    let err = store.add_task("Buy milk").unwrap_err();
    assert_eq!(err, TaskServiceError::DuplicateTitle("Buy milk".to_string()));
    assert_eq!(err.notice(), DUPLICATE_TITLE_NOTICE);
    assert_eq!(store.tasks(), before);
}

#[test]
fn duplicate_check_is_exact_match() {
    let mut store = store();
    store.add_task("Buy milk").unwrap();

    store.add_task("buy milk").unwrap();
    store.add_task("Buy milk ").unwrap();
    assert_eq!(store.task_count(), 3);
}

#[test]
fn toggle_twice_restores_and_leaves_others_alone() {
    let mut store = store();
    let first = store.add_task("a").unwrap();
    let second = store.add_task("b").unwrap();
    store.toggle_task_done(second);

    assert!(store.toggle_task_done(first));
    assert!(store.get_task(first).unwrap().done);
    assert!(store.get_task(second).unwrap().done);

    assert!(store.toggle_task_done(first));
    assert!(!store.get_task(first).unwrap().done);
    assert!(store.get_task(second).unwrap().done);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut store = store();
    store.add_task("a").unwrap();
    let before = store.tasks();

    assert!(!store.toggle_task_done(TaskId::new(1)));
    assert_eq!(store.tasks(), before);
}

#[test]
fn remove_declined_leaves_list_unchanged() {
    let mut store = store();
    let id = store.add_task("a").unwrap();
    let before = store.tasks();

    let outcome = store.remove_task(id, &mut FixedDecision(Decision::Decline));
    assert_eq!(outcome, RemoveOutcome::Declined);
    assert_eq!(store.tasks(), before);
}

#[test]
fn remove_confirmed_removes_exactly_one_task() {
    let mut store = store();
    let a = store.add_task("a").unwrap();
    let b = store.add_task("b").unwrap();
    let c = store.add_task("c").unwrap();

    let mut confirmer = RecordingConfirmer {
        answer: Decision::Confirm,
        prompts: Vec::new(),
    };
    assert_eq!(store.remove_task(b, &mut confirmer), RemoveOutcome::Removed);

    assert_eq!(confirmer.prompts, vec![REMOVE_TASK_PROMPT]);
    let ids: Vec<TaskId> = store.tasks().into_iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn remove_stale_id_still_prompts_then_noops() {
    let mut store = store();
    store.add_task("a").unwrap();

    let mut confirmer = RecordingConfirmer {
        answer: Decision::Confirm,
        prompts: Vec::new(),
    };
    let outcome = store.remove_task(TaskId::new(42), &mut confirmer);

    assert_eq!(outcome, RemoveOutcome::NotFound);
    assert_eq!(confirmer.prompts.len(), 1);
    assert_eq!(store.task_count(), 1);
}

#[test]
fn edit_changes_only_title() {
    let mut store = store();
    let id = store.add_task("draft").unwrap();
    store.toggle_task_done(id);

    assert!(store.edit_task(id, "final"));
    let task = store.get_task(id).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.title, "final");
    assert!(task.done);
}

#[test]
fn edit_unknown_id_is_noop() {
    let mut store = store();
    store.add_task("a").unwrap();
    let before = store.tasks();

    assert!(!store.edit_task(TaskId::new(3), "b"));
    assert_eq!(store.tasks(), before);
}

#[test]
fn edit_allows_duplicate_titles() {
    let mut store = store();
    store.add_task("a").unwrap();
    let b = store.add_task("b").unwrap();

    assert!(store.edit_task(b, "a"));
    assert_eq!(titles(&store), vec!["a", "a"]);
}
