//! The shared in-memory task store.
//!
//! The store owns the ordered task sequence and the single lock guarding it.
//! Every public method performs its whole scan or mutation inside one
//! critical section and hands back owned copies, so callers never read the
//! shared sequence after the lock has been released.

use parking_lot::Mutex;

use crate::task::Task;

// =============================================================================
// TaskStore
// =============================================================================

/// Insertion-ordered sequence of tasks behind a mutex.
///
/// Lookups by identifier are linear scans that stop at the first match;
/// duplicate identifiers are allowed and later duplicates are unreachable
/// through id-addressed operations until the earlier one is removed.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store pre-seeded with the given tasks, in order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks.into_iter().collect()),
        }
    }

    /// Returns a snapshot of the full sequence in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.tasks.lock().clone()
    }

    /// Appends a task to the end of the sequence and returns the stored copy.
    pub fn append(&self, task: Task) -> Task {
        let mut tasks = self.tasks.lock();
        tasks.push(task.clone());
        task
    }

    /// Removes the first task with the given id, keeping the order of the
    /// remaining entries. Returns `false` (store unchanged) when nothing
    /// matched.
    pub fn remove(&self, id: &str) -> bool {
        let mut tasks = self.tasks.lock();
        match tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flips the completion flag of the first task with the given id and
    /// returns the updated record.
    pub fn toggle_done(&self, id: &str) -> Option<Task> {
        let mut tasks = self.tasks.lock();
        let task = tasks.iter_mut().find(|task| task.id == id)?;
        task.done = !task.done;
        Some(task.clone())
    }

    /// Replaces the name of the first task with the given id, leaving the
    /// other fields untouched, and returns the updated record.
    pub fn rename(&self, id: &str, name: impl Into<String>) -> Option<Task> {
        let mut tasks = self.tasks.lock();
        let task = tasks.iter_mut().find(|task| task.id == id)?;
        task.name = name.into();
        Some(task.clone())
    }

    /// Number of tasks currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn seeded_store() -> TaskStore {
        TaskStore::with_tasks([
            Task::new("1", "T1"),
            Task::new("2", "T2"),
            Task::new("3", "T3"),
        ])
    }

    mod construction {
        use super::*;

        #[rstest]
        fn new_is_empty() {
            let store = TaskStore::new();

            assert!(store.is_empty());
            assert_eq!(store.len(), 0);
        }

        #[rstest]
        fn with_tasks_preserves_seed_order() {
            let store = seeded_store();

            let ids: Vec<String> = store.list().into_iter().map(|task| task.id).collect();
            assert_eq!(ids, ["1", "2", "3"]);
        }
    }

    mod append {
        use super::*;

        #[rstest]
        fn append_returns_stored_copy() {
            let store = TaskStore::new();

            let stored = store.append(Task::new("1", "T1"));

            assert_eq!(stored, Task::new("1", "T1"));
            assert_eq!(store.list(), vec![Task::new("1", "T1")]);
        }

        #[rstest]
        fn append_keeps_insertion_order() {
            let store = TaskStore::new();
            for index in 0..5 {
                store.append(Task::new(index.to_string(), format!("task {index}")));
            }

            let ids: Vec<String> = store.list().into_iter().map(|task| task.id).collect();
            assert_eq!(ids, ["0", "1", "2", "3", "4"]);
        }

        #[rstest]
        fn duplicate_ids_are_permitted() {
            let store = TaskStore::new();
            store.append(Task::new("1", "first"));
            store.append(Task::new("1", "second"));

            assert_eq!(store.len(), 2);
        }
    }

    mod remove {
        use super::*;

        #[rstest]
        fn remove_drops_first_match_and_keeps_order() {
            let store = seeded_store();

            assert!(store.remove("2"));

            let ids: Vec<String> = store.list().into_iter().map(|task| task.id).collect();
            assert_eq!(ids, ["1", "3"]);
        }

        #[rstest]
        fn remove_unknown_id_leaves_store_unchanged() {
            let store = seeded_store();

            assert!(!store.remove("missing"));
            assert_eq!(store.len(), 3);
        }

        #[rstest]
        fn remove_with_duplicates_only_drops_the_first() {
            let store = TaskStore::with_tasks([
                Task::new("1", "first"),
                Task::new("1", "second"),
            ]);

            assert!(store.remove("1"));

            let remaining = store.list();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].name, "second");
        }
    }

    mod toggle_done {
        use super::*;

        #[rstest]
        fn toggle_flips_flag_and_returns_updated_record() {
            let store = seeded_store();

            let updated = store.toggle_done("1").unwrap();

            assert!(updated.done);
            assert_eq!(updated.id, "1");
            assert_eq!(updated.name, "T1");
        }

        #[rstest]
        fn toggle_twice_restores_original_value() {
            let store = seeded_store();

            store.toggle_done("1").unwrap();
            let restored = store.toggle_done("1").unwrap();

            assert!(!restored.done);
        }

        #[rstest]
        fn toggle_unknown_id_returns_none() {
            let store = seeded_store();

            assert_eq!(store.toggle_done("missing"), None);
        }

        #[rstest]
        fn toggle_with_duplicates_hits_the_first_only() {
            let store = TaskStore::with_tasks([
                Task::new("1", "first"),
                Task::new("1", "second"),
            ]);

            store.toggle_done("1").unwrap();

            let tasks = store.list();
            assert!(tasks[0].done);
            assert!(!tasks[1].done);
        }
    }

    mod rename {
        use super::*;

        #[rstest]
        fn rename_changes_name_only() {
            let store = seeded_store();
            store.toggle_done("1").unwrap();

            let updated = store.rename("1", "renamed").unwrap();

            assert_eq!(updated.id, "1");
            assert_eq!(updated.name, "renamed");
            assert!(updated.done);
        }

        #[rstest]
        fn rename_unknown_id_returns_none() {
            let store = seeded_store();

            assert_eq!(store.rename("missing", "renamed"), None);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn list_after_appends_preserves_order(names in proptest::collection::vec(".{0,12}", 0..16)) {
                let store = TaskStore::new();
                for (index, name) in names.iter().enumerate() {
                    store.append(Task::new(index.to_string(), name.clone()));
                }

                let listed = store.list();
                prop_assert_eq!(listed.len(), names.len());
                for (index, task) in listed.iter().enumerate() {
                    prop_assert_eq!(&task.id, &index.to_string());
                    prop_assert_eq!(&task.name, &names[index]);
                }
            }

            #[test]
            fn remove_deletes_exactly_one_entry(ids in proptest::collection::vec("[0-9]{1,2}", 1..16), pick in 0usize..16) {
                let store = TaskStore::with_tasks(
                    ids.iter().map(|id| Task::new(id.clone(), "task")),
                );
                let target = ids[pick % ids.len()].clone();

                prop_assert!(store.remove(&target));
                prop_assert_eq!(store.len(), ids.len() - 1);
            }

            #[test]
            fn toggle_twice_is_identity(done in proptest::bool::ANY) {
                let store = TaskStore::with_tasks([Task {
                    id: "1".to_string(),
                    name: "T1".to_string(),
                    done,
                }]);

                store.toggle_done("1").unwrap();
                let restored = store.toggle_done("1").unwrap();

                prop_assert_eq!(restored.done, done);
            }
        }
    }
}
