//! Todo List Controller
//!
//! Owns the todo list, the draft form fields and the selection set.
//! Every change to the list is written back to storage.

use std::collections::BTreeSet;

use persisted_cell::{PersistedCell, StorageBackend};
use thiserror::Error;

use crate::models::{seed_todos, TodoId, TodoRecord};

/// Storage key holding the serialized list
pub const STORAGE_KEY: &str = "todos";

/// Draft rejected by `TodoList::add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a todo title")]
    MissingTitle,
    #[error("Please enter a todo description")]
    MissingDescription,
}

pub struct TodoList<S> {
    todos: PersistedCell<Vec<TodoRecord>, S>,
    selected: BTreeSet<TodoId>,
    draft_title: String,
    draft_description: String,
    /// `None` once the counter has run past `u64::MAX`
    next_id: Option<TodoId>,
}

impl<S: StorageBackend> TodoList<S> {
    /// Load the list from `storage`, seeding it on first run
    pub fn open(storage: S) -> Self {
        let todos = PersistedCell::open(storage, STORAGE_KEY, seed_todos);
        let next_id = todos.get().iter().map(|t| t.id).max().unwrap_or(0).checked_add(1);
        Self {
            todos,
            selected: BTreeSet::new(),
            draft_title: String::new(),
            draft_description: String::new(),
            next_id,
        }
    }

    pub fn todos(&self) -> &[TodoRecord] {
        self.todos.get()
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    pub fn set_draft_title(&mut self, title: String) {
        self.draft_title = title;
    }

    pub fn set_draft_description(&mut self, description: String) {
        self.draft_description = description;
    }

    /// Append a todo built from the drafts and clear them
    ///
    /// Drafts and list are left untouched when validation fails.
    pub fn add(&mut self) -> Result<TodoId, ValidationError> {
        if self.draft_title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.draft_description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let id = self.allocate_id();
        let todo = TodoRecord::new(
            id,
            std::mem::take(&mut self.draft_title),
            std::mem::take(&mut self.draft_description),
        );
        self.todos.update(|todos| todos.push(todo));
        Ok(id)
    }

    /// Next counter value, or the smallest free id once the counter is exhausted
    fn allocate_id(&mut self) -> TodoId {
        match self.next_id {
            Some(id) => {
                self.next_id = id.checked_add(1);
                id
            }
            None => {
                let todos = self.todos.get();
                (1..=TodoId::MAX)
                    .find(|id| !todos.iter().any(|t| t.id == *id))
                    .unwrap_or(0)
            }
        }
    }

    /// Flip completion of one todo, returns false if no todo has `id`
    pub fn toggle(&mut self, id: TodoId) -> bool {
        if !self.todos.get().iter().any(|t| t.id == id) {
            return false;
        }
        self.todos.update(|todos| {
            todos.iter_mut()
                .filter(|t| t.id == id)
                .for_each(|t| t.completed = !t.completed);
        });
        true
    }

    /// Add `id` to the selection or remove it, returns whether it is now selected
    pub fn toggle_selected(&mut self, id: TodoId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: TodoId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn can_delete(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Remove all selected todos and clear the selection
    ///
    /// Returns the number removed, or `None` when nothing was selected.
    pub fn delete_selected(&mut self) -> Option<usize> {
        if self.selected.is_empty() {
            return None;
        }
        let selected = std::mem::take(&mut self.selected);
        let removed = self.todos.update(|todos| {
            let before = todos.len();
            todos.retain(|t| !selected.contains(&t.id));
            before - todos.len()
        });
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persisted_cell::{load, MemoryStorage, StorageError};

    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn stored(storage: &MemoryStorage) -> Vec<TodoRecord> {
        load(storage, STORAGE_KEY).unwrap().unwrap()
    }

    fn ids<S: StorageBackend>(list: &TodoList<S>) -> Vec<TodoId> {
        list.todos().iter().map(|t| t.id).collect()
    }

    fn add(list: &mut TodoList<MemoryStorage>, title: &str, description: &str) -> Result<TodoId, ValidationError> {
        list.set_draft_title(title.to_string());
        list.set_draft_description(description.to_string());
        list.add()
    }

    #[test]
    fn test_first_run_is_seeded() {
        let storage = MemoryStorage::new();
        let list = TodoList::open(storage.clone());

        let titles: Vec<_> = list.todos().iter().map(|t| (t.title.as_str(), t.completed)).collect();
        assert_eq!(titles, vec![
            ("Buy groceries", false),
            ("Finish homework", true),
            ("Walk the dog", false),
        ]);
        assert_eq!(stored(&storage), seed_todos());
    }

    #[test]
    fn test_malformed_storage_is_seeded() {
        let storage = MemoryStorage::with_slot(STORAGE_KEY, "[{\"id\":");
        let list = TodoList::open(storage);
        assert_eq!(list.todos(), seed_todos().as_slice());
    }

    #[test]
    fn test_reopen_restores_list() {
        let storage = MemoryStorage::new();
        let mut list = TodoList::open(storage.clone());
        let id = add(&mut list, "Read", "Chapter 4").unwrap();
        list.toggle(1);

        let reopened = TodoList::open(storage);
        assert_eq!(reopened.todos(), list.todos());
        assert_eq!(ids(&reopened), vec![1, 2, 3, id]);
    }

    #[test]
    fn test_add_appends_at_tail() {
        let storage = MemoryStorage::new();
        let mut list = TodoList::open(storage.clone());

        let id = add(&mut list, "Call mom", "Sunday afternoon").unwrap();

        assert_eq!(list.todos().len(), 4);
        let last = list.todos().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "Call mom");
        assert_eq!(last.description, "Sunday afternoon");
        assert!(!last.completed);
        assert_eq!(list.draft_title(), "");
        assert_eq!(list.draft_description(), "");
        assert_eq!(stored(&storage).len(), 4);
    }

    #[test]
    fn test_add_ids_are_unique() {
        let mut list = TodoList::open(MemoryStorage::new());
        let a = add(&mut list, "a", "a").unwrap();
        let b = add(&mut list, "b", "b").unwrap();

        assert!(b > a);
        assert!(a > 3);
    }

    #[test]
    fn test_add_after_largest_possible_id() {
        let storage = MemoryStorage::with_slot(
            STORAGE_KEY,
            r#"[{"id":18446744073709551615,"title":"a","description":"b","completed":false}]"#,
        );
        let mut list = TodoList::open(storage.clone());

        let a = add(&mut list, "next", "one").unwrap();
        let b = add(&mut list, "and", "another").unwrap();

        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(ids(&list), vec![u64::MAX, 1, 2]);
        assert_eq!(stored(&storage).len(), 3);
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let mut list = TodoList::open(MemoryStorage::new());

        assert_eq!(add(&mut list, "   ", "something"), Err(ValidationError::MissingTitle));
        assert_eq!(list.todos().len(), 3);
        assert_eq!(list.draft_description(), "something");
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut list = TodoList::open(MemoryStorage::new());

        assert_eq!(add(&mut list, "Title", "\t"), Err(ValidationError::MissingDescription));
        assert_eq!(list.todos().len(), 3);
        assert_eq!(list.draft_title(), "Title");
    }

    #[test]
    fn test_title_checked_before_description() {
        let mut list = TodoList::open(MemoryStorage::new());
        let err = add(&mut list, "", "").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a todo title");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let storage = MemoryStorage::new();
        let mut list = TodoList::open(storage.clone());
        let before = list.todos().to_vec();

        assert!(list.toggle(1));
        assert!(list.todos()[0].completed);
        assert_eq!(&list.todos()[1..], &before[1..]);
        assert!(stored(&storage)[0].completed);

        assert!(list.toggle(1));
        assert_eq!(list.todos(), before.as_slice());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = TodoList::open(MemoryStorage::new());
        assert!(!list.toggle(99));
        assert_eq!(list.todos(), seed_todos().as_slice());
    }

    #[test]
    fn test_select_then_deselect() {
        let mut list = TodoList::open(MemoryStorage::new());

        assert!(list.toggle_selected(2));
        assert!(list.is_selected(2));
        assert!(list.can_delete());

        assert!(!list.toggle_selected(2));
        assert!(!list.is_selected(2));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_delete_selected_keeps_order() {
        let storage = MemoryStorage::new();
        let mut list = TodoList::open(storage.clone());
        list.toggle_selected(2);

        assert_eq!(list.delete_selected(), Some(1));
        assert_eq!(ids(&list), vec![1, 3]);
        assert_eq!(list.selected_count(), 0);
        assert_eq!(stored(&storage).iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_delete_with_empty_selection_is_noop() {
        let mut list = TodoList::open(MemoryStorage::new());
        assert!(!list.can_delete());
        assert_eq!(list.delete_selected(), None);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_broken_storage_does_not_block() {
        let mut list = TodoList::open(BrokenStorage);
        assert_eq!(list.todos(), seed_todos().as_slice());

        list.set_draft_title("Title".to_string());
        list.set_draft_description("Body".to_string());
        assert!(list.add().is_ok());
        list.toggle_selected(1);
        assert_eq!(list.delete_selected(), Some(1));
        assert_eq!(list.todos().len(), 3);
    }
}
