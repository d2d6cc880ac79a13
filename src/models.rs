//! Frontend Models
//!
//! Data structures stored in the browser.

use serde::{Deserialize, Serialize};

/// Todo identifier
pub type TodoId = u64;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(id: TodoId, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Not Completed" }
    }
}

/// List shown on first run, or when the stored list cannot be read
pub fn seed_todos() -> Vec<TodoRecord> {
    vec![
        TodoRecord {
            id: 1,
            title: "Buy groceries".to_string(),
            description: "Buy fruits and vegetables".to_string(),
            completed: false,
        },
        TodoRecord {
            id: 2,
            title: "Finish homework".to_string(),
            description: "Complete math assignment".to_string(),
            completed: true,
        },
        TodoRecord {
            id: 3,
            title: "Walk the dog".to_string(),
            description: "Take the dog for a walk in the park".to_string(),
            completed: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let todo = TodoRecord::new(42, "Title".to_string(), "Body".to_string());
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":42,"title":"Title","description":"Body","completed":false}"#);
    }

    #[test]
    fn test_list_survives_serialization() {
        let todos = seed_todos();
        let json = serde_json::to_string(&todos).unwrap();
        let restored: Vec<TodoRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, todos);
    }

    #[test]
    fn test_status_label() {
        let mut todo = TodoRecord::new(1, "a".to_string(), "b".to_string());
        assert_eq!(todo.status_label(), "Not Completed");
        todo.completed = true;
        assert_eq!(todo.status_label(), "Completed");
    }
}
