use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A to-do item owned by a single user.
///
/// Field names are camelCase on the wire (`createdAt`, `userId`) to match the
/// JSON the client consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
}

/// Body of a task-creation request. Both fields are required; they are
/// `Option` so that absence surfaces as a `MissingField` error instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct TaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of a task-update request. Every field is independently optional;
/// only the fields present are applied, the rest stay untouched.
#[derive(Debug, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Builds a fresh task: not completed, stamped with the current time.
    pub fn new(id: i32, user_id: i32, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at: Utc::now(),
            user_id,
        }
    }
}
