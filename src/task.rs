//! Task data structure as the remote API emits it.
//!
//! The server owns every task; the client only ever holds a transient copy
//! that is replaced wholesale on each reload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::Priority;

/// A single to-do item on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    /// The backend stores notes as nullable; a missing or null value reads
    /// as the empty string here.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
}

/// Tolerate `"notes": null` in server responses.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_server_task() {
        let task: Task = serde_json::from_str(
            r#"{"id":1,"title":"Buy milk","notes":"","priority":2,"done":false}"#,
        )
        .unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.done);
    }

    #[test]
    fn test_null_notes_and_missing_priority() {
        let task: Task =
            serde_json::from_str(r#"{"id":7,"title":"Call dentist","notes":null,"done":true}"#)
                .unwrap();
        assert_eq!(task.notes, "");
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.done);
    }
}
