use serde::Serialize;

use crate::model::Todo;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub description: String,
    pub creation_date: String,
}

impl From<&Todo> for TodoJson {
    fn from(todo: &Todo) -> Self {
        TodoJson {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
            description: todo.description.clone(),
            creation_date: todo.creation_date.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct TodoListJson {
    pub count: usize,
    pub todos: Vec<TodoJson>,
}
