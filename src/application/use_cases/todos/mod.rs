//! Todo Use Cases
//!
//! One use case per operation, each issuing a single store call.

mod create_todo;
mod delete_todo;
mod list_todos;
mod update_todo;

pub use create_todo::CreateTodoUseCase;
pub use delete_todo::DeleteTodoUseCase;
pub use list_todos::{ListScope, ListTodosUseCase};
pub use update_todo::UpdateTodoUseCase;
