//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod todos;

pub use todos::{CreateTodoUseCase, DeleteTodoUseCase, ListScope, ListTodosUseCase, UpdateTodoUseCase};
