//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod todo;

pub use todo::{NewTodo, SubjectId, Todo, TodoChanges, TodoId};
