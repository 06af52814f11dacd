//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod system;
pub mod todo;

pub use system::EnvCheckDto;
pub use todo::{CreateTodoDto, CreatedTodoDto, TodoResponseDto, UpdateTodoDto};
