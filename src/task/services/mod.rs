//! Application services for task CRUD orchestration.
//!
//! Wire-format request and response shapes live in [`dto`]; [`mapper`]
//! converts between them and the domain; [`TaskService`] applies the
//! business rules around the repository.

pub mod dto;
pub mod mapper;
mod pagination;
mod tasks;
mod validation;

pub use dto::{TaskListQuery, TaskRequest, TaskResponse};
pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
pub use validation::{ValidatedTaskRequest, ValidationErrors};
