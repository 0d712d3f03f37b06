//! Domain model for the task board.
//!
//! A task is a titled unit of work with an optional description and a
//! three-valued status. Identifiers are assigned by the store; timestamps
//! come from an injected clock so behaviour stays deterministic under test.

mod error;
mod ids;
mod patch;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use patch::{FieldPatch, TaskPatch};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, timestamp};
pub use title::TaskTitle;
