pub mod shared_task_list;
pub mod task_data;
pub mod task_request;

pub use shared_task_list::{SharedTaskList, TaskDataVec};
pub use task_data::{Task, TaskPriority, TaskStatus};
pub use task_request::{CreateTaskRequest, UpdateTaskRequest};
