pub mod response;
pub mod task;
pub mod user;

pub use response::ApiResponse;
pub use task::{Task, TaskInput, TaskUpdate};
pub use user::{DebugUser, User, UserProfile};
