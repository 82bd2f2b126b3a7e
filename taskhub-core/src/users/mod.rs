pub mod shared_user_list;
pub mod user_data;

pub use shared_user_list::SharedUserList;
pub use user_data::{User, UserProfile};
