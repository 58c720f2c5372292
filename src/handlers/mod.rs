mod todos;
mod users;

pub use todos::{complete_todo, create_todo, delete_todo, list_todos, update_todo};
pub use users::{activate_pro, get_user, register_user};
