pub mod admin;
pub mod broadcast;
pub mod callback;
pub mod command;
pub mod ui;

pub use broadcast::{PendingBroadcasts, admin_command_handler};
pub use callback::callback_handler;
pub use command::command_handler;
