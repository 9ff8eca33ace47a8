use teloxide::prelude::*;

use crate::config::Config;

/// Admin commands are keyed to a single chat. ADMIN_ID arrives from the
/// environment as text, so the comparison stays on the decimal string.
pub fn is_admin(msg: &Message, config: &Config) -> bool {
    is_admin_id(msg.chat.id.0, &config.admin_id)
}

fn is_admin_id(chat_id: i64, admin_id: &str) -> bool {
    !admin_id.is_empty() && chat_id.to_string() == admin_id
}
