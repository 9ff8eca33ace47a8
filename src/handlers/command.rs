use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::InputFile;
use teloxide::utils::command::BotCommands;

use crate::commands::Command;
use crate::config::Config;
use crate::handlers::ui::profile_keyboard;
use crate::profiles::ProfileBook;
use crate::subscribers::SubscriberRegistry;

type HandlerResult = Result<(), anyhow::Error>;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<Config>,
    profiles: Arc<ProfileBook>,
    subscribers: Arc<SubscriberRegistry>,
) -> HandlerResult {
    match cmd {
        Command::Start => {
            if let Err(e) = subscribers.register(msg.chat.id).await {
                log::error!("Failed to persist subscriber {}: {}", msg.chat.id, e);
            }
            send_profile(&bot, msg.chat.id, 0, &profiles, &config).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}

/// Renders one card: photo, caption and the navigation row. Any signed
/// index is accepted; the book wraps it onto the list.
pub async fn send_profile(
    bot: &Bot,
    chat_id: ChatId,
    index: i64,
    profiles: &ProfileBook,
    config: &Config,
) -> HandlerResult {
    let (index, profile) = profiles.get(index);

    bot.send_photo(chat_id, InputFile::url(profile.photo.clone()))
        .caption(profile.text.clone())
        .reply_markup(profile_keyboard(index, &config.chat_url))
        .await?;

    Ok(())
}
