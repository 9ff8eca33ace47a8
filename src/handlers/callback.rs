use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::CallbackQuery;

use crate::config::Config;
use crate::handlers::command::send_profile;
use crate::profiles::ProfileBook;

type HandlerResult = Result<(), anyhow::Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Next,
    Prev,
}

/// Payload format is "{action}_{index}", where index is the card the
/// buttons were rendered for. Anything else came from a stale or forged
/// button and is dropped.
fn parse_nav(data: &str) -> Option<(Nav, i64)> {
    let (action, index) = data.split_once('_')?;
    let index = index.parse().ok()?;
    match action {
        "next" => Some((Nav::Next, index)),
        "prev" => Some((Nav::Prev, index)),
        _ => None,
    }
}

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    config: Arc<Config>,
    profiles: Arc<ProfileBook>,
) -> HandlerResult {
    if let Some(data) = q.data.as_deref() {
        log::info!("Received callback query with data: {}", data);

        if let Some(ref maybe_message) = q.message {
            if let Some(message) = maybe_message.regular_message() {
                match parse_nav(data) {
                    Some((Nav::Next, index)) => {
                        send_profile(&bot, message.chat.id, index + 1, &profiles, &config).await?;
                    }
                    Some((Nav::Prev, index)) => {
                        send_profile(&bot, message.chat.id, index - 1, &profiles, &config).await?;
                    }
                    None => {
                        log::debug!("Ignoring malformed callback payload: {}", data);
                    }
                }
            }
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
