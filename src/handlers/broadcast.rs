use std::collections::HashMap;
use std::sync::Arc;

use teloxide::prelude::*;
use tokio::sync::Mutex;

use crate::commands::AdminCommand;
use crate::config::Config;
use crate::handlers::admin::is_admin;
use crate::subscribers::SubscriberRegistry;

type HandlerResult = Result<(), anyhow::Error>;

/// Staged broadcast texts, keyed by the chat that staged them. Only ever
/// touched behind the admin check, so at most one entry exists.
#[derive(Default)]
pub struct PendingBroadcasts {
    staged: Mutex<HashMap<i64, String>>,
}

impl PendingBroadcasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staging again before confirming replaces the previous text.
    pub async fn stage(&self, chat_id: ChatId, text: String) {
        self.staged.lock().await.insert(chat_id.0, text);
    }

    pub async fn take(&self, chat_id: ChatId) -> Option<String> {
        self.staged.lock().await.remove(&chat_id.0)
    }
}

pub async fn admin_command_handler(
    bot: Bot,
    msg: Message,
    cmd: AdminCommand,
    config: Arc<Config>,
    subscribers: Arc<SubscriberRegistry>,
    pending: Arc<PendingBroadcasts>,
) -> HandlerResult {
    // No reply for anyone else: the commands stay invisible.
    if !is_admin(&msg, &config) {
        return Ok(());
    }

    match cmd {
        AdminCommand::Preview { text } => {
            pending.stage(msg.chat.id, text.clone()).await;

            bot.send_message(msg.chat.id, format!("📋 Предпросмотр:\n\n{}", text))
                .await?;
            bot.send_message(msg.chat.id, "Если всё верно, отправь команду /broadcast_confirm")
                .await?;
        }
        AdminCommand::BroadcastConfirm => {
            let Some(message) = pending.take(msg.chat.id).await else {
                bot.send_message(msg.chat.id, "Нет сообщения для рассылки.")
                    .await?;
                return Ok(());
            };

            let recipients = subscribers.snapshot().await;
            let mut failed = 0usize;
            for chat_id in &recipients {
                // A blocked or vanished recipient must not abort the run.
                if let Err(e) = bot.send_message(*chat_id, &message).await {
                    log::debug!("Broadcast to {} failed: {}", chat_id, e);
                    failed += 1;
                }
            }

            if failed > 0 {
                log::warn!(
                    "Broadcast reached {}/{} subscribers",
                    recipients.len() - failed,
                    recipients.len()
                );
            }

            bot.send_message(msg.chat.id, "✅ Рассылка завершена!").await?;
        }
    }

    Ok(())
}
