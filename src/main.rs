use std::sync::Arc;

use anyhow::Error;
use teloxide::dptree;
use teloxide::prelude::*;

use crate::commands::{AdminCommand, Command};
use crate::config::Config;
use crate::handlers::{
    PendingBroadcasts, admin_command_handler, callback_handler, command_handler,
};
use crate::profiles::ProfileBook;
use crate::subscribers::SubscriberRegistry;

mod commands;
mod config;
mod handlers;
mod profiles;
mod subscribers;
mod web;

#[tokio::main]
async fn main() -> Result<(), Error> {
    use log::LevelFilter;
    use std::env;
    use std::io::Write;

    dotenv::dotenv().ok();

    // Console log level from env
    let console_level_str = env::var("CONSOLE_LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let console_level = match console_level_str.to_uppercase().as_str() {
        "ERROR" => LevelFilter::Error,
        "DEBUG" => LevelFilter::Debug,
        _ => LevelFilter::Info, // Default to Info
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder
        .filter(None, console_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::info!("Starting profile card bot...");

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            log::error!("Failed to load environment: {}", e);
            return Err(e);
        }
    };

    let profiles = match ProfileBook::load(std::path::Path::new(config::PROFILES_FILE)) {
        Ok(profiles) => Arc::new(profiles),
        Err(e) => {
            log::error!("Failed to load profiles: {}", e);
            return Err(e);
        }
    };
    log::info!("Loaded {} profiles", profiles.len());

    let subscribers = Arc::new(SubscriberRegistry::load(config::SUBSCRIBERS_FILE));
    log::info!("Restored {} subscribers", subscribers.count().await);

    if config.admin_id.is_empty() {
        log::warn!("ADMIN_ID is not set; broadcast commands are disabled");
    }

    let pending = Arc::new(PendingBroadcasts::new());

    let port = config.port;
    let web_server = tokio::spawn(async move {
        if let Err(e) = web::serve(port).await {
            log::error!("Web server failed: {}", e);
        }
    });
    let keepalive = web::spawn_keepalive(config.self_url.clone());

    let bot = Bot::new(config.bot_token.clone());

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<AdminCommand>()
                .endpoint(admin_command_handler),
        )
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    log::info!("Starting to dispatch updates...");

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config, profiles, subscribers, pending])
        .enable_ctrlc_handler()
        .build();

    tokio::select! {
        _ = dispatcher.dispatch() => {},
        _ = tokio::signal::ctrl_c() => {
            log::info!("Received Ctrl+C, shutting down...");
        }
    }

    keepalive.abort();
    web_server.abort();

    log::info!("Bot shutdown complete");
    Ok(())
}
