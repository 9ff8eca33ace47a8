use std::env;

use anyhow::{Context, Result};
use url::Url;

pub const PROFILES_FILE: &str = "profiles.json";
pub const SUBSCRIBERS_FILE: &str = "subscribers.json";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CHAT_URL: &str =
    "https://tone.affomelody.com/click?pid=109970&offer_id=25&sub1=Lovetg";

/// Everything the bot reads from the environment, collected once at
/// startup and passed around by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    /// Chat id of the one account allowed to broadcast, as the decimal
    /// string it arrives in. Empty means nobody.
    pub admin_id: String,
    pub self_url: String,
    pub port: u16,
    pub chat_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN is not set in .env")?;
        let admin_id = env::var("ADMIN_ID").unwrap_or_default();
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let self_url =
            env::var("SELF_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));
        let chat_url = env::var("CHAT_URL").unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string());
        let chat_url = Url::parse(&chat_url).context("CHAT_URL is not a valid URL")?;

        Ok(Self {
            bot_token,
            admin_id,
            self_url,
            port,
            chat_url,
        })
    }
}
