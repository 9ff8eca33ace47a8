use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "show the profile cards.")]
    Start,
    #[command(description = "display this text.")]
    Help,
}

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "snake_case")]
pub enum AdminCommand {
    #[command(description = "stage a broadcast: /preview <text>")]
    Preview { text: String },
    #[command(description = "send the staged broadcast to every subscriber.")]
    BroadcastConfirm,
}
