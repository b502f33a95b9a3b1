//! Command structs

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "Show the welcome message.")]
    Start,
    #[command(description = "Show the usage guide with examples.")]
    Help,
    #[command(description = "List the configured accounts.")]
    Accounts,
    #[command(description = "List the configured categories.")]
    Categories,
}
