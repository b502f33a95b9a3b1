use chrono::Local;
use teloxide::{
    prelude::*,
    types::{ParseMode, User},
};

use crate::{ConfigParameters, commands::Command};
use ledger::{ParseFailure, Reason, format};

const SAVED_NOTE: &str = "✅ Data saved to spreadsheet";
const NOT_SAVED_NOTE: &str = "⚠️ Transaction recorded but failed to save to spreadsheet";
const INVALID_AMOUNT_TEXT: &str =
    "❌ Error parsing amount.\nPlease use valid decimal format (e.g., 25.50)";

pub(crate) async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    if !is_allowed(&cfg, msg.from.as_ref()) {
        return Ok(());
    }

    let reply = match cmd {
        Command::Start => format::welcome_text().to_string(),
        Command::Help => format::help_text().to_string(),
        Command::Accounts => cfg.formatter.accounts_text(),
        Command::Categories => cfg.formatter.categories_text(),
    };
    bot.send_message(msg.chat.id, reply)
        .parse_mode(ParseMode::Markdown)
        .await?;

    Ok(())
}

pub(crate) async fn handle_message(
    bot: Bot,
    msg: Message,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    if !is_allowed(&cfg, msg.from.as_ref()) {
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };
    // Unknown commands fall through the command branch. They are dropped
    // here instead of reaching the line parser.
    if is_command_shaped(text) {
        return Ok(());
    }

    tracing::info!("Received message: {text}");
    let chat_id = msg.chat.id;

    match ledger::parse(text, Local::now().date_naive()) {
        Ok(transaction) => {
            bot.send_message(chat_id, cfg.formatter.confirmation(&transaction))
                .parse_mode(ParseMode::Markdown)
                .await?;
            tracing::info!("Parsed transaction: {transaction:?}");

            let sheets = cfg.sheets.clone();
            tokio::spawn(async move {
                let note = match sheets.send(&transaction).await {
                    Ok(()) => SAVED_NOTE,
                    Err(err) => {
                        tracing::warn!("Failed to deliver the transaction: {err}");
                        NOT_SAVED_NOTE
                    }
                };
                if let Err(err) = bot
                    .send_message(chat_id, note)
                    .parse_mode(ParseMode::Markdown)
                    .await
                {
                    tracing::warn!("Failed to send the delivery note: {err}");
                }
            });
        }
        Err(failure) => {
            tracing::debug!("Rejected line: {failure}");
            bot.send_message(chat_id, rejection_reply(&failure))
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
    }

    Ok(())
}

// The command branch matches a slash only at the very start of the text;
// anything else, leading whitespace included, is an ordinary line.
fn is_command_shaped(text: &str) -> bool {
    text.starts_with('/')
}

fn is_allowed(cfg: &ConfigParameters, from: Option<&User>) -> bool {
    let Some(from) = from else {
        return false;
    };
    match &cfg.allowed_users {
        None => true,
        Some(ids) => ids.contains(&from.id),
    }
}

/// Amount failures get their own reply; every other failure renders the
/// generic usage hint.
fn rejection_reply(failure: &ParseFailure) -> &'static str {
    match failure.reason {
        Reason::MalformedAmount => INVALID_AMOUNT_TEXT,
        Reason::NoMarker | Reason::MalformedDate | Reason::MissingFields => {
            format::rejection_text(failure)
        }
    }
}
