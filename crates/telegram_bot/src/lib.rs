//! Telegram front end.
//!
//! The bot is a thin shell: lines are parsed and formatted by `ledger`,
//! recorded transactions are relayed to the spreadsheet by `sheets`.

use ledger::Formatter;
use sheets::SheetsClient;
use teloxide::prelude::*;

mod commands;
mod handlers;

const DEFAULT_CURRENCY: &str = "$";

#[derive(Clone)]
pub struct ConfigParameters {
    allowed_users: Option<Vec<UserId>>,
    formatter: Formatter,
    sheets: SheetsClient,
}

pub struct Bot {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    formatter: Formatter,
    sheets: SheetsClient,
}

impl Bot {
    pub fn new(
        token: &str,
        allowed_users: Option<Vec<UserId>>,
        sheets_url: &str,
        formatter: Formatter,
    ) -> Result<Self, String> {
        let sheets = SheetsClient::new(sheets_url)
            .map_err(|err| format!("failed to build http client: {err}"))?;

        Ok(Self {
            token: token.to_string(),
            allowed_users,
            formatter,
            sheets,
        })
    }

    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let parameters = ConfigParameters {
            allowed_users: self.allowed_users.clone(),
            formatter: self.formatter.clone(),
            sheets: self.sheets.clone(),
        };

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<commands::Command>()
                    .endpoint(handlers::handle_command),
            )
            .branch(Update::filter_message().endpoint(handlers::handle_message));

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default, Debug)]
pub struct BotBuilder {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    sheets_url: String,
    currency: Option<String>,
    accounts: Vec<String>,
    categories: Vec<String>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn allowed_users(mut self, allowed_users: Vec<u64>) -> BotBuilder {
        if !allowed_users.is_empty() {
            self.allowed_users = Some(allowed_users.into_iter().map(UserId).collect());
        }
        self
    }

    pub fn sheets_url(mut self, url: &str) -> BotBuilder {
        self.sheets_url = url.to_string();
        self
    }

    pub fn currency(mut self, currency: &str) -> BotBuilder {
        self.currency = Some(currency.to_string());
        self
    }

    pub fn accounts(mut self, accounts: Vec<String>) -> BotBuilder {
        self.accounts = accounts;
        self
    }

    pub fn categories(mut self, categories: Vec<String>) -> BotBuilder {
        self.categories = categories;
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");
        let currency = self
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let formatter = Formatter::new(&currency)
            .accounts(self.accounts)
            .categories(self.categories);

        Bot::new(&self.token, self.allowed_users, &self.sheets_url, formatter)
    }
}
