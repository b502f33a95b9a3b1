//! Reply texts. Everything here is a pure function of the model; sending is
//! the transport's job.

use crate::{
    error::{ParseFailure, Reason},
    transaction::{Entry, Transaction, Transfer},
};

/// Renders confirmations and the advisory-list texts. Holds the configured
/// currency symbol and the advisory account/category names; none of them
/// constrain the grammar.
#[derive(Clone, Debug)]
pub struct Formatter {
    currency: String,
    accounts: Vec<String>,
    categories: Vec<String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl Formatter {
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            accounts: Vec::new(),
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn accounts(mut self, accounts: Vec<String>) -> Self {
        self.accounts = accounts;
        self
    }

    #[must_use]
    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Confirmation text for a recorded transaction.
    pub fn confirmation(&self, transaction: &Transaction) -> String {
        match transaction {
            Transaction::Expense(entry) => {
                self.entry_confirmation("💸 **Expense Recorded**", "", entry)
            }
            Transaction::Income(entry) => {
                self.entry_confirmation("💵 **Income Recorded**", "+", entry)
            }
            Transaction::Transfer(transfer) => self.transfer_confirmation(transfer),
        }
    }

    fn entry_confirmation(&self, title: &str, sign: &str, entry: &Entry) -> String {
        format!(
            "{title}\n\n\
             💰 Amount: {sign}{currency}{amount}\n\
             📂 Category: {category}\n\
             🏦 Account: {account}\n\
             📝 Description: {description}\n\
             📅 Date: {date}",
            currency = self.currency,
            amount = entry.amount,
            category = entry.category,
            account = entry.account,
            description = entry.description,
            date = entry.date,
        )
    }

    fn transfer_confirmation(&self, transfer: &Transfer) -> String {
        let mut text = format!(
            "🔄 **Transfer Recorded**\n\n\
             💰 Amount: {currency}{amount}\n\
             📤 From: {from}\n\
             📥 To: {to}\n\
             📅 Date: {date}",
            currency = self.currency,
            amount = transfer.amount,
            from = transfer.from_account,
            to = transfer.to_account,
            date = transfer.date,
        );
        // The description line is dropped entirely when there is none.
        if !transfer.description.is_empty() {
            text.push_str(&format!("\n📝 Description: {}", transfer.description));
        }
        text
    }

    /// Advisory account names for /accounts.
    pub fn accounts_text(&self) -> String {
        advisory_list_text("🏦 **Available Accounts**", "account", &self.accounts)
    }

    /// Advisory category names for /categories.
    pub fn categories_text(&self) -> String {
        advisory_list_text("📂 **Available Categories**", "category", &self.categories)
    }
}

fn advisory_list_text(title: &str, noun: &str, names: &[String]) -> String {
    let mut text = String::from(title);
    text.push_str("\n\n");
    if names.is_empty() {
        text.push_str(&format!("No {noun} list configured.\n"));
    } else {
        for name in names {
            text.push_str(&format!("• `{name}`\n"));
        }
    }
    text.push_str(&format!(
        "\nNames are not enforced: any single-word {noun} works."
    ));
    text
}

/// Text sent back for a rejected line. Every reason maps to the same usage
/// hint; the transport substitutes a dedicated reply for bad amounts.
pub fn rejection_text(failure: &ParseFailure) -> &'static str {
    match failure.reason {
        Reason::NoMarker
        | Reason::MalformedAmount
        | Reason::MalformedDate
        | Reason::MissingFields => INVALID_FORMAT_TEXT,
    }
}

const INVALID_FORMAT_TEXT: &str = "❌ **Invalid format!**\n\n\
    Please use one of these formats:\n\n\
    **Expense:** `- 50.00 food cash Lunch`\n\
    **Income:** `+ 1000.00 salary bank Monthly pay`\n\
    **Transfer:** `t 200.00 cash > bank Deposit`\n\n\
    Send /help for more details and examples.";

/// Text for /start.
pub fn welcome_text() -> &'static str {
    "🤖 **Welcome to Money Tracker Bot!**\n\n\
     I can help you track your personal finances. Here are the supported formats:\n\n\
     **💸 Expense:**\n\
     `- <amount> <category> <account> <description> [@YYYY-MM-DD]`\n\
     *Example:* `- 50.00 food cash Lunch at restaurant`\n\n\
     **💵 Income:**\n\
     `+ <amount> <category> <account> <description> [@YYYY-MM-DD]`\n\
     *Example:* `+ 1000.00 salary bank Monthly salary`\n\n\
     **🔄 Transfer:**\n\
     `t <amount> <from_account> > <to_account> [description] [@YYYY-MM-DD]`\n\
     *Example:* `t 200.00 cash > bank ATM deposit`\n\n\
     **📅 Date is optional** - if not specified, today's date will be used.\n\n\
     Just send me a message in any of these formats and I'll log it for you!"
}

/// Text for /help.
pub fn help_text() -> &'static str {
    "📖 **Money Tracker Bot Help**\n\n\
     **Supported Formats:**\n\n\
     1️⃣ **Expense** (spending money):\n   \
     `- <amount> <category> <account> <description> [@date]`\n\n\
     2️⃣ **Income** (earning money):\n   \
     `+ <amount> <category> <account> <description> [@date]`\n\n\
     3️⃣ **Transfer** (moving money):\n   \
     `t <amount> <from_account> > <to_account> [description] [@date]`\n\n\
     **Examples:**\n\
     • `- 25.50 groceries cash Weekly shopping @2024-01-15`\n\
     • `+ 3000.00 freelance paypal Web design project`\n\
     • `t 500.00 savings > checking Emergency fund`\n\n\
     **Notes:**\n\
     - Date format: YYYY-MM-DD (optional, defaults to today)\n\
     - Amount: Use decimal format (e.g., 25.50)\n\
     - No spaces in category/account names (use underscores if needed)"
}
