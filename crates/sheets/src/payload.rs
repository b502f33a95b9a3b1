use chrono::{DateTime, NaiveDate, Utc};
use ledger::Transaction;
use serde::Serialize;

/// One spreadsheet row, exactly as POSTed to the webhook: a common envelope
/// plus the fields of the transaction kind, flattened alongside a `type`
/// discriminant.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    /// Delivery-time instant, not the transaction date.
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(flatten)]
    pub kind: Kind<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Kind<'a> {
    Expense {
        category: &'a str,
        account: &'a str,
        description: &'a str,
    },
    Income {
        category: &'a str,
        account: &'a str,
        description: &'a str,
    },
    Transfer {
        from_account: &'a str,
        to_account: &'a str,
        description: &'a str,
    },
}

impl<'a> Payload<'a> {
    pub fn new(transaction: &'a Transaction, timestamp: DateTime<Utc>) -> Self {
        let kind = match transaction {
            Transaction::Expense(entry) => Kind::Expense {
                category: &entry.category,
                account: &entry.account,
                description: &entry.description,
            },
            Transaction::Income(entry) => Kind::Income {
                category: &entry.category,
                account: &entry.account,
                description: &entry.description,
            },
            Transaction::Transfer(transfer) => Kind::Transfer {
                from_account: &transfer.from_account,
                to_account: &transfer.to_account,
                description: &transfer.description,
            },
        };
        Self {
            timestamp,
            date: transaction.date(),
            amount: transaction.amount().to_major(),
            kind,
        }
    }
}
