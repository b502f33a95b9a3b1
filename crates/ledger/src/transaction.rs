use chrono::NaiveDate;

use crate::money::Amount;

/// A money movement with a category and a single account. Covers both
/// expenses (marker `-`) and income (marker `+`); [`Transaction`] carries the
/// direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub amount: Amount,
    pub category: String,
    pub account: String,
    pub description: String,
    pub date: NaiveDate,
}

/// A money movement between two accounts (marker `t`). The description may
/// be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub amount: Amount,
    pub from_account: String,
    pub to_account: String,
    pub description: String,
    pub date: NaiveDate,
}

/// The three shapes a parsed line can take. Produced only by
/// [`parse`](crate::parse); immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    Expense(Entry),
    Income(Entry),
    Transfer(Transfer),
}

impl Transaction {
    /// Calendar date the movement applies to.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Transaction::Expense(entry) | Transaction::Income(entry) => entry.date,
            Transaction::Transfer(transfer) => transfer.date,
        }
    }

    /// Amount moved, always positive.
    #[must_use]
    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Expense(entry) | Transaction::Income(entry) => entry.amount,
            Transaction::Transfer(transfer) => transfer.amount,
        }
    }
}
