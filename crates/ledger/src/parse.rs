use chrono::NaiveDate;

use crate::{
    error::{ParseFailure, Reason},
    money::Amount,
    transaction::{Entry, Transaction, Transfer},
};

/// Parses one message line into a transaction.
///
/// Classification is decided by the leading marker on the trimmed line, in
/// this order:
/// - `-` → expense
/// - `+` → income
/// - `t` followed by whitespace → transfer
///
/// Everything after the marker is tokenized first and validated per field
/// second, so a bad amount or date is reported as its own failure instead of
/// a generic mismatch. `today` fills in the date when the line carries no
/// `@YYYY-MM-DD` suffix; pass the current local date in production code.
pub fn parse(line: &str, today: NaiveDate) -> Result<Transaction, ParseFailure> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix('-') {
        parse_entry(rest, line, today).map(Transaction::Expense)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        parse_entry(rest, line, today).map(Transaction::Income)
    } else if let Some(rest) = trimmed.strip_prefix('t')
        && rest.starts_with(char::is_whitespace)
    {
        parse_transfer(rest, line, today).map(Transaction::Transfer)
    } else {
        Err(ParseFailure::new(Reason::NoMarker, line))
    }
}

/// Grammar shared by expense and income:
/// `<amount> <category> <account> <description> [@YYYY-MM-DD]`.
fn parse_entry(rest: &str, line: &str, today: NaiveDate) -> Result<Entry, ParseFailure> {
    let fail = |reason| ParseFailure::new(reason, line);

    let (amount_token, rest) = split_token(rest.trim_start());
    if amount_token.is_empty() {
        return Err(fail(Reason::MissingFields));
    }
    let (category, rest) = split_token(rest.trim_start());
    if category.is_empty() {
        return Err(fail(Reason::MissingFields));
    }
    let (account, rest) = split_token(rest.trim_start());
    if account.is_empty() {
        return Err(fail(Reason::MissingFields));
    }
    let tail = rest.trim();
    if tail.is_empty() {
        return Err(fail(Reason::MissingFields));
    }

    let (description, date_token) = split_trailing_date(tail);
    let amount: Amount = amount_token
        .parse()
        .map_err(|_| fail(Reason::MalformedAmount))?;
    let date = resolve_date(date_token, today).ok_or_else(|| fail(Reason::MalformedDate))?;

    Ok(Entry {
        amount,
        category: category.to_string(),
        account: account.to_string(),
        description: description.to_string(),
        date,
    })
}

/// Transfer grammar:
/// `<amount> <from_account> > <to_account> [description] [@YYYY-MM-DD]`,
/// with zero or more spaces around the `>` separator.
fn parse_transfer(rest: &str, line: &str, today: NaiveDate) -> Result<Transfer, ParseFailure> {
    let fail = |reason| ParseFailure::new(reason, line);

    let (amount_token, rest) = split_token(rest.trim_start());
    if amount_token.is_empty() {
        return Err(fail(Reason::MissingFields));
    }
    let (from_account, to_account, rest) =
        split_accounts(rest.trim_start()).ok_or_else(|| fail(Reason::MissingFields))?;

    let tail = rest.trim();
    // Unlike entries, a transfer may carry a date suffix with no description.
    let (description, date_token) = if is_date_token(tail) {
        ("", Some(tail))
    } else {
        split_trailing_date(tail)
    };

    let amount: Amount = amount_token
        .parse()
        .map_err(|_| fail(Reason::MalformedAmount))?;
    let date = resolve_date(date_token, today).ok_or_else(|| fail(Reason::MalformedDate))?;

    Ok(Transfer {
        amount,
        from_account: from_account.to_string(),
        to_account: to_account.to_string(),
        description: description.to_string(),
        date,
    })
}

/// Splits the leading whitespace-free token off `s` (which must not start
/// with whitespace). The remainder keeps its leading separator.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    }
}

/// Splits `from > to` with flexible spacing around the separator.
///
/// When the leading token itself contains `>` and no standalone separator
/// follows, the split happens at the LAST `>` inside that token, so
/// `a>b>c` reads as `a>b` → `c` while `a > b>c` reads as `a` → `b>c`.
fn split_accounts(s: &str) -> Option<(&str, &str, &str)> {
    let (cluster, tail) = split_token(s);
    if cluster.is_empty() {
        return None;
    }

    if let Some(after_sep) = tail.trim_start().strip_prefix('>') {
        let (to_account, rest) = split_token(after_sep.trim_start());
        if to_account.is_empty() {
            return None;
        }
        return Some((cluster, to_account, rest));
    }

    let sep = cluster.rfind('>')?;
    let from_account = &cluster[..sep];
    if from_account.is_empty() {
        return None;
    }
    let within = &cluster[sep + 1..];
    if within.is_empty() {
        // `from>` with the target in the next token.
        let (to_account, rest) = split_token(tail.trim_start());
        if to_account.is_empty() {
            return None;
        }
        Some((from_account, to_account, rest))
    } else {
        Some((from_account, within, tail))
    }
}

/// Splits a trailing `@YYYY-MM-DD` token off `text` (trimmed). The suffix
/// only counts when preceded by whitespace, so a lone date token is treated
/// as description text, exactly like a date anywhere else in the line.
fn split_trailing_date(text: &str) -> (&str, Option<&str>) {
    if let Some((before, last)) = text.rsplit_once(char::is_whitespace)
        && is_date_token(last)
    {
        return (before.trim_end(), Some(last));
    }
    (text, None)
}

fn is_date_token(token: &str) -> bool {
    token.strip_prefix('@').is_some_and(date_shape)
}

/// `YYYY-MM-DD`, digits and dashes only. Calendar validity is checked later.
fn date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Turns an optional `@YYYY-MM-DD` token into a calendar date, or falls back
/// to `today`. `None` means the token had the right shape but is not a real
/// date (e.g. month 13).
fn resolve_date(token: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    match token {
        None => Some(today),
        Some(token) => {
            let body = token.strip_prefix('@')?;
            NaiveDate::parse_from_str(body, "%Y-%m-%d").ok()
        }
    }
}
