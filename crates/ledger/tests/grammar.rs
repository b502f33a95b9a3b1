//! End-to-end checks of the public surface: a raw line goes through the
//! grammar and comes back out as the reply a user would see.

use chrono::NaiveDate;
use ledger::{Formatter, Reason, Transaction, format, parse};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
}

#[test]
fn expense_line_to_reply() {
    let transaction = parse("- 50.00 food cash Lunch at restaurant", today()).unwrap();
    let reply = Formatter::default().confirmation(&transaction);
    assert_eq!(
        reply,
        "💸 **Expense Recorded**\n\n\
         💰 Amount: $50.00\n\
         📂 Category: food\n\
         🏦 Account: cash\n\
         📝 Description: Lunch at restaurant\n\
         📅 Date: 2024-01-20"
    );
}

#[test]
fn income_line_with_date_to_reply() {
    let transaction =
        parse("+ 500.00 freelance paypal Web design project @2024-01-20", today()).unwrap();
    let reply = Formatter::default().confirmation(&transaction);
    assert_eq!(
        reply,
        "💵 **Income Recorded**\n\n\
         💰 Amount: +$500.00\n\
         📂 Category: freelance\n\
         🏦 Account: paypal\n\
         📝 Description: Web design project\n\
         📅 Date: 2024-01-20"
    );
}

#[test]
fn bare_transfer_line_to_reply() {
    let transaction = parse("t 50.00 paypal>bank", today()).unwrap();
    let Transaction::Transfer(ref transfer) = transaction else {
        panic!("expected transfer");
    };
    assert_eq!(transfer.description, "");

    let reply = Formatter::default().confirmation(&transaction);
    assert_eq!(
        reply,
        "🔄 **Transfer Recorded**\n\n\
         💰 Amount: $50.00\n\
         📤 From: paypal\n\
         📥 To: bank\n\
         📅 Date: 2024-01-20"
    );
}

#[test]
fn thousands_are_grouped_in_replies() {
    let transaction = parse("+ 12345.67 salary bank December pay", today()).unwrap();
    let reply = Formatter::default().confirmation(&transaction);
    assert!(reply.contains("💰 Amount: +$12,345.67\n"));
}

#[test]
fn rejected_lines_share_one_usage_text() {
    let no_marker = parse("invalid message", today()).unwrap_err();
    let missing = parse("- 50.00 food", today()).unwrap_err();
    assert_eq!(no_marker.reason, Reason::NoMarker);
    assert_eq!(missing.reason, Reason::MissingFields);
    assert_eq!(
        format::rejection_text(&no_marker),
        format::rejection_text(&missing)
    );
    assert!(format::rejection_text(&no_marker).starts_with("❌ **Invalid format!**"));
}
