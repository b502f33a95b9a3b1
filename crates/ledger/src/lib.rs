//! Line grammar, transaction model and reply templates for the money
//! tracker. Everything in this crate is pure: parsing takes the current date
//! as an argument and formatting does no I/O, so both can be tested without
//! a runtime.

pub use error::{ParseFailure, Reason};
pub use format::Formatter;
pub use money::{Amount, InvalidAmount};
pub use parse::parse;
pub use transaction::{Entry, Transaction, Transfer};

mod error;
pub mod format;
mod money;
mod parse;
mod transaction;
