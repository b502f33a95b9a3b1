use thiserror::Error;

/// Why a line was rejected.
///
/// `NoMarker` means the line never entered a grammar; the other reasons mean
/// a marker was recognized but a field failed tokenizing or validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("no marker matched")]
    NoMarker,
    #[error("malformed amount")]
    MalformedAmount,
    #[error("malformed date")]
    MalformedDate,
    #[error("missing fields")]
    MissingFields,
}

/// A rejected input line, with the reason and the raw text so callers can
/// log or report it accurately.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}: {line:?}")]
pub struct ParseFailure {
    pub reason: Reason,
    pub line: String,
}

impl ParseFailure {
    pub(crate) fn new(reason: Reason, line: &str) -> Self {
        Self {
            reason,
            line: line.to_string(),
        }
    }
}
