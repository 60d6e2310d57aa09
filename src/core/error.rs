use chrono::NaiveDate;
use thiserror::Error;

use super::reference::TableKind;

/// Errors that can occur while building, sending or decoding a VAT search.
///
/// A search either succeeds with a complete [`SearchResult`](super::SearchResult)
/// or fails with exactly one of these. Nothing is retried internally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TedbError {
    /// The commodity code is not a valid 2–8 digit CN code.
    #[error("invalid commodity code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },

    /// A country code or category name has no upstream identifier.
    #[error("unknown {table} '{key}'")]
    UnknownKey { table: TableKind, key: String },

    /// The same value appears twice within one criteria list.
    #[error("duplicate {field} '{value}'")]
    DuplicateValue { field: CriteriaField, value: String },

    /// A date could not be parsed.
    #[error("invalid {field} '{value}': expected YYYY/MM/DD or YYYY-MM-DD")]
    DateFormat { field: CriteriaField, value: String },

    /// The start of the date range lies after its end.
    #[error("date from {from} is after date to {to}")]
    DateRange { from: NaiveDate, to: NaiveDate },

    /// The HTTP exchange failed before a usable body was received.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with an empty JSON object.
    #[error("the service did not return any results for the given criteria")]
    EmptyResult,

    /// The response body does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response carried a non-null error field.
    #[error("service reported an error: {0}")]
    ServiceReported(String),

    /// The response decoded cleanly but holds no results.
    #[error("no VAT rates match the given criteria")]
    NoMatch,

    /// Reading or writing the commodity-code cache failed.
    #[error("cache error at {path}: {message}")]
    Cache { path: String, message: String },
}

/// Failures of the outbound HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Connection, TLS or I/O failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-200 status.
    #[error("the server returned http status code {status}: {body}")]
    Status { status: u16, body: String },

    /// The server answered with an unexpected content type.
    #[error("expected content type {expected}, got {actual}")]
    ContentType { expected: String, actual: String },

    /// The server answered 200 with no body.
    #[error("empty response body from {url}")]
    EmptyBody { url: String },
}

/// Fieldless mirror of [`TedbError`] for matching on the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidCode,
    UnknownKey,
    DuplicateValue,
    DateFormat,
    DateRange,
    Transport,
    EmptyResult,
    MalformedResponse,
    ServiceReported,
    NoMatch,
    Cache,
}

impl TedbError {
    /// The taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCode { .. } => ErrorKind::InvalidCode,
            Self::UnknownKey { .. } => ErrorKind::UnknownKey,
            Self::DuplicateValue { .. } => ErrorKind::DuplicateValue,
            Self::DateFormat { .. } => ErrorKind::DateFormat,
            Self::DateRange { .. } => ErrorKind::DateRange,
            Self::Transport(_) => ErrorKind::Transport,
            Self::EmptyResult => ErrorKind::EmptyResult,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::ServiceReported(_) => ErrorKind::ServiceReported,
            Self::NoMatch => ErrorKind::NoMatch,
            Self::Cache { .. } => ErrorKind::Cache,
        }
    }

    pub(crate) fn invalid_code(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

/// Which field of [`SearchCriteria`](super::SearchCriteria) a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriteriaField {
    CountryCodes,
    DateFrom,
    DateTo,
    Categories,
    CommodityCodes,
}

impl std::fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountryCodes => write!(f, "country code"),
            Self::DateFrom => write!(f, "date from"),
            Self::DateTo => write!(f, "date to"),
            Self::Categories => write!(f, "category"),
            Self::CommodityCodes => write!(f, "commodity code"),
        }
    }
}
