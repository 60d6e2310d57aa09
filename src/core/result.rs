//! VAT search results and normalization of the raw `vatSearch` response.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::TedbError;

/// Rates found for a search, one entry per member state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult {
    pub countries: Vec<CountryResult>,
}

impl SearchResult {
    pub fn countries(&self) -> &[CountryResult] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// The first result for the member state with ISO code `iso`.
    pub fn find_country(&self, iso: &str) -> Option<&CountryResult> {
        self.countries
            .iter()
            .find(|c| c.member_state.iso_code.eq_ignore_ascii_case(iso))
    }

    pub fn into_inner(self) -> Vec<CountryResult> {
        self.countries
    }
}

/// Rates of one member state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResult {
    pub member_state: MemberState,
    /// Whether the rates come from the historized (past) dataset.
    #[serde(default)]
    pub historized: bool,
    /// "STANDARD", "REDUCED", "SUPER_REDUCED", "PARKING" or "ZERO".
    #[serde(rename = "type")]
    pub vat_type: String,
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberState {
    pub name: String,
    #[serde(rename = "defaultCountryCode")]
    pub iso_code: String,
}

/// One applicable rate with its scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub rate: Rate,
    /// Epoch milliseconds of the date the rate applies on.
    pub situation_on: i64,
    #[serde(default)]
    pub cn_codes: Vec<CodeRange>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl RateEntry {
    /// `situation_on` as a UTC calendar date.
    pub fn situation_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(self.situation_on).map(|dt| dt.date_naive())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// e.g. "REDUCED_RATE", "STANDARD_RATE".
    #[serde(rename = "type", alias = "key")]
    pub kind: String,
    pub value: Decimal,
}

/// A CN code (or range head) the rate applies to.
///
/// Accepted either flat or wrapped as `{"key": {...}, "value": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CodeRangeRepr")]
pub struct CodeRange {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize)]
struct CodeRangeFields {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CodeRangeRepr {
    Keyed { key: CodeRangeFields },
    Flat(CodeRangeFields),
}

impl From<CodeRangeRepr> for CodeRange {
    fn from(repr: CodeRangeRepr) -> Self {
        let (CodeRangeRepr::Keyed { key: fields } | CodeRangeRepr::Flat(fields)) = repr;
        Self {
            code: fields.code,
            description: fields.description,
        }
    }
}

/// Error detail carried in the response's `errors` field.
///
/// TEDB reports errors as a string, an object with a `message`, or a list
/// of either. All are flattened into one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub message: String,
}

impl<'de> Deserialize<'de> for ServiceError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self {
            message: describe(&value),
        })
    }
}

fn describe(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message").or_else(|| map.get("error")) {
            Some(inner) => describe(inner),
            None => value.to_string(),
        },
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct VatSearchResponse {
    result: Option<Vec<CountryResult>>,
    #[serde(default, alias = "error")]
    errors: Option<ServiceError>,
}

/// Decode a raw `vatSearch` response body.
///
/// # Errors
///
/// - [`TedbError::EmptyResult`] for a bare `{}` body
/// - [`TedbError::MalformedResponse`] if the body is not the expected JSON
/// - [`TedbError::ServiceReported`] if `errors` is non-null
/// - [`TedbError::NoMatch`] if `result` is an empty list
pub fn normalize_response(raw: &[u8]) -> Result<SearchResult, TedbError> {
    if raw.trim_ascii() == b"{}" {
        return Err(TedbError::EmptyResult);
    }

    let response: VatSearchResponse = serde_json::from_slice(raw)
        .map_err(|e| TedbError::MalformedResponse(e.to_string()))?;

    if let Some(err) = response.errors {
        return Err(TedbError::ServiceReported(err.message));
    }

    let countries = response
        .result
        .ok_or_else(|| TedbError::MalformedResponse("missing field `result`".into()))?;

    if countries.is_empty() {
        return Err(TedbError::NoMatch);
    }

    Ok(SearchResult { countries })
}
