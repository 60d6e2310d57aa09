//! Search criteria and their validation.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::duplicates::check_no_duplicates;
use super::error::{CriteriaField, TedbError};

/// Date format TEDB uses on the wire.
pub const TEDB_DATE_FORMAT: &str = "%Y/%m/%d";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// What to search for, as supplied by the caller.
///
/// Dates are strings in `YYYY/MM/DD` or `YYYY-MM-DD` form. Missing dates
/// default to yesterday..today at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Member state codes, e.g. "ES". Greece is "EL".
    #[serde(default)]
    pub country_codes: Vec<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    /// Category names, e.g. "foodstuffs".
    #[serde(default)]
    pub categories: Vec<String>,
    /// CN codes, plain or space-grouped.
    #[serde(default)]
    pub commodity_codes: Vec<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country_codes.push(code.into());
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    pub fn commodity_code(mut self, code: impl Into<String>) -> Self {
        self.commodity_codes.push(code.into());
        self
    }

    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Set both ends of the date range from calendar dates.
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from.format(TEDB_DATE_FORMAT).to_string());
        self.date_to = Some(to.format(TEDB_DATE_FORMAT).to_string());
        self
    }
}

/// Criteria with both dates resolved and all lists checked for duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCriteria {
    pub country_codes: Vec<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub categories: Vec<String>,
    pub commodity_codes: Vec<String>,
}

/// Validate `criteria` against the local calendar date.
///
/// See [`validate_at`] for the rules.
pub fn validate(criteria: &SearchCriteria) -> Result<ValidatedCriteria, TedbError> {
    validate_at(criteria, Local::now().date_naive())
}

/// Validate `criteria`, using `today` for a missing end date.
///
/// 1. A missing `date_to` becomes `today`.
/// 2. A missing `date_from` becomes the day before `date_to` (or `date_to`
///    itself at the start of the calendar).
/// 3. `date_from` must not be after `date_to`.
/// 4. Country codes, then commodity codes, then categories must each be
///    free of duplicates.
///
/// # Errors
///
/// [`TedbError::DateFormat`], [`TedbError::DateRange`] or
/// [`TedbError::DuplicateValue`], whichever rule fails first.
pub fn validate_at(
    criteria: &SearchCriteria,
    today: NaiveDate,
) -> Result<ValidatedCriteria, TedbError> {
    let date_to = match criteria.date_to.as_deref() {
        Some(value) => parse_date(CriteriaField::DateTo, value)?,
        None => today,
    };

    let date_from = match criteria.date_from.as_deref() {
        Some(value) => parse_date(CriteriaField::DateFrom, value)?,
        // NaiveDate::MIN has no predecessor; the range collapses to one day
        None => date_to.checked_sub_days(Days::new(1)).unwrap_or(date_to),
    };

    if date_from > date_to {
        return Err(TedbError::DateRange {
            from: date_from,
            to: date_to,
        });
    }

    check_no_duplicates(CriteriaField::CountryCodes, &criteria.country_codes)?;
    check_no_duplicates(CriteriaField::CommodityCodes, &criteria.commodity_codes)?;
    check_no_duplicates(CriteriaField::Categories, &criteria.categories)?;

    Ok(ValidatedCriteria {
        country_codes: criteria.country_codes.clone(),
        date_from,
        date_to,
        categories: criteria.categories.clone(),
        commodity_codes: criteria.commodity_codes.clone(),
    })
}

fn parse_date(field: CriteriaField, value: &str) -> Result<NaiveDate, TedbError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, TEDB_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT))
        .map_err(|_| TedbError::DateFormat {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn both_dates_default() {
        let v = validate_at(&SearchCriteria::new().country("ES"), date(2024, 3, 15)).unwrap();
        assert_eq!(v.date_to, date(2024, 3, 15));
        assert_eq!(v.date_from, date(2024, 3, 14));
    }

    #[test]
    fn date_from_defaults_relative_to_date_to() {
        let c = SearchCriteria::new().date_to("2024/01/01");
        let v = validate_at(&c, date(2024, 6, 1)).unwrap();
        assert_eq!(v.date_from, date(2023, 12, 31));
    }

    #[test]
    fn date_from_default_at_calendar_start() {
        let v = validate_at(&SearchCriteria::new(), NaiveDate::MIN).unwrap();
        assert_eq!(v.date_to, NaiveDate::MIN);
        assert_eq!(v.date_from, NaiveDate::MIN);
    }

    #[test]
    fn iso_dates_accepted() {
        let c = SearchCriteria::new().date_from("2024-02-01").date_to("2024-02-29");
        let v = validate_at(&c, date(2024, 6, 1)).unwrap();
        assert_eq!(v.date_from, date(2024, 2, 1));
        assert_eq!(v.date_to, date(2024, 2, 29));
    }

    #[test]
    fn malformed_date_to() {
        let c = SearchCriteria::new().date_to("15.03.2024");
        let err = validate_at(&c, date(2024, 3, 15)).unwrap_err();
        match err {
            TedbError::DateFormat { field, value } => {
                assert_eq!(field, CriteriaField::DateTo);
                assert_eq!(value, "15.03.2024");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_date_from() {
        let c = SearchCriteria::new().date_from("2024/13/01");
        let err = validate_at(&c, date(2024, 3, 15)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateFormat);
    }

    #[test]
    fn reversed_range_rejected() {
        let c = SearchCriteria::new()
            .country("ES")
            .country("ES")
            .date_from("2024/03/16")
            .date_to("2024/03/15");
        let err = validate_at(&c, date(2024, 3, 15)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateRange);
    }

    #[test]
    fn single_day_range_allowed() {
        let c = SearchCriteria::new().between(date(2024, 3, 15), date(2024, 3, 15));
        assert!(validate_at(&c, date(2024, 3, 15)).is_ok());
    }

    #[test]
    fn country_duplicates_reported_first() {
        let c = SearchCriteria::new()
            .country("ES")
            .country("es")
            .commodity_code("3304")
            .commodity_code("3304");
        match validate_at(&c, date(2024, 3, 15)).unwrap_err() {
            TedbError::DuplicateValue { field, .. } => {
                assert_eq!(field, CriteriaField::CountryCodes)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn commodity_duplicates_before_categories() {
        let c = SearchCriteria::new()
            .category("foodstuffs")
            .category("Foodstuffs")
            .commodity_code("0402 29 11")
            .commodity_code("04022911");
        match validate_at(&c, date(2024, 3, 15)).unwrap_err() {
            TedbError::DuplicateValue { field, .. } => {
                assert_eq!(field, CriteriaField::CommodityCodes)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn same_value_across_lists_allowed() {
        let c = SearchCriteria::new().category("3304").commodity_code("3304");
        assert!(validate_at(&c, date(2024, 3, 15)).is_ok());
    }

    #[test]
    fn lists_carried_through() {
        let c = SearchCriteria::new()
            .country("ES")
            .category("foodstuffs")
            .commodity_code("33049900");
        let v = validate_at(&c, date(2024, 3, 15)).unwrap();
        assert_eq!(v.country_codes, vec!["ES"]);
        assert_eq!(v.categories, vec!["foodstuffs"]);
        assert_eq!(v.commodity_codes, vec!["33049900"]);
    }

    #[test]
    fn criteria_deserialize_from_camel_case() {
        let json = r#"{"countryCodes":["ES"],"dateTo":"2024/03/15","commodityCodes":["3304"]}"#;
        let c: SearchCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(c.country_codes, vec!["ES"]);
        assert!(c.date_from.is_none());
        assert!(c.categories.is_empty());
    }
}
