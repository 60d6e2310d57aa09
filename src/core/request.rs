//! Request payload for the TEDB `vatSearch` endpoint.

use log::debug;
use serde::{Deserialize, Serialize};

use super::cn_code::split_cn_code;
use super::criteria::{TEDB_DATE_FORMAT, ValidatedCriteria};
use super::error::TedbError;
use super::reference::{CATEGORIES, MEMBER_STATES};

/// JSON body POSTed to `{base_url}/rest-api/vatSearch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// TEDB member state ids.
    pub selected_member_states: Vec<u32>,
    /// `YYYY/MM/DD`.
    pub date_from: String,
    /// `YYYY/MM/DD`.
    pub date_to: String,
    /// TEDB category ids.
    pub selected_categories: Vec<u32>,
    /// CN codes in grouped form, e.g. "3304 99 00".
    pub selected_cn_codes: Vec<String>,
    /// Accepted by TEDB; never populated by this client.
    pub selected_cpa_codes: Vec<String>,
}

/// Turn validated criteria into a request payload.
///
/// Country codes must all be known. Unknown categories are dropped with a
/// debug log entry rather than failing the request.
///
/// # Errors
///
/// [`TedbError::UnknownKey`] for the first unknown country code, or
/// [`TedbError::InvalidCode`] for the first malformed commodity code.
/// No payload is produced in either case.
pub fn build_request(criteria: &ValidatedCriteria) -> Result<RequestPayload, TedbError> {
    let selected_member_states = criteria
        .country_codes
        .iter()
        .map(|code| MEMBER_STATES.lookup(code))
        .collect::<Result<Vec<_>, _>>()?;

    let selected_categories = criteria
        .categories
        .iter()
        .filter_map(|name| {
            let id = CATEGORIES.get(name);
            if id.is_none() {
                debug!("skipping unknown category '{name}'");
            }
            id
        })
        .collect();

    let selected_cn_codes = criteria
        .commodity_codes
        .iter()
        .map(|code| split_cn_code(code).map(|parts| parts.join(" ")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RequestPayload {
        selected_member_states,
        date_from: criteria.date_from.format(TEDB_DATE_FORMAT).to_string(),
        date_to: criteria.date_to.format(TEDB_DATE_FORMAT).to_string(),
        selected_categories,
        selected_cn_codes,
        selected_cpa_codes: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, TableKind};
    use chrono::NaiveDate;

    fn criteria() -> ValidatedCriteria {
        ValidatedCriteria {
            country_codes: vec!["ES".into()],
            date_from: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            categories: vec!["foodstuffs".into()],
            commodity_codes: vec!["33049900".into(), "0402 29 11".into()],
        }
    }

    #[test]
    fn builds_full_payload() {
        let p = build_request(&criteria()).unwrap();
        assert_eq!(p.selected_member_states, vec![10]);
        assert_eq!(p.date_from, "2024/03/14");
        assert_eq!(p.date_to, "2024/03/15");
        assert_eq!(p.selected_categories, vec![1]);
        assert_eq!(p.selected_cn_codes, vec!["3304 99 00", "0402 29 11"]);
        assert!(p.selected_cpa_codes.is_empty());
    }

    #[test]
    fn unknown_country_aborts() {
        let mut c = criteria();
        c.country_codes.push("UK".into());
        match build_request(&c).unwrap_err() {
            TedbError::UnknownKey { table, key } => {
                assert_eq!(table, TableKind::MemberState);
                assert_eq!(key, "UK");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_category_skipped() {
        let mut c = criteria();
        c.categories = vec!["spaceships".into(), "books".into()];
        let p = build_request(&c).unwrap();
        assert_eq!(p.selected_categories, vec![7]);
    }

    #[test]
    fn invalid_code_aborts() {
        let mut c = criteria();
        c.commodity_codes.push("12AB".into());
        assert_eq!(build_request(&c).unwrap_err().kind(), ErrorKind::InvalidCode);
    }

    #[test]
    fn empty_lists_allowed() {
        let mut c = criteria();
        c.country_codes.clear();
        c.categories.clear();
        c.commodity_codes.clear();
        let p = build_request(&c).unwrap();
        assert!(p.selected_member_states.is_empty());
        assert!(p.selected_cn_codes.is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&build_request(&criteria()).unwrap()).unwrap();
        assert!(json.contains("\"selectedMemberStates\":[10]"));
        assert!(json.contains("\"selectedCnCodes\":[\"3304 99 00\",\"0402 29 11\"]"));
        assert!(json.contains("\"selectedCpaCodes\":[]"));
    }
}
