//! TEDB CN code lists (`codes/CN_CODE/{heading}.json`).

use serde::{Deserialize, Serialize};

use crate::core::TedbError;

/// One entry of a heading's code list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRecord {
    /// TEDB internal id.
    pub id: u32,
    /// Grouped code, e.g. "0402 29 11".
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_description: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub iso8601_modified_on: Option<String>,
}

/// Decode a code list body.
pub fn parse_code_list(body: &[u8]) -> Result<Vec<CodeRecord>, TedbError> {
    serde_json::from_slice(body).map_err(|e| TedbError::MalformedResponse(e.to_string()))
}

/// The id of the record whose code equals `canonical`, ignoring case.
pub fn find_code_id(records: &[CodeRecord], canonical: &str) -> Option<u32> {
    records
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(canonical))
        .map(|r| r.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADING_0402: &str = r#"[
        {"id": 1501, "code": "0402", "description": "Milk and cream, concentrated", "order": 0},
        {"id": 1502, "code": "0402 29", "description": "Other", "parentDescription": "0402", "order": 1},
        {"id": 1503, "code": "0402 29 11", "description": "Special milk for infants",
         "parentDescription": "0402 29", "order": 2, "iso8601ModifiedOn": "2021-01-04T10:00:00Z",
         "modifiedBy": "tedb", "createdOn": null}
    ]"#;

    #[test]
    fn parses_records_and_ignores_extra_fields() {
        let records = parse_code_list(HEADING_0402.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].parent_description, "0402 29");
        assert!(records[0].iso8601_modified_on.is_none());
    }

    #[test]
    fn finds_exact_code() {
        let records = parse_code_list(HEADING_0402.as_bytes()).unwrap();
        assert_eq!(find_code_id(&records, "0402 29 11"), Some(1503));
        assert_eq!(find_code_id(&records, "0402"), Some(1501));
        assert_eq!(find_code_id(&records, "0402 29 19"), None);
    }

    #[test]
    fn rejects_non_list() {
        assert!(parse_code_list(b"{\"id\": 1}").is_err());
    }
}
