use chrono::{Local, NaiveDate};
use log::{debug, warn};

use super::cache::FileCache;
use super::catalog::{CodeRecord, find_code_id, parse_code_list};
use super::transport::{Transport, expect_json, expect_json_body};
use crate::core::{
    SearchCriteria, SearchResult, TedbConfig, TedbError, build_request, canonical_cn_code,
    cn_heading, normalize_response, validate_at,
};

/// TEDB client.
///
/// A search runs validate → build request → POST → normalize. Each step
/// either hands its output to the next or ends the search with its error;
/// there are no retries.
///
/// ```ignore
/// use tedb::core::{SearchCriteria, TedbConfig};
/// use tedb::search::Tedb;
///
/// let tedb = Tedb::new(TedbConfig::default())?;
/// let result = tedb.search(
///     &SearchCriteria::new()
///         .country("ES")
///         .category("foodstuffs")
///         .commodity_code("0402 29 11"),
/// )?;
/// for country in result.countries() {
///     println!("{}: {}", country.member_state.name, country.vat_type);
/// }
/// ```
#[derive(Debug)]
pub struct Tedb<T: Transport> {
    config: TedbConfig,
    transport: T,
    cache: Option<FileCache>,
}

impl<T: Transport> Tedb<T> {
    /// A client sending its requests through `transport`.
    pub fn with_transport(config: TedbConfig, transport: T) -> Self {
        let cache = FileCache::from_config(&config);
        Self {
            config,
            transport,
            cache,
        }
    }

    pub fn config(&self) -> &TedbConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Search VAT rates, defaulting missing dates from the local clock.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<SearchResult, TedbError> {
        self.search_at(criteria, Local::now().date_naive())
    }

    /// Search VAT rates, defaulting missing dates relative to `today`.
    ///
    /// # Errors
    ///
    /// Any validation or request-building error, [`TedbError::Transport`]
    /// on network failure, non-200 status or non-JSON content type, and
    /// any error of [`normalize_response`].
    pub fn search_at(
        &self,
        criteria: &SearchCriteria,
        today: NaiveDate,
    ) -> Result<SearchResult, TedbError> {
        let validated = validate_at(criteria, today)?;
        debug!(
            "criteria validated: {} countries, {} categories, {} codes, {}..{}",
            validated.country_codes.len(),
            validated.categories.len(),
            validated.commodity_codes.len(),
            validated.date_from,
            validated.date_to
        );

        let payload = build_request(&validated)?;
        debug!(
            "request built: member states {:?}, categories {:?}, cn codes {:?}",
            payload.selected_member_states, payload.selected_categories, payload.selected_cn_codes
        );

        let url = self.config.vat_search_url();
        debug!("POST {url}");
        let response = self.transport.post_json(&url, &payload)?;
        debug!(
            "response: status {}, {} bytes",
            response.status,
            response.body.len()
        );

        let body = expect_json(response)?;
        let result = normalize_response(&body)?;
        debug!("normalized {} country results", result.len());
        Ok(result)
    }

    /// TEDB's internal id for a CN code, via the heading's code list.
    ///
    /// Returns `Ok(None)` when the heading list has no such code.
    ///
    /// # Errors
    ///
    /// [`TedbError::InvalidCode`] for malformed codes or codes shorter than
    /// a heading, plus any error of [`code_list`](Self::code_list).
    pub fn commodity_code_id(&self, code: &str) -> Result<Option<u32>, TedbError> {
        let heading = cn_heading(code)?;
        let canonical = canonical_cn_code(code)?;
        let records = self.code_list(&heading)?;
        let id = find_code_id(&records, &canonical);
        debug!("commodity code {canonical} -> {id:?}");
        Ok(id)
    }

    /// The code list of a four-digit heading, from cache or TEDB.
    ///
    /// A freshly downloaded list is written to the cache once it decodes. A
    /// cached list that no longer decodes counts as a miss.
    pub fn code_list(&self, heading: &str) -> Result<Vec<CodeRecord>, TedbError> {
        let heading = cn_heading(heading)?;
        let file_name = format!("{heading}.json");

        if let Some(cache) = &self.cache {
            if let Some(bytes) = cache.read(&file_name)? {
                match parse_code_list(&bytes) {
                    Ok(records) => return Ok(records),
                    Err(e) => warn!(
                        "unreadable cache entry {}: {e}; fetching again",
                        cache.path(&file_name).display()
                    ),
                }
            }
        }

        let url = self.config.code_list_url(&heading);
        debug!("GET {url}");
        let response = self.transport.get(&url)?;
        let body = expect_json_body(&url, response)?;
        let records = parse_code_list(&body)?;

        if let Some(cache) = &self.cache {
            cache.write(&file_name, &body)?;
        }
        Ok(records)
    }
}

#[cfg(feature = "http")]
impl Tedb<super::HttpTransport> {
    /// A client talking to TEDB over HTTPS.
    pub fn new(config: TedbConfig) -> Result<Self, TedbError> {
        let transport = super::HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}
