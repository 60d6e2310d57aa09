//! TEDB search client: transport seam, code list cache, and the
//! validate → build → send → normalize pipeline.
//!
//! # Example
//!
//! ```ignore
//! use tedb::core::{SearchCriteria, TedbConfig};
//! use tedb::search::Tedb;
//!
//! let tedb = Tedb::new(TedbConfig::new().cache_dir("./tedb_cache").create_cache_dir(true))?;
//!
//! let result = tedb.search(
//!     &SearchCriteria::new()
//!         .country("ES")
//!         .category("foodstuffs")
//!         .commodity_code("33049900")
//!         .commodity_code("0402 29 11"),
//! )?;
//!
//! // Legacy code list lookup, cached on disk
//! let id = tedb.commodity_code_id("0402 29 11")?;
//! ```

mod cache;
mod catalog;
mod client;
#[cfg(feature = "http")]
mod http;
mod transport;

pub use cache::FileCache;
pub use catalog::{CodeRecord, find_code_id, parse_code_list};
pub use client::Tedb;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use transport::{HttpResponse, Transport};
