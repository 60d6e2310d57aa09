//! # tedb
//!
//! Client for the European Commission's Taxes in Europe Database (TEDB):
//! look up the VAT rates that apply to a set of member states, a date
//! range, reduced-rate categories and CN commodity codes.
//!
//! Rate values use [`rust_decimal::Decimal`]. Searches are synchronous,
//! send at most one request, and never retry.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tedb::core::*;
//!
//! let criteria = SearchCriteria::new()
//!     .country("ES")
//!     .category("foodstuffs")
//!     .commodity_code("33049900")
//!     .commodity_code("0402 29 11");
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let payload = build_request(&validate_at(&criteria, today).unwrap()).unwrap();
//!
//! assert_eq!(payload.selected_member_states, vec![10]);
//! assert_eq!(payload.date_from, "2024/03/14");
//! assert_eq!(payload.selected_cn_codes, vec!["3304 99 00", "0402 29 11"]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CN code splitting, reference tables, validation, request/response types |
//! | `search` | `Tedb` client over a pluggable `Transport`, code list cache |
//! | `http` | Blocking `reqwest` transport |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "search")]
pub mod search;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
