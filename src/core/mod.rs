//! CN code splitting, reference tables, criteria validation, request
//! building and response normalization.
//!
//! Everything here is pure: no network, no filesystem. The
//! [`search`](crate::search) module wires these steps to a transport.

mod cn_code;
mod config;
mod criteria;
mod duplicates;
mod error;
pub mod reference;
mod request;
mod result;

pub use cn_code::*;
pub use config::*;
pub use criteria::*;
pub use duplicates::*;
pub use error::*;
pub use reference::{
    CATEGORIES, MEMBER_STATES, ReferenceTable, TableKind, category_id, member_state_id,
};
pub use request::*;
pub use result::*;
