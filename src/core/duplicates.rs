//! Duplicate detection within a single criteria list.

use std::collections::HashSet;

use super::error::{CriteriaField, TedbError};

/// Fail if two entries of `items` are equal ignoring case and spaces.
///
/// "ES" and "es" collide, as do "0402 29 11" and "04022911". Each list is
/// checked on its own; a value may appear in several lists.
///
/// # Errors
///
/// Returns [`TedbError::DuplicateValue`] naming the later of the two
/// colliding entries, as the caller wrote it.
pub fn check_no_duplicates<S: AsRef<str>>(
    field: CriteriaField,
    items: &[S],
) -> Result<(), TedbError> {
    if items.len() < 2 {
        return Ok(());
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let item = item.as_ref();
        if !seen.insert(normalize(item)) {
            return Err(TedbError::DuplicateValue {
                field,
                value: item.to_string(),
            });
        }
    }
    Ok(())
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}
