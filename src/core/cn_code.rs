//! Combined Nomenclature (CN) commodity code splitting.
//!
//! A CN code is 2–8 digits: chapter (2), heading (4), then two-digit
//! subheadings. TEDB addresses codes in their grouped display form,
//! e.g. "0402 29 11".

use super::error::TedbError;

/// Shortest accepted code (a chapter).
pub const MIN_CODE_DIGITS: usize = 2;

/// Longest accepted code (a full CN subheading).
pub const MAX_CODE_DIGITS: usize = 8;

/// Validate `code` and split it into heading and subheading segments.
///
/// Codes of up to four digits come back as a single segment. Longer codes
/// yield the four-digit heading followed by two-digit groups:
///
/// ```
/// use tedb::core::split_cn_code;
///
/// assert_eq!(split_cn_code("3304").unwrap(), vec!["3304"]);
/// assert_eq!(split_cn_code("33049900").unwrap(), vec!["3304", "99", "00"]);
/// assert_eq!(split_cn_code("0402 29 11").unwrap(), vec!["0402", "29", "11"]);
/// assert!(split_cn_code("0402 2911").is_err());
/// ```
///
/// # Errors
///
/// Returns [`TedbError::InvalidCode`] when the input is empty, contains
/// anything but digits and spaces, has an odd digit count or one outside
/// 2..=8, or is space-grouped differently from the canonical split.
pub fn split_cn_code(code: &str) -> Result<Vec<String>, TedbError> {
    if code.is_empty() {
        return Err(TedbError::invalid_code(code, "empty code"));
    }

    let stripped: String = code.chars().filter(|c| *c != ' ').collect();

    if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_digit()) {
        return Err(TedbError::invalid_code(
            code,
            format!("non-numeric character '{bad}'"),
        ));
    }

    let digits = stripped.len();
    if !(MIN_CODE_DIGITS..=MAX_CODE_DIGITS).contains(&digits) || digits % 2 != 0 {
        return Err(TedbError::invalid_code(
            code,
            format!("expected an even number of digits between {MIN_CODE_DIGITS} and {MAX_CODE_DIGITS}, got {digits}"),
        ));
    }

    let parts = segments(&stripped);

    if code.contains(' ') {
        let canonical = parts.join(" ");
        if !canonical.eq_ignore_ascii_case(code) {
            return Err(TedbError::invalid_code(
                code,
                format!("grouping does not match canonical form '{canonical}'"),
            ));
        }
    }

    Ok(parts)
}

/// The grouped display form of `code`, as TEDB expects it.
///
/// ```
/// assert_eq!(tedb::core::canonical_cn_code("33049900").unwrap(), "3304 99 00");
/// ```
pub fn canonical_cn_code(code: &str) -> Result<String, TedbError> {
    Ok(split_cn_code(code)?.join(" "))
}

/// The four-digit heading of `code`, used to address the code list files.
pub fn cn_heading(code: &str) -> Result<String, TedbError> {
    let parts = split_cn_code(code)?;
    match parts.first() {
        Some(heading) if heading.len() == 4 => Ok(heading.clone()),
        _ => Err(TedbError::invalid_code(
            code,
            "a heading needs at least 4 digits",
        )),
    }
}

/// Split already-stripped digits. Does not validate; an odd tail becomes
/// its own trailing segment.
fn segments(stripped: &str) -> Vec<String> {
    if stripped.len() <= 4 {
        return vec![stripped.to_string()];
    }

    let (heading, remainder) = stripped.split_at(4);
    let mut parts = vec![heading.to_string()];
    let bytes = remainder.as_bytes();
    for pair in bytes.chunks(2) {
        // ASCII digits only, so every chunk is valid UTF-8
        parts.push(String::from_utf8_lossy(pair).into_owned());
    }
    parts
}
