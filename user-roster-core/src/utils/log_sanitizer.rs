//! Log sanitization utilities
//!
//! A full page of 100 users is several tens of kilobytes of JSON; debug logs
//! only keep the head of a body.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Largest char boundary not past `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for logging.
///
/// Returns the input unchanged when it fits, otherwise its first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"results":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn body_at_limit_unchanged() {
        let s = "x".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated_with_length() {
        let s = "x".repeat(TRUNCATE_LIMIT * 3);
        let out = truncate_for_log(&s);
        assert!(out.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(out.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT * 3)));
    }

    #[test]
    fn multibyte_names_not_split() {
        // "Ü" is two bytes, so the limit falls inside a character
        let s = format!("a{}", "Ü".repeat(TRUNCATE_LIMIT));
        let out = truncate_for_log(&s);
        assert!(out.contains("... [truncated, total"));
    }
}
