//! Small string helpers.

/// Returns `value`, or `default` when `value` is empty.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::strings::default_if_blank;
///
/// assert_eq!(default_if_blank("", "latest"), "latest");
/// assert_eq!(default_if_blank("v2", "latest"), "v2");
/// ```
pub fn default_if_blank<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Renders each element as its decimal string, preserving order and length.
pub fn uint16_slice_to_string_slice(values: &[u16]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_if_blank() {
        assert_eq!(default_if_blank("", "d"), "d");
        assert_eq!(default_if_blank("x", "d"), "x");
        // Whitespace is not blank.
        assert_eq!(default_if_blank(" ", "d"), " ");
    }

    #[test]
    fn test_uint16_slice_to_string_slice() {
        assert_eq!(
            uint16_slice_to_string_slice(&[1, 20, 300]),
            vec!["1", "20", "300"]
        );
        assert!(uint16_slice_to_string_slice(&[]).is_empty());
        assert_eq!(uint16_slice_to_string_slice(&[u16::MAX]), vec!["65535"]);
    }
}
