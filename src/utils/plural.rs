//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 images)
/// - `plural_s(1)` -> `""` (1 image)
/// - `plural_s(5)` -> `"s"` (5 images)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "image")` -> `"1 image"`
/// - `plural_count(6, "image")` -> `"6 images"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "job"), "0 jobs");
        assert_eq!(plural_count(1, "job"), "1 job");
        assert_eq!(plural_count(6, "image"), "6 images");
    }
}
