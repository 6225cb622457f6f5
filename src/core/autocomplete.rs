//! Tab autocomplete for command names.
//!
//! Completion is a pure function of the fixed command table and the text
//! typed so far; it never looks at the tree store.
//!
//! - [`autocomplete`] replaces the input with the first matching command
//! - [`candidates`] lists every match, for surfaces that show alternatives

use crate::core::CommandKind;

/// Commands whose name starts with `partial`, in enumeration order.
pub fn candidates(partial: &str) -> Vec<&'static str> {
    CommandKind::names()
        .filter(|name| name.starts_with(partial))
        .collect()
}

/// Replacement text for a Tab press.
///
/// Returns the first command (by enumeration order) whose name starts with
/// `partial`, or `partial` unchanged when nothing matches. An empty input
/// matches every command and therefore completes to the first one.
pub fn autocomplete(partial: &str) -> String {
    CommandKind::names()
        .find(|name| name.starts_with(partial))
        .unwrap_or(partial)
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mk", "mkdir")]
    #[case("t", "touch")]
    #[case("c", "cd")]
    #[case("ca", "cat")]
    #[case("cl", "clear")]
    #[case("r", "rm")]
    #[case("re", "rename")]
    #[case("rmd", "rmdir")]
    #[case("d", "detail")]
    #[case("", "help")]
    fn test_autocomplete_first_match(#[case] partial: &str, #[case] expected: &str) {
        assert_eq!(autocomplete(partial), expected);
    }

    #[rstest]
    #[case("xyz")]
    #[case("mkdir docs")]
    #[case("MK")]
    fn test_autocomplete_no_match_is_unchanged(#[case] partial: &str) {
        assert_eq!(autocomplete(partial), partial);
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates("c"), vec!["cd", "cp", "cat", "clear"]);
        assert_eq!(candidates("rm"), vec!["rm", "rmdir"]);
        assert!(candidates("zz").is_empty());
    }
}
