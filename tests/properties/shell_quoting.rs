//! Property tests for shell word quoting.

use proptest::prelude::*;

use robodeploy::domain::ports::command_runner::shell_word;

/// Undo POSIX single-quote quoting as produced by `shell_word`.
fn unquote(word: &str) -> String {
    let mut out = String::new();
    let mut in_quotes = false;
    let mut chars = word.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => in_quotes = !in_quotes,
            '\\' if !in_quotes => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            other => out.push(other),
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: quoting is lossless for any input.
    #[test]
    fn property_shell_word_round_trips(s in "(?s).{0,64}") {
        prop_assert_eq!(unquote(&shell_word(&s)), s);
    }

    /// PROPERTY: plain words are left untouched.
    #[test]
    fn property_safe_words_are_not_quoted(s in "[A-Za-z0-9_@%+=:,./-]{1,64}") {
        prop_assert_eq!(shell_word(&s), s);
    }
}
