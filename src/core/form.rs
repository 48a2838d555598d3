//! # Form State & Validation
//!
//! Pure text rules for the two entry fields: what counts as a valid quote,
//! what counts as a valid author, and the capitalization applied at submit
//! time. Everything in this module is a plain function of its input, which
//! keeps the rules trivially testable away from the terminal.
//!
//! Validation errors are carried as plain `String`s where the empty string
//! means "valid". That makes the render side a simple non-empty check and
//! lets the submit gate compare against `""` directly.

use regex::Regex;
use std::sync::LazyLock;

/// Shown when the quote field is empty or whitespace-only.
pub const QUOTE_REQUIRED: &str = "Please enter a quote";
/// Shown when the quote contains anything outside letters and whitespace.
pub const QUOTE_LETTERS_ONLY: &str = "Please enter only letters and spaces";
/// Shown when the author field is empty or whitespace-only.
pub const AUTHOR_REQUIRED: &str = "Please enter the author's name";
/// Shown when the author contains a character outside its allowed set.
pub const AUTHOR_INVALID: &str = "Please enter a valid author name";

// Both patterns are anchored: one stray character fails the whole input.
// The author set additionally allows '.' and ',' for initials and suffixes
// ("J. R. R. Tolkien", "Sagan, Carl").
static QUOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\s]+$").expect("quote pattern is valid")
});
static AUTHOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\s.,]+$").expect("author pattern is valid")
});

/// Validate quote text as typed. Returns the error message to display, or
/// `""` when the text is acceptable.
pub fn validate_quote(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        QUOTE_REQUIRED.to_string()
    } else if !QUOTE_PATTERN.is_match(trimmed) {
        QUOTE_LETTERS_ONLY.to_string()
    } else {
        String::new()
    }
}

/// Validate author text as typed. Same contract as [`validate_quote`].
pub fn validate_author(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        AUTHOR_REQUIRED.to_string()
    } else if !AUTHOR_PATTERN.is_match(trimmed) {
        AUTHOR_INVALID.to_string()
    } else {
        String::new()
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Applied to the trimmed quote at submit time. Characters with multi-char
/// uppercase forms expand in place.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Title-case every space-separated word: first character uppercased, the
/// remainder lowercased.
///
/// Applied to the trimmed author at submit time, so "albert EINSTEIN"
/// becomes "Albert Einstein". Splits on single spaces only; runs of interior
/// spaces survive as empty tokens and are rejoined unchanged.
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Live state of the entry form: raw text exactly as typed plus the current
/// validation message for each field (`""` when the field is valid).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub quote_text: String,
    pub quote_error: String,
    pub author_text: String,
    pub author_error: String,
}

impl FormState {
    /// Reset all four fields, as after a successful submission.
    pub fn clear(&mut self) {
        self.quote_text.clear();
        self.quote_error.clear();
        self.author_text.clear();
        self.author_error.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_quote_is_required() {
        assert_eq!(validate_quote(""), QUOTE_REQUIRED);
    }

    #[test]
    fn whitespace_only_quote_is_required() {
        assert_eq!(validate_quote("   "), QUOTE_REQUIRED);
        assert_eq!(validate_quote("\t \t"), QUOTE_REQUIRED);
    }

    #[test]
    fn plain_letters_quote_is_valid() {
        assert_eq!(validate_quote("Know thyself"), "");
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_validation() {
        assert_eq!(validate_quote("  Know thyself  "), "");
    }

    #[test]
    fn digits_in_quote_are_rejected() {
        assert_eq!(validate_quote("catch 22"), QUOTE_LETTERS_ONLY);
    }

    #[test]
    fn punctuation_in_quote_is_rejected() {
        assert_eq!(validate_quote("Know thyself."), QUOTE_LETTERS_ONLY);
        assert_eq!(validate_quote("et tu, Brute"), QUOTE_LETTERS_ONLY);
    }

    #[test]
    fn accented_letters_are_rejected() {
        // The character class is ASCII-only, so non-ASCII letters fail.
        assert_eq!(validate_quote("déjà vu"), QUOTE_LETTERS_ONLY);
    }

    #[test]
    fn interior_whitespace_kinds_are_allowed_in_quote() {
        // \s covers tabs and newlines, not just spaces.
        assert_eq!(validate_quote("to be\tor not"), "");
    }

    #[test]
    fn empty_author_is_required() {
        assert_eq!(validate_author(""), AUTHOR_REQUIRED);
        assert_eq!(validate_author("  "), AUTHOR_REQUIRED);
    }

    #[test]
    fn author_allows_periods_and_commas() {
        assert_eq!(validate_author("J. R. R. Tolkien"), "");
        assert_eq!(validate_author("Sagan, Carl"), "");
    }

    #[test]
    fn author_rejects_digits_and_symbols() {
        assert_eq!(validate_author("Author 2"), AUTHOR_INVALID);
        assert_eq!(validate_author("O'Brien"), AUTHOR_INVALID);
        assert_eq!(validate_author("Smith-Jones"), AUTHOR_INVALID);
    }

    #[test]
    fn capitalize_first_uppercases_only_the_first_char() {
        assert_eq!(capitalize_first("know thyself"), "Know thyself");
        assert_eq!(capitalize_first("kNOW THYSELF"), "KNOW THYSELF");
    }

    #[test]
    fn capitalize_first_of_empty_is_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_first_handles_single_char() {
        assert_eq!(capitalize_first("a"), "A");
    }

    #[test]
    fn capitalize_words_title_cases_each_word() {
        assert_eq!(capitalize_words("albert einstein"), "Albert Einstein");
        assert_eq!(capitalize_words("ALBERT EINSTEIN"), "Albert Einstein");
        assert_eq!(capitalize_words("aLbErT eInStEiN"), "Albert Einstein");
    }

    #[test]
    fn capitalize_words_preserves_interior_space_runs() {
        // Double spaces split into an empty token which rejoins unchanged.
        assert_eq!(capitalize_words("mary  shelley"), "Mary  Shelley");
    }

    #[test]
    fn capitalize_words_of_empty_is_empty() {
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn form_clear_resets_everything() {
        let mut form = FormState {
            quote_text: "abc".to_string(),
            quote_error: QUOTE_LETTERS_ONLY.to_string(),
            author_text: "x".to_string(),
            author_error: AUTHOR_INVALID.to_string(),
        };
        form.clear();
        assert_eq!(form, FormState::default());
    }
}
