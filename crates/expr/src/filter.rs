//! Coarse character-class filter applied before parsing.
//!
//! Once the known function names are blanked out, only `x`, digits, the
//! operators `+ - * / ^`, parentheses, `.`, `,` and whitespace may remain.
//! Passing the filter does not mean the text is well formed; the parser
//! reports structural errors.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Error;

static FUNCTION_NAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:sin|cos|tan|log|exp|sqrt|abs|pow|min|max)\b").expect("Invalid regex!")
});

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^x0-9+\-*/^().,\s]").expect("Invalid regex!"));

/// Rejects text containing characters outside the allowed alphabet.
pub(crate) fn check(source: &str) -> Result<(), Error> {
    // Blank names with spaces of equal length so offsets still line up.
    let blanked = FUNCTION_NAMES.replace_all(source, |caps: &Captures<'_>| " ".repeat(caps[0].len()));

    match DISALLOWED.find(&blanked) {
        Some(m) => Err(Error::Disallowed {
            found: m.as_str().chars().next().unwrap_or_default(),
            position: m.start(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_alphabet() {
        assert!(check("x^2 - 4*x + 3").is_ok());
        assert!(check("sqrt(abs(x)) / max(x, 1.5)").is_ok());
        assert!(check("").is_ok());
    }

    #[test]
    fn reports_first_offending_character() {
        assert_eq!(
            check("bad$chars"),
            Err(Error::Disallowed {
                found: 'b',
                position: 0
            })
        );
        assert_eq!(
            check("sin(x) $ 2"),
            Err(Error::Disallowed {
                found: '$',
                position: 7
            })
        );
    }

    #[test]
    fn function_names_must_stand_alone() {
        assert!(check("sinx").is_err());
        assert!(check("xsin(x)").is_err());
        assert!(check("exp(1e3)").is_err());
    }

    #[test]
    fn admits_text_the_parser_must_reject() {
        assert!(check("x + * (").is_ok());
        assert!(check("xx").is_ok());
    }
}
