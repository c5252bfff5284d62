use std::num::ParseIntError;

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can stop a session before its first frame.
#[derive(Debug, Error)]
pub enum Error {
    /// A console answer was not an integer.
    #[error("choice for ball {ball} is not a number: {input:?}")]
    MalformedChoice {
        ball: usize,
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Input ended before every ball had a choice.
    #[error("no choice given for ball {ball}")]
    MissingInput { ball: usize },

    /// A selector that does not resolve to a ball in the material catalog.
    #[error("ball {ball} has no catalog entry for material selector {selector}")]
    InvalidSelection { ball: usize, selector: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_ball() {
        let e = Error::InvalidSelection { ball: 2, selector: 3 };
        let msg = e.to_string();
        assert!(msg.contains("ball 2"));
        assert!(msg.contains("selector 3"));
    }

    #[test]
    fn malformed_choice_keeps_parse_source() {
        let source = "abc".parse::<i64>().unwrap_err();
        let e = Error::MalformedChoice { ball: 1, input: "abc".to_string(), source };
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().contains("\"abc\""));
    }
}
