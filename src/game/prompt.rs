//! Console prompts for the pre-game material choices.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use super::material::Material;
use super::session::Termination;
use super::{BallChoices, BALL_COUNT};
use crate::error::{Error, Result};

/// Prints the material menu, then asks for one selector per ball.
///
/// Answers are parsed as integers but not checked against the catalog; that
/// happens when the balls are built. Integers too large for `i64` saturate,
/// which keeps them out of the catalog too. A non-numeric answer fails
/// immediately without asking again.
pub fn read_choices<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<BallChoices> {
    writeln!(output, "Choose three ball types:")?;
    for material in Material::all() {
        writeln!(output, "{} - {}", material.selector(), material.label())?;
    }

    let mut choices = [0; BALL_COUNT];
    let mut line = String::new();
    for (i, choice) in choices.iter_mut().enumerate() {
        let ball = i + 1;
        write!(output, "Enter choice for ball {ball} (1, 2, or 3): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::MissingInput { ball });
        }
        let answer = line.trim();
        *choice = parse_choice(answer).map_err(|source| Error::MalformedChoice {
            ball,
            input: answer.to_string(),
            source,
        })?;
    }
    Ok(choices)
}

fn parse_choice(answer: &str) -> std::result::Result<i64, std::num::ParseIntError> {
    answer.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(e),
    })
}

/// Console line shown when the chosen balls cannot all be built.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Exiting game.";

/// Console line for how a session ended. Closing the window says nothing.
pub fn termination_message(termination: Termination) -> Option<&'static str> {
    match termination {
        Termination::GameOver => Some("Game Over!"),
        Termination::WindowClosed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_choices_valid() {
        let mut out = Vec::new();
        let choices = read_choices(Cursor::new("1\n2\n1\n"), &mut out).unwrap();
        assert_eq!(choices, [1, 2, 1]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Choose three ball types:\n"));
        assert!(text.contains("1 - Rubber Ball (Bouncy)\n"));
        assert!(text.contains("2 - Steel Ball (Less Bouncy)\n"));
        assert!(text.contains("3 - Wooden Ball (Medium Bouncy)\n"));
        assert!(text.contains("Enter choice for ball 3 (1, 2, or 3): "));
    }

    #[test]
    fn test_read_choices_keeps_uncataloged_integers() {
        let choices = read_choices(Cursor::new(" 1 \n3\r\n7\n"), Vec::new()).unwrap();
        assert_eq!(choices, [1, 3, 7]);
    }

    #[test]
    fn test_read_choices_malformed_fails_fast() {
        let err = read_choices(Cursor::new("1\nsteel\n2\n"), Vec::new()).unwrap_err();
        match err {
            Error::MalformedChoice { ball, input, .. } => {
                assert_eq!(ball, 2);
                assert_eq!(input, "steel");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_choices_oversized_integer_is_out_of_catalog() {
        let choices = read_choices(Cursor::new("99999999999999999999\n1\n-99999999999999999999\n"), Vec::new()).unwrap();
        assert_eq!(choices, [i64::MAX, 1, i64::MIN]);
        assert_eq!(Material::from_selector(choices[0]), None);
        assert_eq!(Material::from_selector(choices[2]), None);
    }

    #[test]
    fn test_read_choices_missing_input() {
        let err = read_choices(Cursor::new("2\n"), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MissingInput { ball: 2 }));
    }

    #[test]
    fn test_termination_messages() {
        assert_eq!(termination_message(Termination::GameOver), Some("Game Over!"));
        assert_eq!(termination_message(Termination::WindowClosed), None);
        assert_eq!(INVALID_INPUT_MESSAGE, "Invalid input. Exiting game.");
    }
}
