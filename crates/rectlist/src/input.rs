//! Grammar of the answers typed at the session prompts.

use thiserror::Error;

/// Word that ends rectangle entry
pub const STOP: &str = "stop";

/// Keyword that introduces a rectangle name
pub const ADD_PREFIX: &str = "rec ";

/// Recoverable input problems; the session reports them and asks again.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Type 'rec' followed by the name or 'stop' if done.")]
    MalformedCommand,

    #[error("This name is already being used!")]
    DuplicateName(String),

    #[error("Invalid input. Dimensions must be positive.")]
    NonPositiveDimension { length: f64, height: f64 },

    #[error("Invalid input. Enter two numbers separated by a space.")]
    MalformedNumbers(String),
}

/// Answer to a name prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `rec <name>`: describe another rectangle
    Add(String),
    /// `stop`: no more rectangles
    Stop,
}

/// Parse `stop` or `rec <name>`.
///
/// The name is everything after the keyword and its single space, kept
/// verbatim. `line` must not carry its terminator.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    if line == STOP {
        return Ok(Command::Stop);
    }
    match line.strip_prefix(ADD_PREFIX) {
        Some(name) if !name.is_empty() => Ok(Command::Add(name.to_string())),
        _ => Err(InputError::MalformedCommand),
    }
}

/// Parse two finite whitespace separated numbers.
pub fn parse_pair(line: &str) -> Result<(f64, f64), InputError> {
    let malformed = || InputError::MalformedNumbers(line.to_string());

    let mut tokens = line.split_whitespace();
    let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let a: f64 = a.parse().map_err(|_| malformed())?;
    let b: f64 = b.parse().map_err(|_| malformed())?;
    if !a.is_finite() || !b.is_finite() {
        return Err(malformed());
    }
    Ok((a, b))
}

/// Parse a `length height` pair; both must be strictly positive.
pub fn parse_dimensions(line: &str) -> Result<(f64, f64), InputError> {
    let (length, height) = parse_pair(line)?;
    if length <= 0.0 || height <= 0.0 {
        return Err(InputError::NonPositiveDimension { length, height });
    }
    Ok((length, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("stop"), Ok(Command::Stop));
        assert_eq!(parse_command("rec A"), Ok(Command::Add("A".into())));
        assert_eq!(
            parse_command("rec big box"),
            Ok(Command::Add("big box".into()))
        );
        // Everything after the first space is the name
        assert_eq!(parse_command("rec  A"), Ok(Command::Add(" A".into())));
    }

    #[test]
    fn test_parse_command_rejects() {
        for line in ["", "rec", "rec ", "REC A", "add A", "Stop", " stop", "stop ", "recA"] {
            assert_eq!(
                parse_command(line),
                Err(InputError::MalformedCommand),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("0 0"), Ok((0.0, 0.0)));
        assert_eq!(parse_pair("-1.5   2e3"), Ok((-1.5, 2000.0)));
        assert_eq!(parse_pair("\t3 4 "), Ok((3.0, 4.0)));
    }

    #[test]
    fn test_parse_pair_rejects() {
        for line in ["", "1", "1 2 3", "a b", "1 x", "nan 1", "1 inf"] {
            assert!(
                matches!(parse_pair(line), Err(InputError::MalformedNumbers(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("2 4"), Ok((2.0, 4.0)));
        assert_eq!(
            parse_dimensions("0 4"),
            Err(InputError::NonPositiveDimension {
                length: 0.0,
                height: 4.0
            })
        );
        assert!(matches!(
            parse_dimensions("3 -1"),
            Err(InputError::NonPositiveDimension { .. })
        ));
        assert!(matches!(
            parse_dimensions("3"),
            Err(InputError::MalformedNumbers(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::DuplicateName("A".into()).to_string(),
            "This name is already being used!"
        );
        assert_eq!(
            InputError::NonPositiveDimension {
                length: 0.0,
                height: 1.0
            }
            .to_string(),
            "Invalid input. Dimensions must be positive."
        );
    }
}
