use std::fmt;

use crate::lexer::tokenize;
use crate::token::{Token, TokenClass};

/// Classifies a failed value shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftErrorKind {
    /// Sequence exhausted before the required number of values was
    /// collected.
    MissingValue,
    /// A value slot was occupied by an option or flag instead of a plain
    /// argument.
    UnexpectedToken {
        /// Class of the offending token.
        class: TokenClass,
        /// Rendered form of the offending token.
        found: String,
    },
}

impl fmt::Display for ShiftErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => {
                write!(f, "missing value")
            }
            Self::UnexpectedToken { class, found } => {
                write!(f, "unexpected {class} '{found}' in value position")
            }
        }
    }
}

/// Error produced when consuming values for an option or flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} for {subject}")]
pub struct ShiftError {
    pub kind: ShiftErrorKind,
    /// Rendered name of the demanding option or flag (`--name`, `-c`).
    pub subject: String,
}

/// The live, mutable sequence of tokens under consumption.
///
/// Built once from raw argv-like input, then drained in place: every
/// matching operation removes what it matched, and whatever survives is
/// the remainder. Untouched tokens keep their relative order across any
/// operation.
///
/// Lookups that find nothing (`has_option`, `has_flag`, an exhausted
/// `shift_argument`) are normal outcomes, not errors; only a matched
/// option or flag whose required values cannot be collected produces a
/// [`ShiftError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    tokens: Vec<Token>,
}

impl Session {
    /// Build a session from raw argument strings (argv minus the program
    /// name).
    #[must_use]
    pub fn new<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            tokens: tokenize(raw),
        }
    }

    /// Adopt an already-classified token sequence.
    #[must_use]
    pub const fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Remove and return the first positional token's value.
    ///
    /// Returns `None` when no positional token remains. Options and flag
    /// clusters are skipped over and left in place.
    pub fn shift_argument(&mut self) -> Option<String> {
        let index = self
            .tokens
            .iter()
            .position(|token| matches!(token, Token::Positional(_)))?;
        let Token::Positional(value) = self.tokens.remove(index) else {
            return None;
        };
        Some(value)
    }

    /// Remove the first `--name` token if present.
    ///
    /// Boolean presence check only; no value is extracted. Later
    /// occurrences of the same option survive for later calls.
    pub fn has_option(&mut self, name: &str) -> bool {
        let Some(index) = self.position_of_option(name) else {
            return false;
        };
        self.tokens.remove(index);
        true
    }

    /// Remove one occurrence of `flag` from the first cluster containing
    /// it.
    ///
    /// A cluster emptied by the removal disappears from the sequence;
    /// otherwise it stays at its position minus the matched character.
    pub fn has_flag(&mut self, flag: char) -> bool {
        let Some(index) = self.position_of_flag(flag) else {
            return false;
        };
        let Token::ShortFlags(flags) = &mut self.tokens[index] else {
            return false;
        };
        flags.remove(&flag);
        if flags.is_empty() {
            self.tokens.remove(index);
        }
        true
    }

    /// Remove `--name` and return the single value following it.
    ///
    /// Returns `Ok(None)` when the option is not present.
    ///
    /// # Errors
    ///
    /// See [`Session::shift_values_for_option`].
    pub fn shift_value_for_option(
        &mut self,
        name: &str,
    ) -> Result<Option<String>, ShiftError> {
        Ok(self
            .shift_values_for_option(name, 1)?
            .and_then(|values| values.into_iter().next()))
    }

    /// Remove `--name` and the `count` tokens following it, returning
    /// their values in original order.
    ///
    /// Returns `Ok(None)` when the option is not present; an absent
    /// option is a normal outcome. A `count` of zero removes just the
    /// option token and returns an empty vector.
    ///
    /// # Errors
    ///
    /// [`ShiftErrorKind::MissingValue`] when the sequence runs out before
    /// `count` values are collected, [`ShiftErrorKind::UnexpectedToken`]
    /// when a value slot holds an option or flag instead of a plain
    /// argument. Tokens removed before the failure, including the matched
    /// option itself, are not restored.
    pub fn shift_values_for_option(
        &mut self,
        name: &str,
        count: usize,
    ) -> Result<Option<Vec<String>>, ShiftError> {
        let Some(index) = self.position_of_option(name) else {
            return Ok(None);
        };
        self.tokens.remove(index);
        self.collect_values(index, count, &format!("--{name}"))
            .map(Some)
    }

    /// Remove the first cluster containing `flag` and return the single
    /// value following it.
    ///
    /// Returns `Ok(None)` when no cluster contains `flag`.
    ///
    /// # Errors
    ///
    /// See [`Session::shift_values_for_flag`].
    pub fn shift_value_for_flag(
        &mut self,
        flag: char,
    ) -> Result<Option<String>, ShiftError> {
        Ok(self
            .shift_values_for_flag(flag, 1)?
            .and_then(|values| values.into_iter().next()))
    }

    /// Remove the first cluster containing `flag` and the `count` tokens
    /// following it, returning their values in original order.
    ///
    /// The whole cluster is discarded, other characters included; this is
    /// not `has_flag`, which peels off a single character. Returns
    /// `Ok(None)` when no cluster contains `flag`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Session::shift_values_for_option`], with
    /// the flag's rendered name (`-c`) as the subject.
    pub fn shift_values_for_flag(
        &mut self,
        flag: char,
        count: usize,
    ) -> Result<Option<Vec<String>>, ShiftError> {
        let Some(index) = self.position_of_flag(flag) else {
            return Ok(None);
        };
        self.tokens.remove(index);
        self.collect_values(index, count, &format!("-{flag}"))
            .map(Some)
    }

    /// True when no tokens remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Read-only view of the remaining tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render every remaining token back to its textual form, in order.
    ///
    /// Does not mutate the session; callers use this to report
    /// unrecognized arguments.
    #[must_use]
    pub fn remainder(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }

    fn position_of_option(&self, name: &str) -> Option<usize> {
        self.tokens
            .iter()
            .position(|token| matches!(token, Token::Named(key) if key == name))
    }

    fn position_of_flag(&self, flag: char) -> Option<usize> {
        self.tokens
            .iter()
            .position(|token| matches!(token, Token::ShortFlags(flags) if flags.contains(&flag)))
    }

    /// Consume `count` value tokens starting at `index`, which after the
    /// matched token's removal is the slot right behind it.
    fn collect_values(
        &mut self,
        index: usize,
        count: usize,
        subject: &str,
    ) -> Result<Vec<String>, ShiftError> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            if index >= self.tokens.len() {
                return Err(ShiftError {
                    kind: ShiftErrorKind::MissingValue,
                    subject: subject.to_string(),
                });
            }
            match self.tokens.remove(index) {
                Token::Positional(value) => values.push(value),
                token => {
                    let error = ShiftError {
                        kind: ShiftErrorKind::UnexpectedToken {
                            class: token.class(),
                            found: token.to_string(),
                        },
                        subject: subject.to_string(),
                    };
                    // The offending token itself is not consumed.
                    self.tokens.insert(index, token);
                    return Err(error);
                }
            }
        }
        Ok(values)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(raw: &[&str]) -> Session {
        Session::new(raw.iter().copied())
    }

    #[test]
    fn shift_arguments_in_order() {
        let mut args = session(&["a", "--x", "b"]);
        assert_eq!(args.shift_argument(), Some("a".to_string()));
        assert_eq!(args.shift_argument(), Some("b".to_string()));
        assert_eq!(args.shift_argument(), None);
        assert!(!args.is_empty());
        assert_eq!(args.remainder(), ["--x"]);
    }

    #[test]
    fn has_option_removes_first_match() {
        let mut args = session(&["--color", "--color"]);
        assert!(args.has_option("color"));
        assert_eq!(args.remainder(), ["--color"]);
        assert!(args.has_option("color"));
        assert!(args.is_empty());
        assert!(!args.has_option("color"));
    }

    #[test]
    fn has_flag_peels_one_character() {
        let mut args = session(&["-vn"]);
        assert!(args.has_flag('v'));
        assert_eq!(args.remainder(), ["-n"]);
        assert!(args.has_flag('n'));
        assert!(args.is_empty());
    }

    #[test]
    fn option_value_success() {
        let mut args = session(&["--name", "Kyle"]);
        let value = args.shift_value_for_option("name").expect("should shift");
        assert_eq!(value, Some("Kyle".to_string()));
        assert!(args.is_empty());
    }

    #[test]
    fn option_value_missing() {
        let mut args = session(&["--name"]);
        let err = args.shift_value_for_option("name").unwrap_err();
        assert_eq!(err.kind, ShiftErrorKind::MissingValue);
        assert_eq!(err.subject, "--name");
    }

    #[test]
    fn option_value_blocked_by_option() {
        let mut args = session(&["--name", "--other"]);
        let err = args.shift_value_for_option("name").unwrap_err();
        assert_eq!(
            err.kind,
            ShiftErrorKind::UnexpectedToken {
                class: TokenClass::Option,
                found: "--other".to_string(),
            }
        );
        assert_eq!(err.subject, "--name");
    }

    #[test]
    fn absent_option_is_not_an_error() {
        let mut args = session(&["build"]);
        assert_eq!(args.shift_value_for_option("name"), Ok(None));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn flag_value_discards_whole_cluster() {
        let mut args = session(&["-vn", "out.txt"]);
        let value = args.shift_value_for_flag('v').expect("should shift");
        assert_eq!(value, Some("out.txt".to_string()));
        // The `n` flag went with the cluster.
        assert!(args.is_empty());
    }

    #[test]
    fn display_joins_remainder_with_spaces() {
        let args = session(&["a", "--x", "-bc"]);
        assert_eq!(args.to_string(), "a --x -bc");
    }

    #[test]
    fn clone_is_independent() {
        let mut original = session(&["a", "b"]);
        let mut copy = original.clone();
        assert_eq!(original.shift_argument(), Some("a".to_string()));
        assert_eq!(copy.shift_argument(), Some("a".to_string()));
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn from_tokens_adopts_sequence() {
        let mut args = Session::from_tokens(vec![
            Token::Positional("x".to_string()),
            Token::Named("y".to_string()),
        ]);
        assert_eq!(args.len(), 2);
        assert_eq!(args.shift_argument(), Some("x".to_string()));
    }
}
