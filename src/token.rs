use std::collections::BTreeSet;
use std::fmt;

/// One classified command-line token.
///
/// The payload is captured at tokenization time and never changes; consume
/// operations remove whole tokens (or single characters from a flag
/// cluster) instead of rewriting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain value: any raw argument not starting with `-`.
    Positional(String),
    /// Long option (`--key`), stored without the `--` prefix.
    Named(String),
    /// Cluster of single-character flags (`-abc`), stored as a set.
    ///
    /// Duplicates collapse; rendering iterates the set, so the cluster
    /// prints in ascending character order.
    ShortFlags(BTreeSet<char>),
}

/// Human-readable label for a token's kind, used in error messages and
/// inspection output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// A plain value.
    Argument,
    /// A `--key` option.
    Option,
    /// A `-abc` flag cluster.
    Flag,
}

impl Token {
    /// The class label for this token.
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        match self {
            Self::Positional(_) => TokenClass::Argument,
            Self::Named(_) => TokenClass::Option,
            Self::ShortFlags(_) => TokenClass::Flag,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(value) => f.write_str(value),
            Self::Named(key) => write!(f, "--{key}"),
            Self::ShortFlags(flags) => {
                f.write_str("-")?;
                for flag in flags {
                    write!(f, "{flag}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Argument => "argument",
            Self::Option => "option",
            Self::Flag => "flag",
        })
    }
}
