use crate::token::Token;

/// Classify raw command-line arguments into a token sequence.
///
/// A pure, stateless, one-pass transform: every input string is
/// classifiable, so there is no error case. Three rules apply per raw
/// argument:
///
/// 1. No leading `-`: a [`Token::Positional`] carrying the string as-is.
/// 2. Leading `--`: a [`Token::Named`] keyed by the rest of the string.
///    If the rest embeds `=`, the key is the part before the first `=`
///    and the part after it is injected as a following
///    [`Token::Positional`], so `--key=value` behaves exactly like
///    `--key value`.
/// 3. Leading `-`: a [`Token::ShortFlags`] holding the remaining
///    characters as a set (duplicates collapse).
///
/// Degenerate inputs still classify: `""` is a positional, `-` is an
/// empty flag cluster, and `--` is an option with an empty key. None of
/// them carry separator semantics.
pub fn tokenize<I>(raw: I) -> Vec<Token>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tokens = Vec::new();
    for arg in raw {
        classify(arg.as_ref(), &mut tokens);
    }
    tokens
}

fn classify(arg: &str, tokens: &mut Vec<Token>) {
    if let Some(rest) = arg.strip_prefix("--") {
        match rest.split_once('=') {
            Some((key, value)) => {
                tokens.push(Token::Named(key.to_string()));
                tokens.push(Token::Positional(value.to_string()));
            }
            None => tokens.push(Token::Named(rest.to_string())),
        }
    } else if let Some(rest) = arg.strip_prefix('-') {
        tokens.push(Token::ShortFlags(rest.chars().collect()));
    } else {
        tokens.push(Token::Positional(arg.to_string()));
    }
}
