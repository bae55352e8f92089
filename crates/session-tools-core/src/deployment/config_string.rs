//! `NAME=VALUE;NAME=VALUE` deployment configuration strings
//!
//! Neither `=` nor `;` is escaped. A value containing either one does not
//! survive `parse_deployment_config` intact.

/// Separator between pairs
pub const PAIR_SEPARATOR: char = ';';
/// Separator between a name and its value
pub const VALUE_SEPARATOR: char = '=';

/// Join `(name, value)` pairs in the given order
pub fn compose_deployment_config<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}{}{}", name, VALUE_SEPARATOR, value))
        .collect::<Vec<_>>()
        .join(&PAIR_SEPARATOR.to_string())
}

/// Best-effort inverse of `compose_deployment_config`
///
/// Splits on `;`, then on the first `=` of each piece. Empty pieces are
/// skipped and a piece without `=` becomes a name with an empty value.
pub fn parse_deployment_config(config: &str) -> Vec<(String, String)> {
    config
        .split(PAIR_SEPARATOR)
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => (piece.to_string(), String::new()),
        })
        .collect()
}
