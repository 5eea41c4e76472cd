//! Snowflake sources: command-line arguments followed by piped lines

use std::io::BufRead;

use crate::error::MeltError;

/// Parse one decimal snowflake, ignoring surrounding whitespace.
///
/// Negative numbers and anything wider than 64 bits are rejected.
pub fn parse_flake(token: &str) -> Result<u64, MeltError> {
    let token = token.trim();
    token
        .parse::<u64>()
        .map_err(|source| MeltError::InvalidFlake {
            input: token.to_owned(),
            source,
        })
}

/// Lazily yield snowflakes from `args`, then one per line of `reader`.
///
/// Nothing is read from `reader` until every argument has been consumed, and
/// lines are read one at a time, so an endless pipe is fine.
pub fn flakes<I, R>(args: I, reader: Option<R>) -> impl Iterator<Item = Result<u64, MeltError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    R: BufRead,
{
    let args = args.into_iter().map(|arg| parse_flake(arg.as_ref()));
    let lines = reader
        .into_iter()
        .flat_map(|reader| reader.lines())
        .map(|line| line.map_err(MeltError::from).and_then(|line| parse_flake(&line)));
    args.chain(lines)
}
