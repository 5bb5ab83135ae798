//! Pure parsing for the line-oriented matrix text format
//!
//! These functions parse single lines of the textual matrix description with
//! no I/O dependencies. Any non-blank line that does not match its expected
//! shape is [`MatrixError::Format`]; the loader propagates that unchanged.

use crate::error::{MatrixError, Result};

/// Parse a dimension header line of the form `key=<integer>`
///
/// Surrounding whitespace is tolerated on the line, the key, and the value.
/// The value must be a non-negative integer.
pub fn parse_dimension(line: &str, key: &str) -> Result<usize> {
    let line = line.trim();
    let (name, value) = line.split_once('=').ok_or(MatrixError::Format)?;
    if name.trim() != key {
        return Err(MatrixError::Format);
    }
    value.trim().parse().map_err(|_| MatrixError::Format)
}

/// Parse an entry line of the form `(<row>,<col>,<value>)`
///
/// Exactly three comma-separated integers; whitespace around the parentheses
/// and around each field is tolerated. Row and column must be non-negative;
/// the value may be negative.
pub fn parse_triple(line: &str) -> Result<(usize, usize, i64)> {
    let line = line.trim();
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(MatrixError::Format)?;

    let mut fields = inner.split(',');
    let row = next_field(&mut fields)?;
    let col = next_field(&mut fields)?;
    let value = next_field(&mut fields)?;
    if fields.next().is_some() {
        return Err(MatrixError::Format);
    }
    Ok((row, col, value))
}

fn next_field<'a, T: core::str::FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
) -> Result<T> {
    fields
        .next()
        .ok_or(MatrixError::Format)?
        .trim()
        .parse()
        .map_err(|_| MatrixError::Format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("rows=3", "rows"), Ok(3));
        assert_eq!(parse_dimension("cols=12", "cols"), Ok(12));
        assert_eq!(parse_dimension("  rows = 0  ", "rows"), Ok(0));

        // Wrong or missing key
        assert_eq!(parse_dimension("cols=3", "rows"), Err(MatrixError::Format));
        assert_eq!(parse_dimension("3", "rows"), Err(MatrixError::Format));

        // Non-integer or negative value
        assert_eq!(parse_dimension("rows=x", "rows"), Err(MatrixError::Format));
        assert_eq!(parse_dimension("rows=-1", "rows"), Err(MatrixError::Format));
        assert_eq!(parse_dimension("rows=", "rows"), Err(MatrixError::Format));
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("(0,1,5)"), Ok((0, 1, 5)));
        assert_eq!(parse_triple("( 2 , 3 , -7 )"), Ok((2, 3, -7)));
        assert_eq!(parse_triple("  (1,1,1)  "), Ok((1, 1, 1)));
    }

    #[test]
    fn test_parse_triple_malformed() {
        // Missing third value
        assert_eq!(parse_triple("(1,2)"), Err(MatrixError::Format));
        // Too many fields
        assert_eq!(parse_triple("(1,2,3,4)"), Err(MatrixError::Format));
        // Missing parentheses
        assert_eq!(parse_triple("1,2,3"), Err(MatrixError::Format));
        assert_eq!(parse_triple("(1,2,3"), Err(MatrixError::Format));
        // Non-integer field
        assert_eq!(parse_triple("(a,2,3)"), Err(MatrixError::Format));
        // Negative coordinates are not valid indices
        assert_eq!(parse_triple("(-1,2,3)"), Err(MatrixError::Format));
        assert_eq!(parse_triple(""), Err(MatrixError::Format));
    }
}
