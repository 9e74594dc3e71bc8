use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value: T = s
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|e| format!("Invalid number '{s}': {e}"))?;
    if value < min {
        return Err(format!("Value must be >= {min}"));
    }
    if let Some(max) = max
        && value > max
    {
        return Err(format!("Value must be <= {max}"));
    }
    Ok(value)
}

/// Stack capacity: at least one slot, otherwise no opener could ever be pushed.
pub fn parse_capacity(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1usize, None)
}

/// A single-character terminator. Accepts the escapes `\n`, `\r`, `\t` and `\0`.
pub fn parse_terminator(s: &str) -> Result<char, String> {
    match s {
        "\\n" => return Ok('\n'),
        "\\r" => return Ok('\r'),
        "\\t" => return Ok('\t'),
        "\\0" => return Ok('\0'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("Terminator must be a single character, got '{s}'")),
    }
}
