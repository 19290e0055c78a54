use std::fmt::Display;
use std::net::Ipv4Addr;

use crate::violation::{within, Bound, Violation};

pub const FORMAT_IPV4: &str = "ipv4";

pub fn required<'a, T: ?Sized>(path: &str, value: Option<&'a T>) -> Result<&'a T, Violation> {
    value.ok_or_else(|| Violation::MissingRequiredField {
        path: path.to_string(),
    })
}

/// Like [`required`], but an empty string also counts as missing.
pub fn required_str<'a>(path: &str, value: Option<&'a str>) -> Result<&'a str, Violation> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(Violation::MissingRequiredField {
            path: path.to_string(),
        }),
    }
}

pub fn range(
    path: &str,
    actual: impl Into<i64>,
    min: Option<Bound>,
    max: Option<Bound>,
) -> Result<(), Violation> {
    let actual = actual.into();
    if within(actual, min, max) {
        Ok(())
    } else {
        Err(Violation::OutOfRange {
            path: path.to_string(),
            min,
            max,
            actual,
        })
    }
}

/// Exact membership test; no case folding, no partial matches.
pub fn one_of<T: PartialEq + Display>(path: &str, actual: T, allowed: &[T]) -> Result<(), Violation> {
    if allowed.contains(&actual) {
        return Ok(());
    }
    Err(Violation::NotInEnum {
        path: path.to_string(),
        allowed: allowed.iter().map(ToString::to_string).collect(),
        actual: actual.to_string(),
    })
}

pub fn format_of(
    path: &str,
    expected: &'static str,
    value: &str,
    is_valid: impl Fn(&str) -> bool,
) -> Result<(), Violation> {
    if is_valid(value) {
        Ok(())
    } else {
        Err(Violation::BadFormat {
            path: path.to_string(),
            expected,
            actual: value.to_string(),
        })
    }
}

pub fn ipv4(path: &str, value: &str) -> Result<(), Violation> {
    format_of(path, FORMAT_IPV4, value, is_ipv4)
}

// Dotted quad, four decimal octets in [0,255].
fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}
