//! Lenient deserializers for inconsistently typed upstream fields.
//!
//! The API serves several fields as a string in one endpoint and a number in
//! another (seniority, districts, vote counts), and dates occasionally arrive
//! as empty strings. These helpers accept either representation and normalize
//! to one semantic type instead of failing the whole decode.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Accepts an integer, float, or numeric string; unparsable values become
/// `None` rather than a decode failure.
pub(crate) fn int_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Scalar::Int(n)) => Some(n),
        Some(Scalar::Float(f)) => Some(f as i64),
        Some(Scalar::Str(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts a float, integer, or numeric string.
pub(crate) fn float_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Scalar::Int(n)) => Some(n as f64),
        Some(Scalar::Float(f)) => Some(f),
        Some(Scalar::Str(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts a string or a number, normalizing to a string. Empty strings
/// become `None`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Scalar::Str(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        Some(Scalar::Int(n)) => Some(n.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
        Some(Scalar::Bool(b)) => Some(b.to_string()),
        None => None,
    })
}

/// Accepts a boolean or its string form.
pub(crate) fn bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Scalar::Bool(b)) => Some(b),
        Some(Scalar::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Accepts an ISO `YYYY-MM-DD` date string; empty or unparsable strings
/// become `None`.
pub(crate) fn iso_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}
