//! Core data structures for header checking.
//!
//! Defines the decoded header value type and the result of header
//! extraction.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// A decoded header value
///
/// Dates are a distinct variant so date fields can be checked by type
/// rather than by re-parsing text.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    List(Vec<HeaderValue>),
    Mapping(Vec<(String, HeaderValue)>),
}

impl HeaderValue {
    /// Borrow the text content if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the value counts as "filled in"
    ///
    /// Null, false, zero and empty text/lists/mappings are falsy; every
    /// date is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            HeaderValue::Null => false,
            HeaderValue::Bool(b) => *b,
            HeaderValue::Integer(i) => *i != 0,
            HeaderValue::Float(f) => *f != 0.0,
            HeaderValue::Text(text) => !text.is_empty(),
            HeaderValue::Date(_) => true,
            HeaderValue::List(items) => !items.is_empty(),
            HeaderValue::Mapping(entries) => !entries.is_empty(),
        }
    }

    /// Render for use inside a list or mapping, quoting text
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(text) => write!(f, "'{}'", text),
            HeaderValue::Date(date) => write!(f, "datetime.date({})", date.format("%Y, %-m, %-d")),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Null => write!(f, "None"),
            HeaderValue::Bool(true) => write!(f, "True"),
            HeaderValue::Bool(false) => write!(f, "False"),
            HeaderValue::Integer(i) => write!(f, "{}", i),
            HeaderValue::Float(x) => write!(f, "{}", format_float(*x)),
            HeaderValue::Text(text) => write!(f, "{}", text),
            HeaderValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            HeaderValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                write!(f, "]")
            }
            HeaderValue::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': ", key)?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Render a float with shortest round-trip digits, as shown in diagnostics
///
/// Integral values keep a trailing `.0`; scientific notation with a signed,
/// two-digit exponent is used outside `1e-4 <= |x| < 1e16`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", x);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if x != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = format!("{}", x);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

impl From<&str> for HeaderValue {
    fn from(text: &str) -> Self {
        HeaderValue::Text(text.to_string())
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        HeaderValue::Integer(value)
    }
}

impl From<NaiveDate> for HeaderValue {
    fn from(date: NaiveDate) -> Self {
        HeaderValue::Date(date)
    }
}

/// Everything extracted from one document header
#[derive(Debug, Clone, Default)]
pub struct ParsedHeader {
    /// Decoded field values; the last occurrence of a repeated field wins
    pub data: BTreeMap<String, HeaderValue>,

    /// Field names in the order they appeared, duplicates included
    pub seen_fields: Vec<String>,

    /// Whether the leftover template phrase was found
    pub template_found: bool,
}

impl ParsedHeader {
    pub fn get(&self, field: &str) -> Option<&HeaderValue> {
        self.data.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!HeaderValue::Null.is_truthy());
        assert!(!HeaderValue::from("").is_truthy());
        assert!(!HeaderValue::List(vec![]).is_truthy());
        assert!(!HeaderValue::Integer(0).is_truthy());
        assert!(!HeaderValue::Bool(false).is_truthy());

        assert!(HeaderValue::from("Room 101").is_truthy());
        assert!(HeaderValue::List(vec!["Ada".into()]).is_truthy());
        assert!(HeaderValue::from(NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()).is_truthy());
    }

    #[test]
    fn test_display_matches_offending_entry_format() {
        assert_eq!(HeaderValue::Null.to_string(), "None");
        assert_eq!(HeaderValue::Integer(123456789).to_string(), "123456789");
        assert_eq!(HeaderValue::Float(1.0).to_string(), "1.0");
        assert_eq!(HeaderValue::Float(12.5).to_string(), "12.5");
        assert_eq!(HeaderValue::Float(-0.0).to_string(), "-0.0");
        assert_eq!(HeaderValue::Float(1e20).to_string(), "1e+20");
        assert_eq!(HeaderValue::Float(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(HeaderValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(
            HeaderValue::Float(1234567890123456.0).to_string(),
            "1234567890123456.0"
        );
        assert_eq!(HeaderValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(HeaderValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(
            HeaderValue::from(NaiveDate::from_ymd_opt(2014, 6, 3).unwrap()).to_string(),
            "2014-06-03"
        );
        assert_eq!(
            HeaderValue::List(vec!["Ada".into(), "Grace".into()]).to_string(),
            "['Ada', 'Grace']"
        );
        assert_eq!(HeaderValue::List(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_as_str_only_for_text() {
        assert_eq!(HeaderValue::from("Italy").as_str(), Some("Italy"));
        assert_eq!(HeaderValue::Integer(3).as_str(), None);
    }
}
