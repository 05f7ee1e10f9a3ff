//! Header block extraction and decoding.
//!
//! Isolates the `---`-delimited metadata block at the top of a workshop
//! page, records field names in the order they appear (duplicates
//! included), and decodes the block into [`HeaderValue`]s.

use crate::constants::{COMMENT_PREFIX, HEADER_MARKER, TEMPLATE_SENTINEL, patterns};
use crate::error::{CheckError, Result};
use crate::models::{HeaderValue, ParsedHeader};
use chrono::NaiveDate;
use regex::Regex;
use serde::de::{self as de, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static DATE_SCALAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::DATE).expect("date pattern is valid"));
static TIMESTAMP_SCALAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::TIMESTAMP).expect("timestamp pattern is valid"));

/// Read a document from disk and extract its header
pub fn read_header(file_path: &Path) -> Result<ParsedHeader> {
    let file = File::open(file_path).map_err(|e| CheckError::io(file_path, e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(|e| CheckError::io(file_path, e))?);
    }

    extract_header(&lines, file_path)
}

/// Extract the header from already-materialized document lines
///
/// An empty result is returned as-is; deciding that it is fatal is left to
/// the caller.
pub fn extract_header<S: AsRef<str>>(lines: &[S], file_path: &Path) -> Result<ParsedHeader> {
    let mut builder = HeaderBuilder::new();

    for line in lines {
        if builder.scan_line(line.as_ref()) == Scan::Stop {
            break;
        }
    }

    builder.build(file_path)
}

#[derive(Debug, PartialEq, Eq)]
enum Scan {
    Continue,
    Stop,
}

/// Accumulates header lines while scanning a document
struct HeaderBuilder {
    markers_seen: usize,
    buffer: Vec<String>,
    seen_fields: Vec<String>,
    quoted_fields: HashMap<String, bool>,
    template_found: bool,
}

impl HeaderBuilder {
    fn new() -> Self {
        Self {
            markers_seen: 0,
            buffer: Vec::new(),
            seen_fields: Vec::new(),
            quoted_fields: HashMap::new(),
            template_found: false,
        }
    }

    fn header_closed(&self) -> bool {
        self.markers_seen >= 2
    }

    fn scan_line(&mut self, raw: &str) -> Scan {
        let line = raw.trim_end();

        if line == HEADER_MARKER {
            if !self.header_closed() {
                self.markers_seen += 1;
            }
            return Scan::Continue;
        }

        // Body lines are only searched for the leftover template block
        if !self.header_closed() && !line.starts_with(COMMENT_PREFIX) {
            self.record_line(line);
        }

        if line.contains(TEMPLATE_SENTINEL) {
            info!("Template block still present in document");
            self.template_found = true;
            return Scan::Stop;
        }

        Scan::Continue
    }

    fn record_line(&mut self, line: &str) {
        self.buffer.push(line.to_string());

        let (name, rest) = match line.split_once(':') {
            Some((name, rest)) => (name.trim(), Some(rest.trim_start())),
            None => (line.trim(), None),
        };

        if let Some(rest) = rest {
            let quoted = rest.starts_with('"') || rest.starts_with('\'');
            self.quoted_fields.insert(name.to_string(), quoted);
        }
        self.seen_fields.push(name.to_string());
    }

    fn build(self, file_path: &Path) -> Result<ParsedHeader> {
        let text = self.buffer.join("\n");

        let entries = if text.trim().is_empty() {
            Vec::new()
        } else {
            HeaderEntries::deserialize(serde_yaml::Deserializer::from_str(&text))
                .map_err(|source| CheckError::HeaderDecode {
                    path: file_path.to_path_buf(),
                    source,
                })?
                .0
        };

        let mut data = BTreeMap::new();
        for (key, value) in entries {
            let name = convert_value(key).to_string();
            let quoted = self.quoted_fields.get(&name).copied().unwrap_or(false);
            let value = match convert_value(value) {
                HeaderValue::Text(text) if !quoted => parse_date_scalar(&text)
                    .map(HeaderValue::Date)
                    .unwrap_or(HeaderValue::Text(text)),
                other => other,
            };
            data.insert(name, value);
        }

        debug!(
            "Extracted header from {}: {} fields decoded, {} field lines seen",
            file_path.display(),
            data.len(),
            self.seen_fields.len()
        );

        Ok(ParsedHeader {
            data,
            seen_fields: self.seen_fields,
            template_found: self.template_found,
        })
    }
}

/// Parse a `YYYY-MM-DD` scalar, or the date part of a timestamp, into a date
fn parse_date_scalar(text: &str) -> Option<NaiveDate> {
    let date = if DATE_SCALAR.is_match(text) {
        text
    } else {
        TIMESTAMP_SCALAR.captures(text)?.get(1)?.as_str()
    };
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Convert a decoded YAML value into the header value model
fn convert_value(value: serde_yaml::Value) -> HeaderValue {
    use serde_yaml::Value;

    match value {
        Value::Null => HeaderValue::Null,
        Value::Bool(b) => HeaderValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => HeaderValue::Integer(i),
            None => HeaderValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => HeaderValue::Text(s),
        Value::Sequence(items) => HeaderValue::List(items.into_iter().map(convert_value).collect()),
        Value::Mapping(mapping) => HeaderValue::Mapping(
            mapping
                .into_iter()
                .map(|(k, v)| (convert_value(k).to_string(), convert_value(v)))
                .collect(),
        ),
        Value::Tagged(tagged) => convert_value(tagged.value),
    }
}

/// Top-level header entries in document order
///
/// Decoded through a plain map visitor so repeated keys are kept rather
/// than rejected; repeated fields are reported by the structural checks.
struct HeaderEntries(Vec<(serde_yaml::Value, serde_yaml::Value)>);

impl<'de> Deserialize<'de> for HeaderEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HeaderEntriesVisitor)
    }
}

struct HeaderEntriesVisitor;

impl<'de> Visitor<'de> for HeaderEntriesVisitor {
    type Value = HeaderEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of header fields")
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    // A scalar or list where the header should be is treated as no header
    fn visit_str<E>(self, _: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_bool<E>(self, _: bool) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_i64<E>(self, _: i64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_u64<E>(self, _: u64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_f64<E>(self, _: f64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(HeaderEntries(Vec::new()))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(HeaderEntries(entries))
    }
}
