//! Diagnostic output.
//!
//! Diagnostics are written as soon as a problem is found, one tab-separated
//! line per message with optional indented detail lines.

use crate::constants::messages::{ERROR_PREFIX, WARN_PREFIX};
use std::collections::BTreeSet;
use std::io::Write;

/// Writes `ERROR:`/`WARN:` diagnostics to a sink
pub struct Reporter<W: Write> {
    sink: W,
    errors: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            errors: 0,
        }
    }

    pub fn error(&mut self, message: &str) {
        self.errors += 1;
        self.line(&format!("{}\t{}", ERROR_PREFIX, message));
    }

    pub fn warn(&mut self, message: &str) {
        self.line(&format!("{}\t{}", WARN_PREFIX, message));
    }

    /// Indented follow-up line for the preceding error or warning
    pub fn detail(&mut self, detail: &str) {
        self.line(&format!("\t{}", detail));
    }

    /// Free-form status line
    pub fn note(&mut self, message: &str) {
        self.line(message);
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn line(&mut self, text: &str) {
        // Nothing sensible can be reported if the diagnostic stream is gone
        let _ = writeln!(self.sink, "{}", text);
    }
}

/// Render field names as a set, e.g. `{'contact', 'country'}`
pub fn format_name_set<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: BTreeSet<&str> = names.into_iter().collect();
    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Render field names as a list, e.g. `['country']`
pub fn format_name_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = names
        .into_iter()
        .map(|name| format!("'{}'", name))
        .collect();
    format!("[{}]", quoted.join(", "))
}
