//! Structural checks over the set of header field names.
//!
//! These look only at which names appeared, not at their values:
//! repeated names, required names that never appeared, and names the
//! schema does not know.

use crate::constants::messages::{DUPLICATE_FIELDS, MISSING_FIELDS, SUPERFLUOUS_FIELDS};
use crate::report::{Reporter, format_name_list, format_name_set};
use crate::schema::{optional_fields, required_fields};
use std::collections::{BTreeSet, HashMap};
use std::io::Write;
use tracing::debug;

/// Field names appearing more than once, in order of first appearance
pub fn duplicate_fields(seen_fields: &[String]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in seen_fields {
        *counts.entry(name.as_str()).or_default() += 1;
    }

    let mut reported = BTreeSet::new();
    seen_fields
        .iter()
        .map(String::as_str)
        .filter(|name| counts[name] > 1 && reported.insert(*name))
        .collect()
}

/// Required field names that never appeared
pub fn missing_fields(seen_fields: &[String]) -> BTreeSet<&'static str> {
    let seen: BTreeSet<&str> = seen_fields.iter().map(String::as_str).collect();
    required_fields()
        .iter()
        .copied()
        .filter(|name| !seen.contains(*name))
        .collect()
}

/// Seen field names the schema does not define
pub fn superfluous_fields(seen_fields: &[String]) -> BTreeSet<&str> {
    seen_fields
        .iter()
        .map(String::as_str)
        .filter(|name| !required_fields().contains(*name) && !optional_fields().contains(*name))
        .collect()
}

/// Report repeated field names; returns whether there were none
pub fn check_duplicates<W: Write>(seen_fields: &[String], reporter: &mut Reporter<W>) -> bool {
    let duplicates = duplicate_fields(seen_fields);
    if duplicates.is_empty() {
        return true;
    }

    debug!("Duplicate header fields: {:?}", duplicates);
    reporter.error(DUPLICATE_FIELDS);
    reporter.detail(&format!(
        "\"{}\" appears more than once.",
        format_name_list(duplicates)
    ));
    false
}

/// Report required field names that never appeared; returns whether there were none
pub fn check_missing<W: Write>(seen_fields: &[String], reporter: &mut Reporter<W>) -> bool {
    let missing = missing_fields(seen_fields);
    if missing.is_empty() {
        return true;
    }

    debug!("Missing header fields: {:?}", missing);
    reporter.error(MISSING_FIELDS);
    reporter.detail(&format!("Offending entries: {}", format_name_set(missing)));
    false
}

/// Report field names outside the schema; returns whether there were none
pub fn check_superfluous<W: Write>(seen_fields: &[String], reporter: &mut Reporter<W>) -> bool {
    let superfluous = superfluous_fields(seen_fields);
    if superfluous.is_empty() {
        return true;
    }

    debug!("Superfluous header fields: {:?}", superfluous);
    reporter.error(SUPERFLUOUS_FIELDS);
    reporter.detail(&format!(
        "Offending entries: {}",
        format_name_set(superfluous)
    ));
    false
}

/// Run all three structural checks, reporting each failure
pub fn check_structure<W: Write>(seen_fields: &[String], reporter: &mut Reporter<W>) -> bool {
    let mut is_valid = true;
    is_valid &= check_duplicates(seen_fields, reporter);
    is_valid &= check_missing(seen_fields, reporter);
    is_valid &= check_superfluous(seen_fields, reporter);
    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RULES;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn all_required() -> Vec<String> {
        RULES
            .iter()
            .filter(|entry| entry.required)
            .map(|entry| entry.name.to_string())
            .collect()
    }

    #[test]
    fn test_duplicates_listed_once_in_first_seen_order() {
        let seen = names(&["root", "country", "root", "country", "root"]);
        assert_eq!(duplicate_fields(&seen), vec!["root", "country"]);
        assert!(duplicate_fields(&names(&["root", "country"])).is_empty());
    }

    #[test]
    fn test_missing_contact() {
        let seen: Vec<String> = all_required()
            .into_iter()
            .filter(|name| name != "contact")
            .collect();

        let missing: Vec<_> = missing_fields(&seen).into_iter().collect();
        assert_eq!(missing, vec!["contact"]);
    }

    #[test]
    fn test_superfluous_field() {
        let mut seen = all_required();
        seen.push("foo".to_string());
        seen.push("venue".to_string());

        let superfluous: Vec<_> = superfluous_fields(&seen).into_iter().collect();
        assert_eq!(superfluous, vec!["foo"]);
    }

    #[test]
    fn test_check_structure_clean() {
        let mut reporter = Reporter::new(Vec::new());
        assert!(check_structure(&all_required(), &mut reporter));
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_check_structure_reports_each_problem() {
        let mut seen = all_required();
        seen.retain(|name| name != "contact");
        seen.push("country".to_string());
        seen.push("foo".to_string());

        let mut reporter = Reporter::new(Vec::new());
        assert!(!check_structure(&seen, &mut reporter));
        assert_eq!(reporter.error_count(), 3);

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "ERROR:\tThere are categories appearing twice or more.\n\
             \t\"['country']\" appears more than once.\n\
             ERROR:\tThere are missing categories.\n\
             \tOffending entries: {'contact'}\n\
             ERROR:\tThere are superfluous categories.\n\
             \tOffending entries: {'foo'}\n"
        );
    }
}
