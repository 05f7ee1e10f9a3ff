//! The workshop header schema.
//!
//! A fixed rule table mapping each field name to whether it is required,
//! which checker validates it, and the message shown when it fails. The
//! required and optional field sets are derived from the table once.

use crate::checkers::{self, Checker};
use crate::models::HeaderValue;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Kind of value a schema field holds, selecting its checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Layout,
    Root,
    Country,
    HumanDate,
    HumanTime,
    Date,
    Coordinates,
    InstructorList,
    HelperList,
    ContactEmail,
    EventbriteKey,
    EtherpadUrl,
    PassThrough,
}

impl FieldKind {
    pub fn checker(self) -> Checker {
        match self {
            FieldKind::Layout => checkers::check_layout,
            FieldKind::Root => checkers::check_root,
            FieldKind::Country => checkers::check_country,
            FieldKind::HumanDate => checkers::check_humandate,
            FieldKind::HumanTime => checkers::check_humantime,
            FieldKind::Date => checkers::check_date,
            FieldKind::Coordinates => checkers::check_latitude_longitude,
            FieldKind::InstructorList => checkers::check_instructors,
            FieldKind::HelperList => checkers::check_helpers,
            FieldKind::ContactEmail => checkers::check_email,
            FieldKind::EventbriteKey => checkers::check_eventbrite,
            FieldKind::EtherpadUrl => checkers::check_etherpad,
            FieldKind::PassThrough => checkers::check_pass,
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct SchemaEntry {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub message: &'static str,
}

impl SchemaEntry {
    const fn new(
        name: &'static str,
        required: bool,
        kind: FieldKind,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            required,
            kind,
            message,
        }
    }

    pub fn check(&self, value: &HeaderValue) -> bool {
        (self.kind.checker())(value)
    }
}

/// Every field a workshop header may contain, in checking order
pub static RULES: &[SchemaEntry] = &[
    SchemaEntry::new(
        "layout",
        true,
        FieldKind::Layout,
        "layout isn't \"workshop\".",
    ),
    SchemaEntry::new("root", true, FieldKind::Root, "root can only be \".\"."),
    SchemaEntry::new(
        "country",
        true,
        FieldKind::Country,
        "country invalid. Please check whether there are spaces inside the country-name.",
    ),
    SchemaEntry::new(
        "humandate",
        true,
        FieldKind::HumanDate,
        "humandate invalid. Please use three-letter months like \"Jan\" and four-letter years like \"2025\".",
    ),
    SchemaEntry::new(
        "humantime",
        true,
        FieldKind::HumanTime,
        "humantime doesn't include numbers.",
    ),
    SchemaEntry::new(
        "startdate",
        true,
        FieldKind::Date,
        "startdate invalid. Must be of format year-month-day, i.e., 2014-01-31.",
    ),
    SchemaEntry::new(
        "enddate",
        false,
        FieldKind::Date,
        "enddate invalid. Must be of format year-month-day, i.e., 2014-01-31.",
    ),
    SchemaEntry::new(
        "latlng",
        true,
        FieldKind::Coordinates,
        "latlng invalid. Check that it is two floating point numbers, separated by a comma.",
    ),
    SchemaEntry::new(
        "instructor",
        true,
        FieldKind::InstructorList,
        "instructor list isn't a valid list of format [\"First instructor\", \"Second instructor\",..].",
    ),
    SchemaEntry::new(
        "helper",
        true,
        FieldKind::HelperList,
        "helper list isn't a valid list of format [\"First helper\", \"Second helper\",..].",
    ),
    SchemaEntry::new(
        "contact",
        true,
        FieldKind::ContactEmail,
        "contact email invalid or still set to \"admin@software-carpentry.org\".",
    ),
    SchemaEntry::new(
        "eventbrite",
        false,
        FieldKind::EventbriteKey,
        "Eventbrite key appears invalid.",
    ),
    SchemaEntry::new(
        "etherpad",
        false,
        FieldKind::EtherpadUrl,
        "Etherpad URL appears invalid.",
    ),
    SchemaEntry::new(
        "venue",
        false,
        FieldKind::PassThrough,
        "venue name not specified",
    ),
    SchemaEntry::new(
        "address",
        false,
        FieldKind::PassThrough,
        "address not specified",
    ),
];

static REQUIRED: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    RULES
        .iter()
        .filter(|entry| entry.required)
        .map(|entry| entry.name)
        .collect()
});

static OPTIONAL: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    RULES
        .iter()
        .filter(|entry| !entry.required)
        .map(|entry| entry.name)
        .collect()
});

/// Names of fields every header must contain
pub fn required_fields() -> &'static BTreeSet<&'static str> {
    &REQUIRED
}

/// Names of fields a header may contain
pub fn optional_fields() -> &'static BTreeSet<&'static str> {
    &OPTIONAL
}

/// Look up the rule for a field
pub fn lookup(name: &str) -> Option<&'static SchemaEntry> {
    RULES.iter().find(|entry| entry.name == name)
}
