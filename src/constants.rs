//! Constants for workshop header checking
//!
//! Markers, patterns and fixed messages shared by the extractor, the
//! field checkers and the reporter.

// =============================================================================
// Document Layout
// =============================================================================

/// Line that opens and closes the header block
pub const HEADER_MARKER: &str = "---";

/// Header lines starting with this prefix are ignored
pub const COMMENT_PREFIX: char = '#';

/// Phrase left behind when the template block was not removed from the page
pub const TEMPLATE_SENTINEL: &str = "This page is a template for workshop home pages.";

/// Files tried, in order, when no path is given on the command line
pub const DEFAULT_INDEX_PATHS: &[&str] = &["./index.html", "../index.html"];

// =============================================================================
// Field Rules
// =============================================================================

/// Values starting with this marker (after leading whitespace) are unfinished
pub const FIXME_MARKER: &str = "FIXME";

/// Contact address shipped with the template, never acceptable in a real page
pub const DEFAULT_CONTACT_EMAIL: &str = "admin@software-carpentry.org";

/// Required value of the `layout` field
pub const WORKSHOP_LAYOUT: &str = "workshop";

/// Required value of the `root` field
pub const WORKSHOP_ROOT: &str = ".";

pub mod patterns {
    //! Regular expressions, anchored at the start only

    pub const EMAIL: &str = r"^[^@]+@[^@]+\.[^@]+";

    /// 12-hour range with am/pm markers, or 24-hour range; `-` or `to` between
    pub const HUMANTIME: &str = r"^(((0?\d|1[0-1]):[0-5]\d(am|pm)(-|to)(0?\d|1[0-1]):[0-5]\d(am|pm))|((0?\d|1\d|2[0-3]):[0-5]\d(-|to)(0?\d|1\d|2[0-3]):[0-5]\d))";

    pub const EVENTBRITE: &str = r"^\d{9,10}";

    pub const URL: &str = r"^https?://.+";

    /// Plain scalars of this shape decode as calendar dates
    pub const DATE: &str = r"^\d{4}-\d{2}-\d{2}$";

    /// Plain scalars of this shape are timestamps; only the date part is kept
    pub const TIMESTAMP: &str = r"^(\d{4}-\d{1,2}-\d{1,2})(?:[Tt]|[ \t]+)\d{1,2}:\d{2}:\d{2}(?:\.\d*)?(?:[ \t]*(?:Z|[-+]\d{1,2}(?::\d{2})?))?$";
}

// =============================================================================
// Diagnostics
// =============================================================================

pub mod messages {
    pub const ERROR_PREFIX: &str = "ERROR:";
    pub const WARN_PREFIX: &str = "WARN:";

    pub const TEMPLATE_WARNING: &str =
        "You seem to still have the template header in your index.html. Please remove that.";
    pub const TEMPLATE_HINT: &str =
        "Look for: \"<!-- Remove the block below. -->\" in the index.html.";

    pub const DUPLICATE_FIELDS: &str = "There are categories appearing twice or more.";
    pub const MISSING_FIELDS: &str = "There are missing categories.";
    pub const SUPERFLUOUS_FIELDS: &str = "There are superfluous categories.";

    pub const ALL_GOOD: &str = "Everything seems to be in order.";
    pub const PROBLEMS: &str = "There were problems, please see above.";

    pub const USAGE: &str =
        "Usage: \"workshop_check\" or \"workshop_check path/to/index.html\"";
}
