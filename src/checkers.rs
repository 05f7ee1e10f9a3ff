//! Per-field value checkers.
//!
//! Each checker is a pure predicate over one decoded [`HeaderValue`].
//! Most are composed with [`reject_fixme`], so a text value still marked
//! `FIXME` fails before its own rule is evaluated. List checkers and
//! [`check_pass`] are not guarded.

use crate::constants::{
    DEFAULT_CONTACT_EMAIL, FIXME_MARKER, WORKSHOP_LAYOUT, WORKSHOP_ROOT, patterns,
};
use crate::models::HeaderValue;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(patterns::EMAIL));
static HUMANTIME: LazyLock<Regex> = LazyLock::new(|| compile(patterns::HUMANTIME));
static EVENTBRITE: LazyLock<Regex> = LazyLock::new(|| compile(patterns::EVENTBRITE));
static URL: LazyLock<Regex> = LazyLock::new(|| compile(patterns::URL));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

/// Signature shared by every field checker
pub type Checker = fn(&HeaderValue) -> bool;

/// Whether a value is an unfinished `FIXME` placeholder
pub fn is_fixme(value: &HeaderValue) -> bool {
    value
        .as_str()
        .is_some_and(|text| text.trim_start().starts_with(FIXME_MARKER))
}

/// Run `rule` unless the value is a `FIXME` placeholder
pub fn reject_fixme(value: &HeaderValue, rule: impl FnOnce(&HeaderValue) -> bool) -> bool {
    !is_fixme(value) && rule(value)
}

/// `layout` must be exactly "workshop"
pub fn check_layout(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| v.as_str() == Some(WORKSHOP_LAYOUT))
}

/// `root` must be exactly "."
pub fn check_root(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| v.as_str() == Some(WORKSHOP_ROOT))
}

/// A country is a single word: present and without spaces
pub fn check_country(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| v.as_str().is_some_and(|c| !c.contains(' ')))
}

/// A human date has a three-letter month and a numeric year
///
/// "Feb 18-20, 2525" and "Feb 18 and 20, 2014" pass, "February 18, 2014"
/// does not.
pub fn check_humandate(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| v.as_str().is_some_and(humandate_is_valid))
}

fn humandate_is_valid(date: &str) -> bool {
    let mut segments = date.split(',');
    let (Some(month_dates), Some(year), None) = (segments.next(), segments.next(), segments.next())
    else {
        return false;
    };

    let chars: Vec<char> = month_dates.chars().collect();
    if chars.len() < 4 {
        return false;
    }
    if chars[..3].iter().any(|&c| c == ' ') || chars[3] != ' ' {
        return false;
    }

    year.trim().parse::<i64>().is_ok()
}

/// A human time is a start-end range in 12-hour (am/pm) or 24-hour form
pub fn check_humantime(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| {
        v.as_str()
            .is_some_and(|time| HUMANTIME.is_match(&time.replace(' ', "")))
    })
}

/// Dates must have decoded as calendar dates, not text
pub fn check_date(value: &HeaderValue) -> bool {
    matches!(value, HeaderValue::Date(_))
}

/// Coordinates are two floating point numbers separated by a comma
pub fn check_latitude_longitude(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| {
        let Some(latlng) = v.as_str() else {
            return false;
        };
        match latlng.split(',').collect::<Vec<_>>().as_slice() {
            [lat, lng] => lat.trim().parse::<f64>().is_ok() && lng.trim().parse::<f64>().is_ok(),
            _ => false,
        }
    })
}

/// Instructors are a non-empty list
pub fn check_instructors(value: &HeaderValue) -> bool {
    matches!(value, HeaderValue::List(items) if !items.is_empty())
}

/// Helpers are a list, possibly empty
pub fn check_helpers(value: &HeaderValue) -> bool {
    matches!(value, HeaderValue::List(_))
}

/// A contact address looks like an email and is not the template default
pub fn check_email(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| {
        v.as_str()
            .is_some_and(|email| EMAIL.is_match(email) && email != DEFAULT_CONTACT_EMAIL)
    })
}

/// An Eventbrite key is 9 or 10 digits; numbers are checked by their text form
pub fn check_eventbrite(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| {
        let key = match v.as_str() {
            Some(text) => text.to_string(),
            None => v.to_string(),
        };
        EVENTBRITE.is_match(&key)
    })
}

/// An Etherpad location is an http(s) URL
pub fn check_etherpad(value: &HeaderValue) -> bool {
    reject_fixme(value, |v| v.as_str().is_some_and(|url| URL.is_match(url)))
}

/// Presence-only fields such as venue and address
pub fn check_pass(_value: &HeaderValue) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(s: &str) -> HeaderValue {
        HeaderValue::from(s)
    }

    fn list(items: &[&str]) -> HeaderValue {
        HeaderValue::List(items.iter().map(|s| HeaderValue::from(*s)).collect())
    }

    #[test]
    fn test_fixme_rejected_by_guarded_checkers() {
        let guarded: &[Checker] = &[
            check_layout,
            check_root,
            check_country,
            check_humandate,
            check_humantime,
            check_latitude_longitude,
            check_email,
            check_eventbrite,
            check_etherpad,
        ];
        for checker in guarded {
            assert!(!checker(&text("FIXME")));
            assert!(!checker(&text("   FIXME: fill me in")));
        }
    }

    #[test]
    fn test_fixme_ignored_by_unguarded_checkers() {
        assert!(check_pass(&text("FIXME")));
        assert!(check_instructors(&list(&["FIXME"])));
        assert!(check_helpers(&list(&["FIXME"])));
    }

    #[test]
    fn test_fixme_only_matches_at_start() {
        assert!(is_fixme(&text(" \tFIXME")));
        assert!(!is_fixme(&text("not FIXME")));
        assert!(!is_fixme(&HeaderValue::Null));
    }

    #[test]
    fn test_check_layout() {
        assert!(check_layout(&text("workshop")));
        assert!(!check_layout(&text("lesson")));
        assert!(!check_layout(&text("Workshop")));
        assert!(!check_layout(&HeaderValue::Null));
    }

    #[test]
    fn test_check_root() {
        assert!(check_root(&text(".")));
        assert!(!check_root(&text("..")));
        assert!(!check_root(&text("./")));
    }

    #[test]
    fn test_check_country() {
        assert!(check_country(&text("Italy")));
        assert!(check_country(&text("United-States")));
        assert!(!check_country(&text("United States")));
        assert!(!check_country(&HeaderValue::Null));
    }

    #[test]
    fn test_check_humandate() {
        assert!(check_humandate(&text("Feb 18-20, 2525")));
        assert!(check_humandate(&text("Feb 18 and 20, 2014")));
        assert!(!check_humandate(&text("February 18, 2014")));
        assert!(!check_humandate(&text("Feb 18-20")));
        assert!(!check_humandate(&text("Feb 18-20, twenty")));
        assert!(!check_humandate(&text("Feb, 2014")));
        assert!(!check_humandate(&text("Fe 18, 2014")));
        assert!(!check_humandate(&text("Feb 18, 2014, 2015")));
    }

    #[test]
    fn test_check_humantime() {
        assert!(check_humantime(&text("9:00am - 4:30pm")));
        assert!(check_humantime(&text("9:00am to 4:30pm")));
        assert!(check_humantime(&text("09:00-17:00")));
        assert!(check_humantime(&text("9:00 to 17:00")));
        assert!(!check_humantime(&text("morning")));
        assert!(!check_humantime(&text("9am-5pm")));
        assert!(!check_humantime(&text("25:00-26:00")));
    }

    #[test]
    fn test_check_date() {
        let date = NaiveDate::from_ymd_opt(2014, 1, 31).unwrap();
        assert!(check_date(&HeaderValue::Date(date)));
        assert!(!check_date(&text("2014-01-31")));
        assert!(!check_date(&HeaderValue::Null));
    }

    #[test]
    fn test_check_latitude_longitude() {
        assert!(check_latitude_longitude(&text("12.34,56.78")));
        assert!(check_latitude_longitude(&text("41.7901128, -87.6007318")));
        assert!(!check_latitude_longitude(&text("12.34")));
        assert!(!check_latitude_longitude(&text("12.34,56.78,9")));
        assert!(!check_latitude_longitude(&text("north,south")));
    }

    #[test]
    fn test_check_instructors_and_helpers() {
        assert!(check_instructors(&list(&["Ada Lovelace"])));
        assert!(!check_instructors(&list(&[])));
        assert!(!check_instructors(&text("Ada Lovelace")));

        assert!(check_helpers(&list(&[])));
        assert!(check_helpers(&list(&["Grace Hopper"])));
        assert!(!check_helpers(&text("Grace Hopper")));
    }

    #[test]
    fn test_check_email() {
        assert!(check_email(&text("a@b.com")));
        assert!(!check_email(&text(DEFAULT_CONTACT_EMAIL)));
        assert!(!check_email(&text("not-an-email")));
        assert!(!check_email(&text("a@b")));
    }

    #[test]
    fn test_check_eventbrite() {
        assert!(check_eventbrite(&HeaderValue::Integer(123456789)));
        assert!(check_eventbrite(&text("1234567890")));
        assert!(!check_eventbrite(&text("12")));
        assert!(!check_eventbrite(&HeaderValue::Integer(12)));
        assert!(!check_eventbrite(&HeaderValue::Float(1e20)));
        assert!(!check_eventbrite(&text("abcdefghij")));
    }

    #[test]
    fn test_check_etherpad() {
        assert!(check_etherpad(&text("https://pad.example.org/workshop")));
        assert!(check_etherpad(&text("http://pad.example.org/x")));
        assert!(!check_etherpad(&text("pad.example.org")));
        assert!(!check_etherpad(&text("https://")));
    }

    #[test]
    fn test_check_pass() {
        assert!(check_pass(&text("Room 101")));
        assert!(check_pass(&HeaderValue::Null));
    }
}
