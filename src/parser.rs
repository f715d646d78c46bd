//! Field and collection parsers for command arguments
//!
//! The command shell splits a command string into named argument strings;
//! each function here turns one such raw string into a validated domain
//! value. Leading/trailing whitespace is trimmed before validation, except
//! for the fixed-width time format and the hours quantity, which are
//! validated as-is.
//!
//! Every failure carries the fixed message of the violated constraint, so
//! callers can surface it verbatim.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::StudentRef;
use crate::domain::value_objects::{Address, Email, Index, Level, Name, Phone, Subject, Tag};
use crate::error::{ParseError, ParseResult};

/// chrono pattern for the `yyyy-MM-dd HH:mm` time format
pub const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M";

/// The time format as shown to users in error text
pub const DATE_TIME_DISPLAY: &str = "YYYY-MM-DD HH:mm";

/// Generic structural/calendar failure for [`parse_time`]
pub const MESSAGE_TIME_FORMAT: &str = "Times should follow the format YYYY-MM-DD HH:mm.";

/// The explicit February guard message; stable regardless of how the
/// underlying date engine words its own leap-year rejection
pub const MESSAGE_INVALID_FEBRUARY: &str = "Invalid date. February has 29 days only in leap years.";

static INDEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("valid index regex"));

/// Parse a one-based display index. Trims, then requires a non-zero
/// unsigned integer; anything else (including overflow) is rejected.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    if !INDEX_RE.is_match(trimmed) {
        return Err(ParseError::InvalidIndex);
    }
    let value: usize = trimmed.parse().map_err(|_| ParseError::InvalidIndex)?;
    Index::from_one_based(value)
}

/// Parse a collection of indexes into a set, failing on the first invalid
/// element.
pub fn parse_indexes<I, S>(raws: I) -> ParseResult<BTreeSet<Index>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut indexes = BTreeSet::new();
    for raw in raws {
        indexes.insert(parse_index(raw.as_ref())?);
    }
    Ok(indexes)
}

/// Parse a name. Trims, then applies [`Name`]'s predicate.
pub fn parse_name(raw: &str) -> ParseResult<Name> {
    Name::new(raw.trim())
}

/// Parse a phone number. Trims, then applies [`Phone`]'s predicate.
pub fn parse_phone(raw: &str) -> ParseResult<Phone> {
    Phone::new(raw.trim())
}

/// Parse an email address. Trims, then applies [`Email`]'s predicate.
pub fn parse_email(raw: &str) -> ParseResult<Email> {
    Email::new(raw.trim())
}

/// Parse an address. Trims, then applies [`Address`]'s predicate.
pub fn parse_address(raw: &str) -> ParseResult<Address> {
    Address::new(raw.trim())
}

/// Parse a tag name. Trims, then applies [`Tag`]'s predicate.
pub fn parse_tag(raw: &str) -> ParseResult<Tag> {
    Tag::new(raw.trim())
}

/// Parse a collection of tag names, failing on the first invalid element.
pub fn parse_tags<I, S>(raws: I) -> ParseResult<BTreeSet<Tag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = BTreeSet::new();
    for raw in raws {
        tags.insert(parse_tag(raw.as_ref())?);
    }
    Ok(tags)
}

/// Parse a school level. Trims, then applies [`Level`]'s predicate.
pub fn parse_level(raw: &str) -> ParseResult<Level> {
    Level::new(raw.trim())
}

/// Parse a subject. Trims, then applies [`Subject`]'s predicate.
pub fn parse_subject(raw: &str) -> ParseResult<Subject> {
    Subject::new(raw.trim())
}

/// Parse a collection of subjects, failing on the first invalid element.
pub fn parse_subjects<I, S>(raws: I) -> ParseResult<BTreeSet<Subject>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut subjects = BTreeSet::new();
    for raw in raws {
        subjects.insert(parse_subject(raw.as_ref())?);
    }
    Ok(subjects)
}

/// Parse a child argument into a student reference.
///
/// The raw string is validated as a [`Name`] (with Name's constraint
/// message); the result is a [`StudentRef::Reference`] carrying only that
/// lookup key. Resolving it against the roster is the caller's job.
pub fn parse_child(raw: &str) -> ParseResult<StudentRef> {
    parse_name(raw).map(StudentRef::Reference)
}

/// Parse a collection of child arguments, failing on the first invalid
/// element.
pub fn parse_children<I, S>(raws: I) -> ParseResult<BTreeSet<StudentRef>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut children = BTreeSet::new();
    for raw in raws {
        children.insert(parse_child(raw.as_ref())?);
    }
    Ok(children)
}

/// Parse a `yyyy-MM-dd HH:mm` timestamp.
///
/// Before handing the text to chrono, the month/day digits are checked for
/// the one calendar mistake users actually make with a predictable cause: a
/// February day beyond 29. That case gets its own stable message; every
/// other structural or calendar failure gets the generic format message.
pub fn parse_time(raw: &str) -> ParseResult<NaiveDateTime> {
    let month = raw.get(5..7).and_then(|s| s.parse::<u32>().ok());
    let day = raw.get(8..10).and_then(|s| s.parse::<u32>().ok());
    if let (Some(2), Some(day)) = (month, day) {
        if day > 29 {
            return Err(ParseError::InvalidDate(MESSAGE_INVALID_FEBRUARY));
        }
    }
    NaiveDateTime::parse_from_str(raw, DATE_TIME_PATTERN)
        .map_err(|_| ParseError::InvalidDate(MESSAGE_TIME_FORMAT))
}

/// Parse an hours quantity.
///
/// Only unsigned integer text is accepted; the value is returned as `f64`
/// for downstream arithmetic.
pub fn parse_hours(raw: &str) -> ParseResult<f64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumeric);
    }
    let value: u64 = raw.parse().map_err(|_| ParseError::InvalidNumeric)?;
    Ok(value as f64)
}
