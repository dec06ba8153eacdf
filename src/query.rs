//! Filtering and ordering of memos.
//!
//! Every query is a linear scan over the store snapshot. Memo lists are
//! personal-scale, so no index is kept.

use crate::normalize::normalize;
use crate::note::{Note, day_portion};
use crate::tags::{note_has_tags, parse_tags};
use regex::Regex;
use std::sync::OnceLock;

fn day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2}$").expect("static regex")
    })
}

fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4}/[0-9]{2}/[0-9]{2})-([0-9]{4}/[0-9]{2}/[0-9]{2})$")
            .expect("static regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    Any,
    Day(String),
    Range { from: String, to: String },
    /// Input that is neither a day nor a range. Matches everything so a
    /// half-typed date does not hide results.
    Unrecognized(String),
}

impl DateFilter {
    pub fn parse(raw: &str) -> Self {
        let input = normalize(raw);
        if input.is_empty() {
            return DateFilter::Any;
        }
        if let Some(caps) = range_re().captures(&input) {
            return DateFilter::Range {
                from: caps[1].to_string(),
                to: caps[2].to_string(),
            };
        }
        if day_re().is_match(&input) {
            return DateFilter::Day(input);
        }
        DateFilter::Unrecognized(input)
    }

    pub fn matches(&self, date: &str) -> bool {
        let day = day_portion(date);
        match self {
            DateFilter::Any | DateFilter::Unrecognized(_) => true,
            DateFilter::Day(d) => day == d,
            DateFilter::Range { from, to } => {
                day >= from.as_str() && day <= to.as_str()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub tags: Vec<String>,
    pub date: DateFilter,
}

impl Query {
    /// Build a query from the three raw filter inputs. The text is only
    /// trimmed; tag and date inputs are normalized.
    pub fn from_inputs(text: &str, tags: &str, date: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            tags: parse_tags(tags),
            date: DateFilter::parse(date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.tags.is_empty()
            && self.date == DateFilter::Any
    }

    pub fn matches(&self, note: &Note) -> bool {
        (self.text.is_empty() || note.text.contains(&self.text))
            && note_has_tags(note, &self.tags)
            && self.date.matches(&note.date)
    }
}

/// Matching memos, most recent first. Dates compare as plain strings; the
/// sort is stable so equal dates keep insertion order, and undated memos
/// land last.
pub fn query(notes: &[Note], q: &Query) -> Vec<Note> {
    let mut results: Vec<Note> =
        notes.iter().filter(|n| q.matches(n)).cloned().collect();
    results.sort_by(|a, b| b.date.cmp(&a.date));
    results
}
