use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const FULL_TIME_FMT: &str = "%Y/%m/%d %H:%M:%S";
pub const DAY_TIME_FMT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: String,
}

impl Note {
    pub fn new(text: impl Into<String>, tags: Vec<String>, date: impl Into<String>) -> Self {
        Self { text: text.into(), tags, date: date.into() }
    }
}

/// One element of the persisted array. Old widgets stored bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredEntry {
    Legacy(String),
    Record(Note),
}

impl From<StoredEntry> for Note {
    fn from(entry: StoredEntry) -> Self {
        match entry {
            StoredEntry::Legacy(text) => Note::new(text, Vec::new(), ""),
            StoredEntry::Record(note) => note,
        }
    }
}

/// Which timestamp shape new memos are stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    #[default]
    Full,
    Day,
}

impl DateStyle {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full" => Some(DateStyle::Full),
            "day" => Some(DateStyle::Day),
            _ => None,
        }
    }

    pub fn format(self) -> &'static str {
        match self {
            DateStyle::Full => FULL_TIME_FMT,
            DateStyle::Day => DAY_TIME_FMT,
        }
    }

    pub fn stamp(self, at: NaiveDateTime) -> String {
        at.format(self.format()).to_string()
    }
}

pub fn timestamp_string(style: DateStyle) -> String {
    style.stamp(Local::now().naive_local())
}

pub fn day_portion(date: &str) -> &str {
    date.split(' ').next().unwrap_or_default()
}
