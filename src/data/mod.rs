//! Core data models for the game menu
//!
//! This module contains the navigation depths, the menu rows and the detail
//! record decoded from the catalog's `;`-delimited payloads.

pub mod date;
pub mod records;

pub use date::{decode_date, encode_date, INVALID_DATE};
pub use records::{parse_detail, parse_menu, parse_screen};

/// Base URL that detail file ids are appended to
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://drive.google.com/file/d/";

/// Navigation level of a request, from top category down to a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Top-level categories
    Categories,
    /// Subcategories within a category
    Subcategories,
    /// Games within a subcategory, with access level and likes
    Items,
    /// A single game record
    Detail,
}

/// How a payload at a given depth is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// `name;date` pairs
    Pairs,
    /// `name;date;access;likes` quadruples
    Quads,
    /// Positional detail record
    Detail,
}

impl Depth {
    /// All depths from the root down
    pub const ALL: [Depth; 4] = [
        Depth::Categories,
        Depth::Subcategories,
        Depth::Items,
        Depth::Detail,
    ];

    /// The `cmd` value sent to the endpoint
    pub fn as_cmd(self) -> &'static str {
        match self {
            Depth::Categories => "1",
            Depth::Subcategories => "2",
            Depth::Items => "3",
            Depth::Detail => "4",
        }
    }

    /// Parses a `cmd` value back into a depth
    pub fn from_cmd(cmd: &str) -> Option<Depth> {
        Depth::ALL.into_iter().find(|d| d.as_cmd() == cmd.trim())
    }

    /// The depth reached by selecting a row at this depth
    pub fn next(self) -> Option<Depth> {
        match self {
            Depth::Categories => Some(Depth::Subcategories),
            Depth::Subcategories => Some(Depth::Items),
            Depth::Items => Some(Depth::Detail),
            Depth::Detail => None,
        }
    }

    pub fn parse_mode(self) -> ParseMode {
        match self {
            Depth::Categories | Depth::Subcategories => ParseMode::Pairs,
            Depth::Items => ParseMode::Quads,
            Depth::Detail => ParseMode::Detail,
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_cmd())
    }
}

/// Reads the integer at the start of a field
///
/// Leading whitespace and an optional sign are accepted, then as many digits
/// as follow; anything after them is ignored, so `"2.0"` and `"2abc"` both
/// read as 2. Returns `None` when no digit follows or the value overflows.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A selectable row in a menu list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Item name, also the discriminator for the next request
    pub name: String,
    /// Decoded `DD.MM.YYYY` date or [`INVALID_DATE`]
    pub date: String,
    /// Access level (item depth only)
    pub access: Option<String>,
    /// Like count as sent by the server (item depth only)
    pub likes: Option<String>,
}

/// Full record for a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub filename: String,
    pub author: String,
    pub license: String,
    pub description: String,
    /// Identifier of the downloadable file
    pub file_id: String,
    pub access_level: String,
    pub likes: String,
    /// Parsed but never displayed
    pub downloads: String,
}

impl DetailRecord {
    /// Download link built from the given base URL and the file id
    pub fn download_path(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.file_id)
    }
}

/// What a finished load produced, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Nothing loaded yet, or cleared for a pending load
    Empty,
    /// A list of rows at a menu depth
    Menu { depth: Depth, items: Vec<MenuItem> },
    /// A detail record, `None` if the payload was too short
    Detail(Option<DetailRecord>),
}
