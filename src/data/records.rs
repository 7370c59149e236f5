//! Parsers for the catalog's `;`-delimited payloads
//!
//! Menu payloads look like `status;count;name;date;...` (pairs) or, at item
//! depth, `status;count;name;date;access;likes;...`. Detail payloads are
//! strictly positional. Short or malformed payloads produce empty results,
//! never errors.

use super::{decode_date, parse_leading_int, Depth, DetailRecord, MenuItem, ParseMode, Screen};

/// Field separator
const DELIMITER: char = ';';

/// Minimum fields a detail payload needs
const DETAIL_FIELDS: usize = 9;

/// Parses a menu payload into rows
///
/// Iteration starts at field 2 and stops at `2 + count * stride` or the end
/// of the payload, whichever comes first. Rows with an empty name are
/// skipped and a trailing partial tuple is dropped.
pub fn parse_menu(payload: &str, mode: ParseMode) -> Vec<MenuItem> {
    let stride = match mode {
        ParseMode::Pairs => 2,
        ParseMode::Quads => 4,
        ParseMode::Detail => return Vec::new(),
    };

    let parts: Vec<&str> = payload.split(DELIMITER).collect();
    if parts.len() < 3 {
        return Vec::new();
    }

    let count = parse_leading_int(parts[1])
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    let end = count
        .saturating_mul(stride)
        .saturating_add(2)
        .min(parts.len());

    parts[2..end]
        .chunks_exact(stride)
        .filter_map(|tuple| {
            let name = tuple[0].trim();
            if name.is_empty() {
                return None;
            }
            let (access, likes) = if stride == 4 {
                (Some(tuple[2].trim().to_string()), Some(tuple[3].trim().to_string()))
            } else {
                (None, None)
            };
            Some(MenuItem {
                name: name.to_string(),
                date: decode_date(tuple[1]),
                access,
                likes,
            })
        })
        .collect()
}

/// Parses a detail payload
///
/// Returns `None` unless the payload has at least nine fields.
pub fn parse_detail(payload: &str) -> Option<DetailRecord> {
    let parts: Vec<&str> = payload.split(DELIMITER).collect();
    if parts.len() < DETAIL_FIELDS {
        return None;
    }

    Some(DetailRecord {
        filename: parts[1].to_string(),
        author: parts[2].to_string(),
        license: parts[3].to_string(),
        description: parts[4].to_string(),
        file_id: parts[5].trim().to_string(),
        access_level: parts[6].to_string(),
        likes: parts[7].to_string(),
        downloads: parts[8].to_string(),
    })
}

/// Parses a payload with the layout used at `depth`
pub fn parse_screen(payload: &str, depth: Depth) -> Screen {
    match depth.parse_mode() {
        ParseMode::Detail => Screen::Detail(parse_detail(payload)),
        mode => Screen::Menu {
            depth,
            items: parse_menu(payload, mode),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DEFAULT_DOWNLOAD_BASE, INVALID_DATE};

    #[test]
    fn test_parse_pairs() {
        let items = parse_menu("0;2;Alpha;16912;Beta;17000", ParseMode::Pairs);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Alpha");
        assert_eq!(items[0].date, "28.12.33");
        assert_eq!(items[1].name, "Beta");
        assert_eq!(items[1].date, INVALID_DATE);
        assert!(items[0].access.is_none());
        assert!(items[0].likes.is_none());
    }

    #[test]
    fn test_count_larger_than_payload_truncates() {
        let items = parse_menu("0;10;Alpha;16912;Beta", ParseMode::Pairs);

        // Beta has no date field, so its tuple is incomplete and dropped
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Alpha");
    }

    #[test]
    fn test_count_limits_rows() {
        let items = parse_menu("0;1;Alpha;16912;Beta;16912", ParseMode::Pairs);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_count_reads_leading_integer() {
        let items = parse_menu("0;2.0;Alpha;16912;Beta;16912", ParseMode::Pairs);
        assert_eq!(items.len(), 2);

        let items = parse_menu("0;2abc;Alpha;16912;Beta;16912", ParseMode::Pairs);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Beta");
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let items = parse_menu("0;3;  ;16912;Beta;16912;;1", ParseMode::Pairs);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Beta");
    }

    #[test]
    fn test_names_are_trimmed() {
        let items = parse_menu("0;1; Alpha \n;16912", ParseMode::Pairs);
        assert_eq!(items[0].name, "Alpha");
        assert_eq!(items[0].date, "28.12.33");
    }

    #[test]
    fn test_short_and_malformed_payloads_are_empty() {
        assert!(parse_menu("", ParseMode::Pairs).is_empty());
        assert!(parse_menu("0;0;", ParseMode::Pairs).is_empty());
        assert!(parse_menu("0;2", ParseMode::Pairs).is_empty());
        assert!(parse_menu("0;x;Alpha;16912", ParseMode::Pairs).is_empty());
        assert!(parse_menu("0;-1;Alpha;16912", ParseMode::Pairs).is_empty());
    }

    #[test]
    fn test_parse_quads() {
        let payload = "1;2;Doom;16912;free;12;Quake;abc;paid;7";
        let items = parse_menu(payload, ParseMode::Quads);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Doom");
        assert_eq!(items[0].access.as_deref(), Some("free"));
        assert_eq!(items[0].likes.as_deref(), Some("12"));
        assert_eq!(items[1].date, INVALID_DATE);
        assert_eq!(items[1].access.as_deref(), Some("paid"));
    }

    #[test]
    fn test_quads_drop_partial_tuple() {
        let items = parse_menu("1;2;Doom;16912;free;12;Quake;16912;paid", ParseMode::Quads);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_parse_detail_with_nine_fields() {
        let payload = "1;doom.zip;id;GPL;Shooter; FILE42 ;free;99;1000";
        let record = parse_detail(payload).expect("nine fields should parse");

        assert_eq!(record.filename, "doom.zip");
        assert_eq!(record.author, "id");
        assert_eq!(record.license, "GPL");
        assert_eq!(record.description, "Shooter");
        assert_eq!(record.file_id, "FILE42");
        assert_eq!(record.access_level, "free");
        assert_eq!(record.likes, "99");
        assert_eq!(record.downloads, "1000");
        assert_eq!(
            record.download_path(DEFAULT_DOWNLOAD_BASE),
            format!("{}FILE42", DEFAULT_DOWNLOAD_BASE)
        );
    }

    #[test]
    fn test_parse_detail_with_eight_fields_is_none() {
        assert!(parse_detail("1;doom.zip;id;GPL;Shooter;FILE42;free;99").is_none());
    }

    #[test]
    fn test_default_detail_payload_parses() {
        let record = parse_detail("1;2;3;4;5;6;7;8;9").unwrap();
        assert_eq!(record.filename, "2");
        assert_eq!(record.file_id, "6");
    }

    #[test]
    fn test_parse_screen_dispatches_by_depth() {
        match parse_screen("0;1;Alpha;16912", Depth::Categories) {
            Screen::Menu { depth, items } => {
                assert_eq!(depth, Depth::Categories);
                assert_eq!(items.len(), 1);
            }
            other => panic!("unexpected screen {:?}", other),
        }

        match parse_screen("1;1;Doom;16912;free;5", Depth::Items) {
            Screen::Menu { items, .. } => assert_eq!(items[0].likes.as_deref(), Some("5")),
            other => panic!("unexpected screen {:?}", other),
        }

        assert_eq!(parse_screen("0;0;", Depth::Detail), Screen::Detail(None));
    }
}
