//! Formatting helpers for raw catalogue strings

use chrono::NaiveDate;

/// Number of members shown on an artist card before collapsing into "+N more".
pub const CARD_MEMBER_LIMIT: usize = 3;

/// Turn an upstream location slug into a display name.
///
/// `"north_carolina-usa"` becomes `"North Carolina, USA"`. Short trailing
/// segments are treated as country codes and upper-cased.
pub fn format_location(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('-').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last && i > 0 && segment.len() <= 3 {
                segment.to_uppercase()
            } else {
                segment
                    .split('_')
                    .filter(|w| !w.is_empty())
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format an upstream `dd-mm-yyyy` concert date as `"Jan 28, 2020"`.
///
/// The upstream marks some dates with a leading `*`; it is dropped. Strings
/// that are not valid dates come back trimmed but otherwise untouched.
pub fn format_concert_date(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('*');
    match NaiveDate::parse_from_str(trimmed, "%d-%m-%Y") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Split a member list into the names shown on a card and the hidden count.
pub fn member_preview(members: &[String], limit: usize) -> (&[String], usize) {
    let shown = members.len().min(limit);
    (&members[..shown], members.len() - shown)
}
