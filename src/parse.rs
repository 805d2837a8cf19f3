//! Decoding of raw day-code tokens and meeting-time strings.

use log::warn;
use std::collections::BTreeSet;

use crate::{Day, Minutes};

/// Decode a day-code token (e.g. "MWF", "TTH") into the weekdays it names.
///
/// A "T" immediately followed by "H" reads as Thursday; any other "T" reads
/// as Tuesday. The literal "TBA" names no days. Letters with no day meaning
/// are ambiguous: they are logged and contribute nothing.
pub(crate) fn decode_days(token: &str) -> BTreeSet<Day> {
    let mut days = BTreeSet::new();
    if token == "TBA" {
        return days;
    }

    let mut letters = token.chars().peekable();
    while let Some(letter) = letters.next() {
        match letter {
            'M' => {
                days.insert(Day::Monday);
            }
            'W' => {
                days.insert(Day::Wednesday);
            }
            'F' => {
                days.insert(Day::Friday);
            }
            'T' if letters.peek() == Some(&'H') => {
                letters.next();
                days.insert(Day::Thursday);
            }
            'T' => {
                days.insert(Day::Tuesday);
            }
            other => warn!("ambiguous letter {:?} in day code {:?}", other, token),
        }
    }

    days
}

/// Parse a meeting-time string such as "8:00a-9:15a" into an inclusive
/// clock window.
///
/// Strings without a hyphen (notably "TBA") carry no window. A string with
/// a hyphen but an unparseable half is logged and also yields no window, so
/// the caller skips pruning for that entry only.
pub(crate) fn decode_window(raw: &str) -> Option<(Minutes, Minutes)> {
    let (start, end) = raw.split_once('-')?;
    match (decode_clock(start.trim()), decode_clock(end.trim())) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => {
            warn!("malformed meeting time {:?}", raw);
            None
        }
    }
}

/// Parse a 12-hour clock value with an "a"/"p" (or "am"/"pm") suffix.
fn decode_clock(raw: &str) -> Option<Minutes> {
    let lower = raw.to_ascii_lowercase();
    let (clock, pm) = if let Some(rest) = lower.strip_suffix("am").or_else(|| lower.strip_suffix('a')) {
        (rest, false)
    } else if let Some(rest) = lower.strip_suffix("pm").or_else(|| lower.strip_suffix('p')) {
        (rest, true)
    } else {
        return None;
    };

    let (hour, minute) = clock.trim().split_once(':')?;
    let hour: Minutes = hour.parse().ok()?;
    let minute: Minutes = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    };

    Some(hour * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(token: &str) -> Vec<Day> {
        decode_days(token).into_iter().collect()
    }

    #[test]
    fn day_codes() {
        assert_eq!(days("MWF"), [Day::Monday, Day::Wednesday, Day::Friday]);
        assert_eq!(days("TTH"), [Day::Tuesday, Day::Thursday]);
        assert_eq!(days("TH"), [Day::Thursday]);
        assert_eq!(
            days("MTWTHF"),
            [
                Day::Monday,
                Day::Tuesday,
                Day::Wednesday,
                Day::Thursday,
                Day::Friday
            ]
        );
    }

    #[test]
    fn day_codes_unmapped_letters() {
        // "R" carries no day meaning here; only the "T" contributes.
        assert_eq!(days("TR"), [Day::Tuesday]);
        assert!(days("S").is_empty());
    }

    #[test]
    fn day_codes_tba() {
        assert!(days("TBA").is_empty());
    }

    #[test]
    fn meeting_windows() {
        assert_eq!(decode_window("8:00a-9:15a"), Some((480, 555)));
        assert_eq!(decode_window("11:00a-1:15p"), Some((660, 795)));
        assert_eq!(decode_window("12:00p-12:30p"), Some((720, 750)));
        assert_eq!(decode_window("12:00a-1:00a"), Some((0, 60)));
        assert_eq!(decode_window("8:00AM-9:15AM"), Some((480, 555)));
    }

    #[test]
    fn meeting_windows_malformed() {
        assert_eq!(decode_window("TBA"), None);
        assert_eq!(decode_window("8:00-9:15"), None);
        assert_eq!(decode_window("noon-1:00p"), None);
        assert_eq!(decode_window("25:00a-9:00a"), None);
        assert_eq!(decode_window("8:99a-9:00a"), None);
    }
}
