//! Header formatting
//!
//! Renders the text placed in front of every message: the literal prefix,
//! then the date and time, then the caller's file and line, each present only
//! when its flag is set. Output is appended to a caller-owned buffer so the
//! logger can reuse one allocation across calls.

use super::{call_site::CallSite, flags::Flags};
use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Utc};

/// Append `value` as decimal ASCII, left-padded with zeros to `width` digits.
///
/// A width of 0 renders the minimal number of digits. Widths beyond 20
/// (the longest `u64`) are clamped.
pub fn push_decimal(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    // Assemble in reverse order.
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut remaining = width.min(digits.len());
    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        remaining = remaining.saturating_sub(1);
        if value == 0 && remaining == 0 {
            break;
        }
    }
    buf.extend_from_slice(&digits[pos..]);
}

/// Final element of a source path
#[must_use]
pub fn short_file_name(path: &str) -> &str {
    path.rsplit(std::path::is_separator).next().unwrap_or(path)
}

/// Wall-clock reading of `instant` in the zone selected by `flags`
fn wall_clock(instant: DateTime<Utc>, flags: Flags) -> NaiveDateTime {
    if flags.contains(Flags::UTC) {
        instant.naive_utc()
    } else {
        instant.with_timezone(&Local).naive_local()
    }
}

/// Append the header for one log line to `buf`.
///
/// Components, in fixed order:
/// 1. `prefix`, verbatim
/// 2. `YYYY/MM/DD ` when [`Flags::DATE`] is set
/// 3. `HH:MM:SS ` (or `HH:MM:SS.uuuuuu ` with [`Flags::MICROSECONDS`])
/// 4. `file:line: ` when a file flag is set; [`Flags::SHORT_FILE`] wins over
///    [`Flags::LONG_FILE`]
pub fn format_header(
    buf: &mut Vec<u8>,
    prefix: &str,
    flags: Flags,
    instant: DateTime<Utc>,
    site: CallSite,
) {
    buf.extend_from_slice(prefix.as_bytes());

    if flags.wants_timestamp() {
        let t = wall_clock(instant, flags);

        if flags.contains(Flags::DATE) {
            push_decimal(buf, u64::from(t.year().unsigned_abs()), 4);
            buf.push(b'/');
            push_decimal(buf, u64::from(t.month()), 2);
            buf.push(b'/');
            push_decimal(buf, u64::from(t.day()), 2);
            buf.push(b' ');
        }

        if flags.wants_time() {
            push_decimal(buf, u64::from(t.hour()), 2);
            buf.push(b':');
            push_decimal(buf, u64::from(t.minute()), 2);
            buf.push(b':');
            push_decimal(buf, u64::from(t.second()), 2);
            if flags.contains(Flags::MICROSECONDS) {
                buf.push(b'.');
                // Leap seconds report nanoseconds >= 1e9.
                let micros = (t.nanosecond() % 1_000_000_000) / 1_000;
                push_decimal(buf, u64::from(micros), 6);
            }
            buf.push(b' ');
        }
    }

    if flags.wants_location() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file_name(site.file)
        } else {
            site.file
        };
        buf.extend_from_slice(file.as_bytes());
        buf.push(b':');
        push_decimal(buf, u64::from(site.line), 0);
        buf.extend_from_slice(b": ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_instant() -> DateTime<Utc> {
        // 2009-01-23 01:23:23.123123 UTC
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123_123)
    }

    fn render(prefix: &str, flags: Flags, instant: DateTime<Utc>, site: CallSite) -> String {
        let mut buf = Vec::new();
        format_header(&mut buf, prefix, flags, instant, site);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_push_decimal_padding() {
        let mut buf = Vec::new();
        push_decimal(&mut buf, 7, 2);
        buf.push(b'|');
        push_decimal(&mut buf, 2009, 4);
        buf.push(b'|');
        push_decimal(&mut buf, 42, 6);
        buf.push(b'|');
        push_decimal(&mut buf, 0, 0);
        buf.push(b'|');
        push_decimal(&mut buf, 12345, 0);
        buf.push(b'|');
        push_decimal(&mut buf, 12345, 2);
        assert_eq!(buf, b"07|2009|000042|0|12345|12345");
    }

    #[test]
    fn test_push_decimal_extremes() {
        let mut buf = Vec::new();
        push_decimal(&mut buf, u64::MAX, 0);
        assert_eq!(buf, u64::MAX.to_string().as_bytes());

        let mut buf = Vec::new();
        push_decimal(&mut buf, 1, 64);
        assert_eq!(buf.len(), 20);
    }

    #[test]
    fn test_prefix_only() {
        let out = render("[P] ", Flags::empty(), utc_instant(), CallSite::UNKNOWN);
        assert_eq!(out, "[P] ");

        let out = render("", Flags::empty(), utc_instant(), CallSite::UNKNOWN);
        assert_eq!(out, "");
    }

    #[test]
    fn test_utc_date_time() {
        let out = render("", Flags::STD | Flags::UTC, utc_instant(), CallSite::UNKNOWN);
        assert_eq!(out, "2009/01/23 01:23:23 ");
    }

    #[test]
    fn test_local_date_time() {
        let local = Local
            .with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .earliest()
            .expect("valid local datetime");
        let out = render("", Flags::STD, local.with_timezone(&Utc), CallSite::UNKNOWN);
        assert_eq!(out, "2009/01/23 01:23:23 ");
    }

    #[test]
    fn test_microseconds() {
        let out = render(
            "",
            Flags::MICROSECONDS | Flags::UTC,
            utc_instant(),
            CallSite::UNKNOWN,
        );
        assert_eq!(out, "01:23:23.123123 ");
    }

    #[test]
    fn test_date_only() {
        let out = render("", Flags::DATE | Flags::UTC, utc_instant(), CallSite::UNKNOWN);
        assert_eq!(out, "2009/01/23 ");
    }

    #[test]
    fn test_long_file() {
        let site = CallSite::new("/a/b/c/d.rs", 23);
        let out = render(
            "",
            Flags::STD | Flags::MICROSECONDS | Flags::LONG_FILE | Flags::UTC,
            utc_instant(),
            site,
        );
        assert_eq!(out, "2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: ");
    }

    #[test]
    fn test_short_file_overrides_long() {
        let site = CallSite::new("/a/b/c/d.rs", 23);
        let out = render(
            "[X] ",
            Flags::LONG_FILE | Flags::SHORT_FILE,
            utc_instant(),
            site,
        );
        assert_eq!(out, "[X] d.rs:23: ");
    }

    #[test]
    fn test_unknown_site() {
        let out = render("", Flags::SHORT_FILE, utc_instant(), CallSite::UNKNOWN);
        assert_eq!(out, "???:0: ");
    }

    #[test]
    fn test_appends_without_clearing() {
        let mut buf = b"existing".to_vec();
        format_header(&mut buf, "-", Flags::empty(), utc_instant(), CallSite::UNKNOWN);
        assert_eq!(buf, b"existing-");
    }

    #[test]
    fn test_short_file_name() {
        assert_eq!(short_file_name("src/core/logger.rs"), "logger.rs");
        assert_eq!(short_file_name("logger.rs"), "logger.rs");
    }
}
