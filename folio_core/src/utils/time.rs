//! Time formatting shared by the relay payloads.

use chrono::{DateTime, Local, TimeZone};

/// Formats a timestamp the way visitor alerts display it.
///
/// # Examples
///
/// - "2026-10-18 14:03:07"
pub fn display_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// The current local time in display form.
pub fn now_display() -> String {
    display_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_display_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 14, 3, 7).unwrap();
        assert_eq!(display_timestamp(&ts), "2026-10-18 14:03:07");
    }

    #[test]
    fn test_now_display_shape() {
        let now = now_display();
        assert_eq!(now.len(), 19);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], " ");
    }
}
