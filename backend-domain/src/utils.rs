use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// One clock read; ingestion derives both `date` and `timestamp` from the
/// same instant so they can never disagree.
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// "Today" as seen by queries. Read independently from ingestion time, so an
/// event recorded just before midnight may no longer match by query time.
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn date_formats_as_year_month_day() {
        assert_eq!(format_date(date!(2026 - 08 - 04)), "2026-08-04");
        assert_eq!(format_date(date!(2026 - 01 - 09)), "2026-01-09");
    }

    #[test]
    fn timestamp_formats_as_rfc3339() {
        let formatted = format_timestamp(datetime!(2026-08-04 18:30:15 UTC));
        assert_eq!(formatted, "2026-08-04T18:30:15Z");
    }
}
