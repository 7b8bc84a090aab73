//! Russian date labels for section headings

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// Genitive-case Russian month names, indexed by month number 1..=12
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Russian month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => "",
    }
}

/// `"10 марта 2024 г."`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {} г.",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// `"10 марта 2024 г., 09-00"` (session-report heading form)
pub fn format_date_with_time(dt: DateTime<Utc>) -> String {
    format!(
        "{:02} {} {} г., {:02}-{:02}",
        dt.day(),
        month_name(dt.month()),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// `"10 марта, 09:00"` (publications heading form)
pub fn format_day_month_with_time(dt: DateTime<Utc>) -> String {
    format!(
        "{:02} {}, {:02}:{:02}",
        dt.day(),
        month_name(dt.month()),
        dt.hour(),
        dt.minute()
    )
}
