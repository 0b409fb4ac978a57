//! Locale-aware date formatting.

use crate::utils::date::DateTimeUtc;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateStyle {
    English,
    Cjk,
    Korean,
    Iso,
}

impl DateStyle {
    fn of(date_locale: &str) -> Self {
        let lang = date_locale.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "en" => Self::English,
            "zh" | "ja" => Self::Cjk,
            "ko" => Self::Korean,
            _ => Self::Iso,
        }
    }
}

/// Long form: `January 15, 2024`, `2024年1月15日`, `2024년 1월 15일`.
pub fn format_date(date: DateTimeUtc, date_locale: &str) -> String {
    let DateTimeUtc { year, month, day, .. } = date;
    match DateStyle::of(date_locale) {
        DateStyle::English => {
            let name = MONTHS[usize::from(month.clamp(1, 12)) - 1];
            format!("{name} {day}, {year}")
        }
        DateStyle::Cjk => format!("{year}年{month}月{day}日"),
        DateStyle::Korean => format!("{year}년 {month}월 {day}일"),
        DateStyle::Iso => date.to_iso_date(),
    }
}

/// Numeric form: `1/15/2024`, `2024/1/15`, `2024. 1. 15.`.
pub fn format_date_short(date: DateTimeUtc, date_locale: &str) -> String {
    let DateTimeUtc { year, month, day, .. } = date;
    match DateStyle::of(date_locale) {
        DateStyle::English => format!("{month}/{day}/{year}"),
        DateStyle::Cjk => format!("{year}/{month}/{day}"),
        DateStyle::Korean => format!("{year}. {month}. {day}."),
        DateStyle::Iso => date.to_iso_date(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: DateTimeUtc = DateTimeUtc::from_ymd(2024, 1, 15);

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(DATE, "en"), "January 15, 2024");
        assert_eq!(format_date(DATE, "en-US"), "January 15, 2024");
        assert_eq!(format_date(DATE, "zh-CN"), "2024年1月15日");
        assert_eq!(format_date(DATE, "ja"), "2024年1月15日");
        assert_eq!(format_date(DATE, "ko-KR"), "2024년 1월 15일");
        assert_eq!(format_date(DATE, "de"), "2024-01-15");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short(DATE, "en"), "1/15/2024");
        assert_eq!(format_date_short(DATE, "zh_CN"), "2024/1/15");
        assert_eq!(format_date_short(DATE, "fr"), "2024-01-15");
    }
}
