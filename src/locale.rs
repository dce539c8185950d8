//! Thai long-form dates shown on the face of the certificate.

use chrono::{Datelike, Local, NaiveDate};

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Format a date the way the certificate displays it: two-digit day, Thai
/// month name, Buddhist-era year.
pub fn thai_long_date(date: NaiveDate) -> String {
    let month = THAI_MONTHS[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year() + 543)
}

/// Today's date in the certificate's display form.
pub fn today_long_date() -> String {
    thai_long_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_buddhist_era_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(thai_long_date(date), "06 สิงหาคม 2569");
    }

    #[test]
    fn day_is_zero_padded_and_months_map() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(thai_long_date(jan), "01 มกราคม 2568");
        let dec = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(thai_long_date(dec), "31 ธันวาคม 2568");
    }
}
