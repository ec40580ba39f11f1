//! Date fragments used in exchange-native tickers and timestamps.
//!
//! Weekly option tickers compress the expiry into `YY` + one month character
//! + `DD` (`22N17` is 17 Nov 2022); monthly contracts use `YY` + a 3-letter
//! month (`22NOV`).

/// (3-letter month, 1-char month, month number)
const MONTHS: [(&str, char, u32); 12] = [
    ("JAN", '1', 1),
    ("FEB", '2', 2),
    ("MAR", '3', 3),
    ("APR", '4', 4),
    ("MAY", '5', 5),
    ("JUN", '6', 6),
    ("JUL", '7', 7),
    ("AUG", '8', 8),
    ("SEP", '9', 9),
    ("OCT", 'O', 10),
    ("NOV", 'N', 11),
    ("DEC", 'D', 12),
];

/// Expand a 2-digit year. Values above 50 are 19xx, the rest 20xx.
pub fn year_to_full(yy: u32) -> u32 {
    if yy > 50 {
        1900 + yy
    } else {
        2000 + yy
    }
}

/// Two-digit form of a year.
pub fn year_to_short(year: u32) -> u32 {
    year % 100
}

/// `"NOV"` → `'N'`. Case-insensitive.
pub fn month_to_char(month: &str) -> Option<char> {
    let month = month.to_ascii_uppercase();
    MONTHS.iter().find(|(m, _, _)| *m == month).map(|(_, c, _)| *c)
}

/// `'N'` → `"NOV"`.
pub fn char_to_month(code: char) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    MONTHS.iter().find(|(_, c, _)| *c == code).map(|(m, _, _)| *m)
}

/// `"NOV"` → `11`. Case-insensitive.
pub fn month_number(month: &str) -> Option<u32> {
    let month = month.to_ascii_uppercase();
    MONTHS.iter().find(|(m, _, _)| *m == month).map(|(_, _, n)| *n)
}

/// `'N'` → `11`.
pub fn month_number_from_char(code: char) -> Option<u32> {
    let code = code.to_ascii_uppercase();
    MONTHS.iter().find(|(_, c, _)| *c == code).map(|(_, _, n)| *n)
}

/// `11` → `"NOV"`.
pub fn month_from_number(number: u32) -> Option<&'static str> {
    MONTHS.iter().find(|(_, _, n)| *n == number).map(|(m, _, _)| *m)
}

/// `5` → `"05"`.
pub fn day_padded(day: u32) -> String {
    format!("{:02}", day)
}

/// `"05"` or `"5"` → `5`. Out-of-range days yield `None`.
pub fn day_unpadded(day: &str) -> Option<u32> {
    day.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}
