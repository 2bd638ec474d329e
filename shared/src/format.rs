//! Polish (`pl-PL`) presentation helpers: amounts, dates and string collation.

use std::cmp::Ordering;

use crate::raw::parse_date_time;

const GROUP_SEPARATOR: char = '\u{a0}';

/// Two decimals, decimal comma, digit groups separated by a no-break space.
///
/// Grouping only kicks in from five integer digits (`1234,50` but
/// `12 345,50`), matching the `pl-PL` minimum grouping rule.
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if integer.len() >= 5 {
        let mut out = String::with_capacity(integer.len() + integer.len() / 3);
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(digit);
        }
        out
    } else {
        integer.to_string()
    };

    let is_zero = integer.chars().all(|c| c == '0') && fraction.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{},{}", sign, grouped, fraction)
}

/// Amount followed by the currency, e.g. `12,50 zł`.
pub fn format_currency(value: f64) -> String {
    format!("{} zł", format_amount(value))
}

/// `DD.MM.YYYY`, or `-` when the input is not a date.
pub fn format_date(text: &str) -> String {
    match parse_date_time(text) {
        Some(date_time) => date_time.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Primary collation weight of a lowercased character.
///
/// Polish letters with diacritics sort right after their base letter, as
/// separate letters of the alphabet. Other Latin diacritics fold into their
/// base letter.
fn primary_weight(c: char) -> u64 {
    let (base, offset) = match c {
        'ą' => ('a', 1),
        'ć' => ('c', 1),
        'ę' => ('e', 1),
        'ł' => ('l', 1),
        'ń' => ('n', 1),
        'ó' => ('o', 1),
        'ś' => ('s', 1),
        'ź' => ('z', 1),
        'ż' => ('z', 2),
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => ('a', 0),
        'ç' | 'č' => ('c', 0),
        'ď' => ('d', 0),
        'è' | 'é' | 'ê' | 'ë' | 'ě' | 'ē' => ('e', 0),
        'ì' | 'í' | 'î' | 'ï' | 'ī' => ('i', 0),
        'ñ' | 'ň' => ('n', 0),
        'ò' | 'ô' | 'õ' | 'ö' | 'ø' | 'ő' | 'ō' => ('o', 0),
        'ř' => ('r', 0),
        'š' | 'ş' => ('s', 0),
        'ť' => ('t', 0),
        'ù' | 'ú' | 'û' | 'ü' | 'ů' | 'ű' | 'ū' => ('u', 0),
        'ý' | 'ÿ' => ('y', 0),
        'ž' => ('z', 0),
        other => (other, 0),
    };
    (base as u64) * 4 + offset
}

/// Locale-aware, case-insensitive comparison.
pub fn collate(left: &str, right: &str) -> Ordering {
    let left = left.chars().flat_map(char::to_lowercase).map(primary_weight);
    let right = right.chars().flat_map(char::to_lowercase).map(primary_weight);
    left.cmp(right)
}
