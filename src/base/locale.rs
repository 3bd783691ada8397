//! pt-BR numeric and date grammars.

use crate::base;

const MONTHS: [(time::Month, &str, &str); 12] = [
    (time::Month::January, "jan", "janeiro"),
    (time::Month::February, "fev", "fevereiro"),
    (time::Month::March, "mar", "março"),
    (time::Month::April, "abr", "abril"),
    (time::Month::May, "mai", "maio"),
    (time::Month::June, "jun", "junho"),
    (time::Month::July, "jul", "julho"),
    (time::Month::August, "ago", "agosto"),
    (time::Month::September, "set", "setembro"),
    (time::Month::October, "out", "outubro"),
    (time::Month::November, "nov", "novembro"),
    (time::Month::December, "dez", "dezembro"),
];

/// Parses a pt-BR currency amount such as `R$ 1.234,56` into its magnitude.
///
/// Quotes, the currency symbol and whitespace are stripped, `.` is taken as
/// the thousands separator and `,` as the decimal separator. Anything that
/// still fails to parse yields zero, so a bad cell never takes its row down
/// with it.
pub fn parse_currency(raw: &str) -> base::Cents {
    let s = raw
        .to_lowercase()
        .replace("r$", "")
        .chars()
        .filter(|&c| c != '"' && c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect::<String>();
    s.parse::<base::Cents>()
        .map(base::Cents::abs)
        .unwrap_or_default()
}

/// Parses a `dd/mm/yyyy` date, returning `None` for anything that is not a
/// real calendar date.
pub fn parse_local_date(raw: &str) -> Option<base::Date> {
    raw.parse::<base::Date>().ok()
}

/// Short pt-BR month name, e.g. `jan`.
pub fn month_abbr(month: time::Month) -> &'static str {
    MONTHS[usize::from(u8::from(month)) - 1].1
}

/// Label of a calendar month, e.g. `jan/2024`.
pub fn month_label(year: i32, month: time::Month) -> String {
    format!("{}/{}", month_abbr(month), year)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a month, expected 1-12 or a month name")]
pub struct MonthParseError(String);

/// Parses a month from its number (`1`-`12`) or its pt-BR or English name,
/// full or abbreviated. Matching is case-insensitive.
pub fn parse_month(raw: &str) -> Result<time::Month, MonthParseError> {
    let s = raw.trim().to_lowercase();
    if let Ok(n) = s.parse::<u8>() {
        return time::Month::try_from(n).map_err(|_| MonthParseError(raw.to_string()));
    }
    MONTHS
        .iter()
        .find(|(month, abbr, name)| {
            let english = month.to_string().to_lowercase();
            s == *abbr || s == *name || s == english || (s.len() == 3 && english.starts_with(&s))
        })
        .map(|&(month, _, _)| month)
        .ok_or_else(|| MonthParseError(raw.to_string()))
}
