use crate::base;
use crate::base::columns::Field;

/// Transactions in source document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(Vec<base::Transaction>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty or malformed source")]
    Malformed,
    #[error("no valid data")]
    NoValidRows,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.0.iter()
    }

    /// Income and expense over the whole ledger.
    pub fn totals(&self) -> base::Totals {
        self.iter().collect()
    }

    /// Builds a ledger from a delimited text document whose first non-empty
    /// line is a header row. If `delimiter` is `None`, it is detected from
    /// the header.
    ///
    /// Rows without a valid date are dropped. Every row is parsed on its own,
    /// so a broken row never affects its neighbours.
    pub fn parse(text: &str, delimiter: Option<char>) -> Result<Self, ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty());
        let (_, header) = lines.next().ok_or(ParseError::Malformed)?;
        let mut rows = lines.peekable();
        if rows.peek().is_none() {
            return Err(ParseError::Malformed);
        }

        let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(header));
        let columns = base::Columns::resolve(&split_fields(header, delimiter));
        if columns.get(Field::Date).is_none() {
            log::warn!("no date column in header '{}'", header);
        }

        let mut dropped = 0;
        let inner = rows
            .filter_map(|(i, line)| {
                let Some(t) = build(&columns, &split_fields(line, delimiter), i + 1) else {
                    log::debug!("line {}: no valid date, row dropped", i + 1);
                    dropped += 1;
                    return None;
                };
                if t.kind().is_none() {
                    log::debug!("line {}: no transaction type, counted in balance only", t.line());
                }
                Some(t)
            })
            .collect::<Vec<_>>();
        log::info!(
            "parsed {} transactions, dropped {} rows",
            inner.len(),
            dropped
        );
        if inner.is_empty() {
            return Err(ParseError::NoValidRows);
        }
        Ok(Self(inner))
    }

    /// Distinct values of every filter dimension, sorted ascending.
    pub fn choices(&self) -> Choices {
        fn distinct<T: Ord>(iter: impl Iterator<Item = T>) -> Vec<T> {
            iter.collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .collect()
        }

        Choices {
            years: distinct(self.iter().map(|t| t.date().year())),
            months: distinct(self.iter().map(|t| (t.date().year(), t.date().month() as u8)))
                .into_iter()
                .filter_map(|(y, m)| Some((y, time::Month::try_from(m).ok()?)))
                .collect(),
            kinds: distinct(self.iter().filter_map(base::Transaction::kind)),
            categories: distinct(
                self.iter()
                    .map(base::Transaction::category)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            ),
            subcategories: distinct(
                self.iter()
                    .map(base::Transaction::subcategory)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            ),
        }
    }
}

/// Values available for each filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    pub years: Vec<i32>,
    pub months: Vec<(i32, time::Month)>,
    pub kinds: Vec<base::Kind>,
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
}

fn detect_delimiter(header: &str) -> char {
    if header.contains(';') && !header.contains(',') {
        ';'
    } else {
        ','
    }
}

/// Splits one line into trimmed, unquoted fields. Quoted fields may contain
/// the delimiter.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let clean = |s: &str| s.trim().trim_matches('"').trim().to_string();
    let Ok(delim) = u8::try_from(delimiter) else {
        return line.split(delimiter).map(clean).collect();
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delim)
        .from_reader(line.as_bytes());
    match rdr.records().next() {
        Some(Ok(record)) => record.iter().map(clean).collect(),
        _ => line.split(delimiter).map(clean).collect(),
    }
}

fn build(columns: &base::Columns, row: &[String], line: usize) -> Option<base::Transaction> {
    let date = base::locale::parse_local_date(columns.cell(row, Field::Date))?;
    Some(base::Transaction::new(
        date,
        base::locale::parse_currency(columns.cell(row, Field::Value)),
        base::Kind::recognize(columns.cell(row, Field::Kind)),
        columns.cell(row, Field::Category).to_string(),
        columns.cell(row, Field::Subcategory).to_string(),
        line,
    ))
}

impl IntoIterator for Ledger {
    type Item = base::Transaction;
    type IntoIter = std::vec::IntoIter<base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = &'a base::Transaction>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::str::FromStr for Ledger {
    type Err = ParseError;

    /// Parses with a detected delimiter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl TryFrom<&str> for Ledger {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
