/// Canonical ledger fields a header can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Field {
    Value,
    Date,
    Kind,
    Category,
    Subcategory,
}

const SUBCATEGORY_MARKERS: [&str; 5] = [
    "sub-categoria",
    "subcategoria",
    "sub categoria",
    "conversão",
    "conversao",
];

fn is_value(h: &str) -> bool {
    ["valor", "total", "r$"].iter().any(|t| h.contains(t))
}

fn is_date(h: &str) -> bool {
    h.contains("data")
}

fn is_kind(h: &str) -> bool {
    h.contains("tipo")
}

fn is_category(h: &str) -> bool {
    h.contains("categoria") && !is_subcategory(h)
}

fn is_subcategory(h: &str) -> bool {
    SUBCATEGORY_MARKERS.iter().any(|m| h.contains(m))
}

/// Classification rules in priority order. Headers are lowercased before
/// being tested and the first matching rule wins.
static RULES: [(fn(&str) -> bool, Field); 5] = [
    (is_value, Field::Value),
    (is_date, Field::Date),
    (is_kind, Field::Kind),
    (is_category, Field::Category),
    (is_subcategory, Field::Subcategory),
];

impl Field {
    /// Classifies a single header, or returns `None` if it is not a column
    /// of interest.
    pub fn classify(header: &str) -> Option<Self> {
        let h = header.trim().trim_matches('"').trim().to_lowercase();
        RULES
            .iter()
            .find(|(matches, _)| matches(&h))
            .map(|&(_, field)| field)
    }
}

/// Column index of each canonical field found in a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(std::collections::HashMap<Field, usize>);

impl Columns {
    /// Resolves a header row. When several headers map onto the same field,
    /// the leftmost one is used.
    pub fn resolve<T>(headers: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut m = std::collections::HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            let Some(field) = Field::classify(header.as_ref()) else {
                continue;
            };
            if let Some(&first) = m.get(&field) {
                log::debug!(
                    "column {} ('{}') also maps to {}, keeping column {}",
                    i + 1,
                    header.as_ref(),
                    field,
                    first + 1
                );
                continue;
            }
            m.insert(field, i);
        }
        Self(m)
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        self.0.get(&field).copied()
    }

    /// Returns the cell of `row` holding `field`, or an empty string if the
    /// field was not resolved or the row is too short.
    pub fn cell<'a, T>(&self, row: &'a [T], field: Field) -> &'a str
    where
        T: AsRef<str>,
    {
        self.get(field)
            .and_then(|i| row.get(i))
            .map(|s| s.as_ref())
            .unwrap_or_default()
    }
}
