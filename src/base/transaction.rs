use crate::base;

/// Direction of a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Kind {
    #[strum(
        to_string = "Entrada",
        serialize = "receita",
        serialize = "crédito",
        serialize = "credito",
        serialize = "income"
    )]
    Income,
    #[strum(
        to_string = "Saída",
        serialize = "saida",
        serialize = "despesa",
        serialize = "débito",
        serialize = "debito",
        serialize = "expense"
    )]
    Expense,
}

impl Kind {
    /// Reads the free-text type column. Unrecognized text is `None` rather
    /// than a guess.
    pub fn recognize(raw: &str) -> Option<Self> {
        raw.trim().to_lowercase().parse().ok()
    }
}

/// A normalized ledger row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: base::Date,
    value: base::Cents,
    kind: Option<Kind>,
    category: String,
    subcategory: String,
    line: usize,
}

impl Transaction {
    /// `value` is stored as a magnitude, its sign is dropped.
    pub fn new(
        date: base::Date,
        value: base::Cents,
        kind: Option<Kind>,
        category: String,
        subcategory: String,
        line: usize,
    ) -> Self {
        Self {
            date,
            value: value.abs(),
            kind,
            category,
            subcategory,
            line,
        }
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn value(&self) -> base::Cents {
        self.value
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// 1-based line number in the source document.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Value with the sign implied by the kind. Untyped transactions count
    /// as zero.
    pub fn signed_value(&self) -> base::Cents {
        match self.kind {
            Some(Kind::Income) => self.value,
            Some(Kind::Expense) => -self.value,
            None => base::Cents(0),
        }
    }
}

/// Income and expense sums.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Add, derive_more::AddAssign,
)]
pub struct Totals {
    pub income: base::Cents,
    pub expense: base::Cents,
}

impl Totals {
    pub fn balance(self) -> base::Cents {
        self.income - self.expense
    }
}

impl From<&Transaction> for Totals {
    fn from(t: &Transaction) -> Self {
        match t.kind() {
            Some(Kind::Income) => Self {
                income: t.value(),
                ..Self::default()
            },
            Some(Kind::Expense) => Self {
                expense: t.value(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

impl<'a> FromIterator<&'a Transaction> for Totals {
    fn from_iter<T: IntoIterator<Item = &'a Transaction>>(iter: T) -> Self {
        iter.into_iter()
            .map(Totals::from)
            .fold(Totals::default(), |acc, t| acc + t)
    }
}
