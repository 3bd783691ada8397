//! Time-bucketed rollups of a ledger.
//!
//! Every function here is pure: the result depends only on the transactions
//! passed in, and an empty ledger yields empty labels and empty series.

use crate::base;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SeriesKind {
    #[strum(to_string = "Entradas")]
    Income,
    #[strum(to_string = "Saídas")]
    Expense,
    #[strum(to_string = "Saldo")]
    Balance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub kind: SeriesKind,
    pub values: Vec<base::Cents>,
}

/// Labels with one or more series aligned index for index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn from_totals(
        rows: impl Iterator<Item = (String, base::Totals)>,
        kinds: &[SeriesKind],
    ) -> Self {
        let mut result = Self {
            labels: Vec::new(),
            series: kinds
                .iter()
                .map(|&kind| Series {
                    kind,
                    values: Vec::new(),
                })
                .collect(),
        };
        for (label, totals) in rows {
            result.labels.push(label);
            for s in result.series.iter_mut() {
                s.values.push(match s.kind {
                    SeriesKind::Income => totals.income,
                    SeriesKind::Expense => totals.expense,
                    SeriesKind::Balance => totals.balance(),
                });
            }
        }
        result
    }
}

fn bucket_label(dt: base::Date, unit: base::Datepart) -> String {
    match unit {
        base::Datepart::Day => dt.to_string(),
        base::Datepart::Month => base::locale::month_label(dt.year(), dt.month()),
        base::Datepart::Year => dt.year().to_string(),
    }
}

/// Cumulative balance at the end of each `unit`-wide bucket that holds at
/// least one transaction, in chronological order.
pub fn running_balance(ledger: &base::Ledger, unit: base::Datepart) -> AggregateResult {
    let agg = ledger
        .iter()
        .map(|t| (t.date().first_of(unit), t.signed_value()))
        .collect::<base::Aggregate<_, _>>();
    let (labels, values): (Vec<_>, Vec<_>) = agg
        .iter_cumulative()
        .map(|(&dt, balance)| (bucket_label(dt, unit), balance))
        .unzip();
    AggregateResult {
        labels,
        series: vec![Series {
            kind: SeriesKind::Balance,
            values,
        }],
    }
}

/// Income and expense by week of the month, weeks ascending.
pub fn weekly_totals(ledger: &base::Ledger) -> AggregateResult {
    let agg = ledger
        .iter()
        .map(|t| (t.date().week_of_month(), base::Totals::from(t)))
        .collect::<base::Aggregate<_, _>>();
    AggregateResult::from_totals(
        agg.iter().map(|(w, totals)| (format!("Semana {}", w), totals)),
        &[SeriesKind::Income, SeriesKind::Expense],
    )
}

/// Income and expense by year, years ascending.
pub fn yearly_totals(ledger: &base::Ledger) -> AggregateResult {
    let agg = ledger
        .iter()
        .map(|t| (t.date().year(), base::Totals::from(t)))
        .collect::<base::Aggregate<_, _>>();
    AggregateResult::from_totals(
        agg.iter().map(|(y, totals)| (y.to_string(), totals)),
        &[SeriesKind::Income, SeriesKind::Expense],
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRow {
    pub year: i32,
    pub month: time::Month,
    pub totals: base::Totals,
}

impl MonthlyRow {
    pub fn label(&self) -> String {
        base::locale::month_label(self.year, self.month)
    }
}

/// Monthly totals in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyTotals {
    pub fn to_aggregate(&self) -> AggregateResult {
        AggregateResult::from_totals(
            self.rows.iter().map(|r| (r.label(), r.totals)),
            &[SeriesKind::Income, SeriesKind::Expense, SeriesKind::Balance],
        )
    }
}

pub fn monthly_totals(ledger: &base::Ledger) -> MonthlyTotals {
    let agg = ledger
        .iter()
        .map(|t| (t.date().first_of(base::Datepart::Month), base::Totals::from(t)))
        .collect::<base::Aggregate<_, _>>();
    MonthlyTotals {
        rows: agg
            .iter()
            .map(|(dt, totals)| MonthlyRow {
                year: dt.year(),
                month: dt.month(),
                totals,
            })
            .collect(),
    }
}
