use std::rc::Rc;

use crate::base;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch source data")]
    Fetch(#[from] base::FetchError),
    #[error(transparent)]
    Parse(#[from] base::ParseError),
}

/// The four reports computed from one snapshot and one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reports {
    pub balance: base::AggregateResult,
    pub weekly: base::AggregateResult,
    pub monthly: base::MonthlyTotals,
    pub yearly: base::AggregateResult,
}

/// Holds the current ledger snapshot and filter selection.
///
/// A snapshot is immutable once loaded. [`Dashboard::load`] swaps in a new
/// one only after the whole fetch and parse succeeded, so every query reads a
/// single consistent ledger.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    ledger: Rc<base::Ledger>,
    selection: base::Selection,
    balance_unit: base::Datepart,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bucket width of the running balance.
    pub fn with_balance_unit(self, unit: base::Datepart) -> Self {
        Self {
            balance_unit: unit,
            ..self
        }
    }

    /// Sets the selection without computing any report.
    pub fn with_selection(self, selection: base::Selection) -> Self {
        Self { selection, ..self }
    }

    /// Replaces the snapshot with freshly fetched data and returns the
    /// number of transactions loaded. The previous snapshot is kept on error.
    pub fn load(
        &mut self,
        source: &impl base::Fetch,
        delimiter: Option<char>,
    ) -> Result<usize, LoadError> {
        let text = source.fetch()?;
        let ledger = base::Ledger::parse(&text, delimiter)?;
        source.accept(&text);
        let n = ledger.len();
        log::info!("loaded {} transactions", n);
        self.ledger = Rc::new(ledger);
        Ok(n)
    }

    pub fn snapshot(&self) -> Rc<base::Ledger> {
        Rc::clone(&self.ledger)
    }

    /// Replaces the selection and recomputes every report against it.
    pub fn select(&mut self, selection: base::Selection) -> Reports {
        self.selection = selection;
        self.reports()
    }

    pub fn reports(&self) -> Reports {
        let filtered = self.filtered();
        Reports {
            balance: base::report::running_balance(&filtered, self.balance_unit),
            weekly: base::report::weekly_totals(&filtered),
            monthly: base::report::monthly_totals(&filtered),
            yearly: base::report::yearly_totals(&filtered),
        }
    }

    pub fn balance(&self) -> base::AggregateResult {
        base::report::running_balance(&self.filtered(), self.balance_unit)
    }

    pub fn weekly(&self) -> base::AggregateResult {
        base::report::weekly_totals(&self.filtered())
    }

    pub fn monthly(&self) -> base::MonthlyTotals {
        base::report::monthly_totals(&self.filtered())
    }

    pub fn yearly(&self) -> base::AggregateResult {
        base::report::yearly_totals(&self.filtered())
    }

    pub fn totals(&self) -> base::Totals {
        self.filtered().totals()
    }

    /// Filter values present in the whole snapshot, ignoring the selection.
    pub fn choices(&self) -> base::Choices {
        self.ledger.choices()
    }

    fn filtered(&self) -> base::Ledger {
        let ledger = self.snapshot();
        if self.selection.is_empty() {
            return (*ledger).clone();
        }
        self.selection.apply(&ledger)
    }
}
