use crate::base;

/// Conjunction of optional filter predicates. An unset dimension, or an empty
/// category/subcategory string, places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub year: Option<i32>,
    pub month: Option<time::Month>,
    /// Week of the month, `1..=5`.
    pub week: Option<u8>,
    pub kind: Option<base::Kind>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.week.is_none()
            && self.kind.is_none()
            && non_empty(&self.category).is_none()
            && non_empty(&self.subcategory).is_none()
    }

    pub fn matches(&self, t: &base::Transaction) -> bool {
        let date = t.date();
        self.year.is_none_or(|y| date.year() == y)
            && self.month.is_none_or(|m| date.month() == m)
            && self.week.is_none_or(|w| date.week_of_month() == w)
            && self.kind.is_none_or(|k| t.kind() == Some(k))
            && non_empty(&self.category).is_none_or(|c| t.category() == c)
            && non_empty(&self.subcategory).is_none_or(|s| t.subcategory() == s)
    }

    /// Returns the transactions of `ledger` matching every set dimension, in
    /// their original order.
    pub fn apply(&self, ledger: &base::Ledger) -> base::Ledger {
        ledger.iter().filter(|t| self.matches(t)).collect()
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
