use crate::base;

const GAP: &str = "  ";

pub struct Monthlytable<'a> {
    charset: &'a base::Charset,
    rows: Vec<(String, base::Totals)>,
    /// Width of the month column followed by the three money columns.
    widths: [usize; 4],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub totals: base::MonthlyTotals,
}

fn header() -> [String; 4] {
    [
        "Mês".to_string(),
        base::SeriesKind::Income.to_string(),
        base::SeriesKind::Expense.to_string(),
        base::SeriesKind::Balance.to_string(),
    ]
}

impl Config {
    pub fn to_monthlytable(&'_ self) -> Monthlytable<'_> {
        let rows = self
            .totals
            .rows
            .iter()
            .map(|r| (r.label(), r.totals))
            .collect::<Vec<_>>();
        let mut widths = header().map(|h| base::util::charlen(&h));
        for (label, totals) in rows.iter() {
            widths[0] = widths[0].max(base::util::charlen(label));
            widths[1] = widths[1].max(totals.income.charlen());
            widths[2] = widths[2].max(totals.expense.charlen());
            widths[3] = widths[3].max(totals.balance().charlen());
        }
        Monthlytable {
            charset: &self.charset,
            rows,
            widths,
        }
    }
}

impl Monthlytable<'_> {
    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        (label, totals): &(String, base::Totals),
    ) -> std::fmt::Result {
        write!(w, "{:<width$}", label, width = self.widths[0])?;
        w.write_str(GAP)?;
        base::util::write_right(w, &totals.income.to_string(), self.widths[1])?;
        w.write_str(GAP)?;
        base::util::write_right(w, &totals.expense.to_string(), self.widths[2])?;
        w.write_str(GAP)?;

        let balance = totals.balance();
        let s = balance.to_string();
        for _ in base::util::charlen(&s)..self.widths[3] {
            w.write_char(' ')?;
        }
        if balance < base::Cents(0) {
            w.write_str(&self.charset.negative(&s))?;
        } else {
            w.write_str(&self.charset.positive(&s))?;
        }
        w.write_char('\n')
    }
}

impl std::fmt::Display for Monthlytable<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No transactions.");
        }
        let [month, income, expense, balance] = header();
        write!(f, "{:<width$}", month, width = self.widths[0])?;
        for (h, &width) in [income, expense, balance].iter().zip(&self.widths[1..]) {
            f.write_str(GAP)?;
            base::util::write_right(f, h, width)?;
        }
        f.write_str("\n")?;
        self.rows.iter().try_for_each(|row| self.draw(f, row))
    }
}
