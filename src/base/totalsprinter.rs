use crate::base;

pub struct Totalsprinter<'a> {
    charset: &'a base::Charset,
    /// Income and expense, in that order.
    rows: [(String, base::Cents); 2],
    balance: (String, base::Cents),
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub totals: base::Totals,
}

impl Config {
    pub fn to_totalsprinter(&'_ self) -> Totalsprinter<'_> {
        let rows = [
            (base::SeriesKind::Income.to_string(), self.totals.income),
            (base::SeriesKind::Expense.to_string(), self.totals.expense),
        ];
        let balance = (
            base::SeriesKind::Balance.to_string(),
            self.totals.balance(),
        );

        fn char_count((label, value): &(String, base::Cents)) -> usize {
            base::util::charlen(label)
                + base::util::BOUNDING_SPACES_COUNT
                + base::util::MIN_DASHES_COUNT
                + value.charlen()
        }
        let alignment_charlen = usize::max(
            rows.iter().map(char_count).max().unwrap_or_default(),
            char_count(&balance),
        );

        Totalsprinter {
            charset: &self.charset,
            rows,
            balance,
            alignment_charlen,
        }
    }
}

impl Totalsprinter<'_> {
    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        (label, value): &(String, base::Cents),
        paint: impl Fn(&str) -> String,
    ) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - base::util::charlen(label)
            - base::util::BOUNDING_SPACES_COUNT
            - value.charlen();
        w.write_str(label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        writeln!(w, "{}", paint(&value.to_string()))
    }
}

impl std::fmt::Display for Totalsprinter<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.rows
            .iter()
            .try_for_each(|row| self.draw(f, row, str::to_string))?;
        for _ in 0..self.alignment_charlen {
            f.write_str("=")?;
        }
        f.write_str("\n")?;
        let (_, balance) = self.balance;
        self.draw(f, &self.balance, |s| {
            if balance < base::Cents(0) {
                self.charset.negative(s)
            } else {
                self.charset.positive(s)
            }
        })
    }
}
