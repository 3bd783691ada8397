use crate::base;

pub struct Barchart<'a> {
    charset: &'a base::Charset,
    result: &'a base::AggregateResult,
    label_charlen: usize,
    max_abs_val: base::Cents,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub result: base::AggregateResult,
}

impl Config {
    pub fn to_barchart(&'_ self) -> Barchart<'_> {
        let values = || self.result.series.iter().flat_map(|s| s.values.iter());
        let label_charlen = self
            .result
            .labels
            .iter()
            .map(|l| base::util::charlen(l))
            .max()
            .unwrap_or_default();
        let max_abs_val = values().map(|v| v.abs()).max().unwrap_or_default();
        let value_charlen = values().map(|v| v.charlen()).max().unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(
                label_charlen
                    + base::util::BOUNDING_SPACES_COUNT
                    + 1 // vertical divider just before bar
                    + value_charlen,
            );

        Barchart {
            charset: &self.charset,
            result: &self.result,
            label_charlen,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart<'_> {
    fn barlen(&self, val: base::Cents) -> usize {
        if self.max_abs_val.0 == 0 {
            return 0;
        }
        let x = (val.abs().0 as f64) / (self.max_abs_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw_bar(
        &self,
        w: &mut impl std::fmt::Write,
        kind: base::SeriesKind,
        val: base::Cents,
    ) -> std::fmt::Result {
        let barlen = self.barlen(val);
        if barlen > 0 {
            let positive = match kind {
                base::SeriesKind::Income => true,
                base::SeriesKind::Expense => false,
                base::SeriesKind::Balance => val >= base::Cents(0),
            };
            let bars = if positive {
                self.charset
                    .positive(&self.charset.chart_bar_pos.to_string().repeat(barlen))
            } else {
                self.charset
                    .negative(&self.charset.chart_bar_neg.to_string().repeat(barlen))
            };
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, i: usize) -> std::fmt::Result {
        let label = &self.result.labels[i];
        for (n, series) in self.result.series.iter().enumerate() {
            let val = series.values.get(i).copied().unwrap_or_default();
            if n == 0 {
                write!(w, "{:<width$}", label, width = self.label_charlen)?;
            } else {
                for _ in 0..self.label_charlen {
                    w.write_char(' ')?;
                }
            }
            w.write_char(' ')?;
            w.write_char(self.charset.chart_axis)?;
            self.draw_bar(w, series.kind, val)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Barchart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.result.is_empty() {
            return writeln!(f, "No transactions.");
        }
        (0..self.result.labels.len()).try_for_each(|i| self.draw(f, i))
    }
}
