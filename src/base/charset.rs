#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub chart_axis: char,
    pub chart_bar_pos: char,
    pub chart_bar_neg: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            chart_axis: '|',
            chart_bar_pos: '+',
            chart_bar_neg: '-',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            chart_axis: '\u{2502}',
            chart_bar_pos: '\u{2588}',
            chart_bar_neg: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Paints `s` green, or leaves it alone without color.
    pub fn positive(&self, s: &str) -> String {
        if self.color {
            colored::Colorize::green(s).to_string()
        } else {
            s.to_string()
        }
    }

    /// Paints `s` red, or leaves it alone without color.
    pub fn negative(&self, s: &str) -> String {
        if self.color {
            colored::Colorize::red(s).to_string()
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_without_color() {
        let charset = Charset::default().with_unicode();
        assert_eq!(charset.positive("+++"), "+++");
        assert_eq!(charset.negative("---"), "---");
        assert_eq!(charset.chart_bar_pos, charset.chart_bar_neg);
    }
}
