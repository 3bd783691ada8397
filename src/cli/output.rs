use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Barchart(base::barchart::Config),
    Monthlytable(base::monthlytable::Config),
    Totalsprinter(base::totalsprinter::Config),
    /// Titled outputs separated by blank lines.
    Sections(Vec<(&'static str, Output)>),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Barchart(config) => write!(f, "{}", config.to_barchart()),
            Output::Monthlytable(config) => write!(f, "{}", config.to_monthlytable()),
            Output::Totalsprinter(config) => write!(f, "{}", config.to_totalsprinter()),
            Output::Sections(sections) => {
                for (i, (title, output)) in sections.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}:", title)?;
                    write!(f, "{}", output)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Output::Str("asdf".into()), "asdf\n")]
    #[case(Output::Str("asdf\n".into()), "asdf\n")]
    #[case(
        Output::Barchart(base::barchart::Config {
            charset: base::Charset::default(),
            term_width: 80,
            result: base::AggregateResult::default(),
        }),
        "No transactions.\n"
    )]
    #[case(
        Output::Monthlytable(base::monthlytable::Config {
            charset: base::Charset::default(),
            totals: base::MonthlyTotals::default(),
        }),
        "No transactions.\n"
    )]
    #[case(
        Output::Sections(vec![
            ("Um", Output::Str("a".into())),
            ("Dois", Output::Str("b\nc\n".into())),
        ]),
        "Um:\na\n\nDois:\nb\nc\n"
    )]
    #[case(Output::Sections(vec![]), "")]
    fn test_to_string(#[case] output: Output, #[case] want: impl Into<String>) {
        assert_eq!(output.to_string(), want.into())
    }
}
