use crate::base;
use crate::cli;

/// Plot the running balance
///
/// Each bar is the balance at the end of a period holding at least one
/// transaction.
#[derive(clap::Parser)]
pub struct Balance {
    /// Length of each period: day, month or year
    #[arg(short, long, value_name = "PERIOD", default_value_t = base::Datepart::Day)]
    by: base::Datepart,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Balance {
    pub fn run(
        self,
        dashboard: base::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let dashboard = dashboard
            .with_balance_unit(self.by)
            .with_selection(self.filter_opts.to_selection());
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            term_width: cli::util::term_width(),
            result: dashboard.balance(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const SOURCE: &str = indoc! {r#"
        Data,Tipo,Valor,Categoria,Subcategoria
        01/01/2024,Entrada,"1.000,00",Renda,Salário
        05/01/2024,Saída,"250,50",Casa,Mercado
        12/02/2024,Saída,"49,50",Casa,Luz
    "#};

    #[test]
    fn test_bad_period() {
        let res = <cli::Root as clap::Parser>::try_parse_from(["", "balance", "--by", "week"]);
        assert!(res.is_err());
    }

    cli::testing::generate_testcases![
        (
            by_day,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "balance"],
                    res: cli::testing::ResultMatcher::OkPrinted(indoc! {"
                        01/01/2024 |++++++++++++++++++++++++++++++++++++++++++++++++++++++++ R$ 1.000,00
                        05/01/2024 |++++++++++++++++++++++++++++++++++++++++++ R$ 749,50
                        12/02/2024 |+++++++++++++++++++++++++++++++++++++++ R$ 700,00
                    "}),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"source": "extrato.csv"}"#)
                    .with_source(SOURCE),
            }
        ),
        (
            by_month,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "balance", "--by", "month"],
                    res: cli::testing::ResultMatcher::OkPrinted(indoc! {"
                        jan/2024 |++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++ R$ 749,50
                        fev/2024 |++++++++++++++++++++++++++++++++++++++++++++++++++++++++ R$ 700,00
                    "}),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"source": "extrato.csv"}"#)
                    .with_source(SOURCE),
            }
        ),
        (
            by_year_expenses,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "balance", "-b", "YEAR", "--type", "saída"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Barchart(
                        base::barchart::Config {
                            charset: base::Charset::default(),
                            term_width: 80,
                            result: base::AggregateResult {
                                labels: vec!["2024".into()],
                                series: vec![base::Series {
                                    kind: base::SeriesKind::Balance,
                                    values: vec![base::Cents(-30000)],
                                }],
                            },
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"source": "extrato.csv"}"#)
                    .with_source(SOURCE),
            }
        ),
        (
            nothing_selected,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "balance", "--category", "Lazer"],
                    res: cli::testing::ResultMatcher::OkPrinted("No transactions.\n"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"source": "extrato.csv"}"#)
                    .with_source(SOURCE),
            }
        ),
    ];
}
