use crate::base;
use crate::cli;

/// Show the summary followed by every report
///
/// The filters apply to all sections alike.
#[derive(clap::Parser)]
pub struct Overview {
    /// Length of each running balance period: day, month or year
    #[arg(short, long, value_name = "PERIOD", default_value_t = base::Datepart::Day)]
    by: base::Datepart,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Overview {
    pub fn run(
        self,
        dashboard: base::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let mut dashboard = dashboard.with_balance_unit(self.by);
        let base::Reports {
            balance,
            weekly,
            monthly,
            yearly,
        } = dashboard.select(self.filter_opts.to_selection());

        let charset = cli::util::charset_from_config(config);
        let barchart = |result: base::AggregateResult| {
            cli::Output::Barchart(base::barchart::Config {
                charset: charset.clone(),
                term_width: cli::util::term_width(),
                result,
            })
        };
        Ok(cli::Output::Sections(vec![
            (
                "Resumo",
                cli::Output::Totalsprinter(base::totalsprinter::Config {
                    charset: charset.clone(),
                    totals: dashboard.totals(),
                }),
            ),
            ("Saldo", barchart(balance)),
            ("Semanas", barchart(weekly)),
            (
                "Meses",
                cli::Output::Monthlytable(base::monthlytable::Config {
                    charset: charset.clone(),
                    totals: monthly,
                }),
            ),
            ("Anos", barchart(yearly)),
        ]))
    }
}
