use crate::base;
use crate::cli;

/// Show income, expense and balance by month
#[derive(clap::Parser)]
pub struct Monthly {
    /// Plot a bar chart instead of printing a table
    #[arg(long)]
    chart: bool,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Monthly {
    pub fn run(
        self,
        dashboard: base::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let dashboard = dashboard.with_selection(self.filter_opts.to_selection());
        let charset = cli::util::charset_from_config(config);
        let totals = dashboard.monthly();
        if self.chart {
            return Ok(cli::Output::Barchart(base::barchart::Config {
                charset,
                term_width: cli::util::term_width(),
                result: totals.to_aggregate(),
            }));
        }
        Ok(cli::Output::Monthlytable(base::monthlytable::Config {
            charset,
            totals,
        }))
    }
}
