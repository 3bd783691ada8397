use crate::base;
use crate::cli;

/// Plot income and expense by week of the month
///
/// Week N covers days 7N-6 to 7N of every month, so without '--month' the
/// same week of different months is added up.
#[derive(clap::Parser)]
pub struct Weekly {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Weekly {
    pub fn run(
        self,
        dashboard: base::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let dashboard = dashboard.with_selection(self.filter_opts.to_selection());
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            term_width: cli::util::term_width(),
            result: dashboard.weekly(),
        }))
    }
}
