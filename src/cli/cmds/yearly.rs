use crate::base;
use crate::cli;

/// Plot income and expense by year
#[derive(clap::Parser)]
pub struct Yearly {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Yearly {
    pub fn run(
        self,
        dashboard: base::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let dashboard = dashboard.with_selection(self.filter_opts.to_selection());
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            term_width: cli::util::term_width(),
            result: dashboard.yearly(),
        }))
    }
}
