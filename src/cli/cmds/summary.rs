use crate::base;
use crate::cli;

/// Show total income, expense and balance
#[derive(clap::Parser)]
pub struct Summary {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Summary {
    pub fn run(
        self,
        dashboard: base::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let dashboard = dashboard.with_selection(self.filter_opts.to_selection());
        Ok(cli::Output::Totalsprinter(base::totalsprinter::Config {
            charset: cli::util::charset_from_config(config),
            totals: dashboard.totals(),
        }))
    }
}
