use anyhow::Context;

use crate::base;
use crate::cli;

/// Cash flow reports for a pt-BR bank statement spreadsheet
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Summary(cli::cmds::summary::Summary),
    Balance(cli::cmds::balance::Balance),
    Weekly(cli::cmds::weekly::Weekly),
    Monthly(cli::cmds::monthly::Monthly),
    Yearly(cli::cmds::yearly::Yearly),
    Overview(cli::cmds::overview::Overview),
    Options(cli::cmds::options::Options),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let dashboard = cli::util::load_dashboard(fs, &config)?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Summary(cmd) => cmd.run(dashboard, &config),
            Commands::Balance(cmd) => cmd.run(dashboard, &config),
            Commands::Weekly(cmd) => cmd.run(dashboard, &config),
            Commands::Monthly(cmd) => cmd.run(dashboard, &config),
            Commands::Yearly(cmd) => cmd.run(dashboard, &config),
            Commands::Overview(cmd) => cmd.run(dashboard, &config),
            Commands::Options(cmd) => cmd.run(dashboard),
        }
    }
}
