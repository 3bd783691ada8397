use anyhow::Context;

use crate::base;
use crate::cli;

const DEFAULT_SOURCE: &str = "extrato.csv";

/// Initialize repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Where to read the ledger from
    ///
    /// Either a CSV file path, relative to the repository, or an http(s) URL
    /// such as a published spreadsheet export link. Defaults to 'extrato.csv'
    /// for a new repository.
    #[arg(long, value_name = "LOCATION")]
    source: Option<String>,

    /// Restore an existing repository's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        source: DEFAULT_SOURCE.to_string(),
        use_cache: true,
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let path = fs.path::<base::Config>();
        let mut config = if self.reset_config || !path.exists() {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(if !already_repo {
            cli::Output::Str(format!(
                "Repository initialized in '{}'",
                fs.dir().display()
            ))
        } else if self.reset_config {
            cli::Output::Str("Repository configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Repository reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}
