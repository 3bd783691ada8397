use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

#[cfg(not(test))]
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Fixed so rendered charts do not depend on the terminal running the tests.
#[cfg(test)]
pub fn term_width() -> usize {
    80
}

/// Loads the configured source into a fresh dashboard, going through the
/// repository cache when enabled.
pub fn load_dashboard(fs: &base::Fs, config: &base::Config) -> anyhow::Result<base::Dashboard> {
    let mut dashboard = base::Dashboard::new();
    let source = base::Source::parse(&config.source, fs.dir()).map_err(base::LoadError::from)?;
    log::debug!("loading '{}'", source);
    if config.use_cache {
        let cached = base::Cached { inner: source, fs };
        dashboard.load(&cached, config.delimiter)?;
    } else {
        dashboard.load(&source, config.delimiter)?;
    }
    Ok(dashboard)
}
