//! Where ledger text comes from.
//!
//! Parsing only ever sees a `String`, so anything that can produce one can
//! stand in for the network, including the on-disk cache.

use crate::base;

const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no source configured")]
    NoSource,
    #[error("failed to read '{}'", .0.display())]
    Io(std::path::PathBuf, #[source] std::io::Error),
    #[error("failed to get '{0}'")]
    Http(String, #[source] reqwest::Error),
    #[error("'{0}' responded with status {1}")]
    Status(String, reqwest::StatusCode),
}

/// Produces the raw text of a ledger.
pub trait Fetch {
    fn fetch(&self) -> Result<String, FetchError>;

    /// Told that `text`, as returned by [`Fetch::fetch`], parsed into a
    /// usable ledger.
    fn accept(&self, _text: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(std::path::PathBuf),
    Http(String),
}

impl Source {
    /// Interprets a configured location. URLs with an `http` or `https`
    /// scheme are fetched over the network, anything else is a path relative
    /// to `base_dir`.
    pub fn parse(location: &str, base_dir: &std::path::Path) -> Result<Self, FetchError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(FetchError::NoSource);
        }
        let lower = location.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Http(location.to_string()));
        }
        Ok(Self::File(base_dir.join(location)))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Http(url) => f.write_str(url),
        }
    }
}

impl Fetch for Source {
    fn fetch(&self) -> Result<String, FetchError> {
        match self {
            Source::File(path) => {
                std::fs::read_to_string(path).map_err(|e| FetchError::Io(path.clone(), e))
            }
            Source::Http(url) => {
                let http = reqwest::blocking::Client::builder()
                    .timeout(HTTP_TIMEOUT)
                    .build()
                    .map_err(|e| FetchError::Http(url.clone(), e))?;
                let response = http
                    .get(url)
                    .header(reqwest::header::CACHE_CONTROL, "no-cache")
                    .send()
                    .map_err(|e| FetchError::Http(url.clone(), e))?;
                if !response.status().is_success() {
                    return Err(FetchError::Status(url.clone(), response.status()));
                }
                response.text().map_err(|e| FetchError::Http(url.clone(), e))
            }
        }
    }
}

/// Wraps another fetcher with the repository cache. Accepted text refreshes
/// the cache; a failed fetch is answered from the cache if it holds
/// anything. Text the parser rejects never reaches the cache.
pub struct Cached<'a, F> {
    pub inner: F,
    pub fs: &'a base::Fs,
}

impl<F> Fetch for Cached<'_, F>
where
    F: Fetch,
{
    fn fetch(&self) -> Result<String, FetchError> {
        self.inner.fetch().or_else(|e| match self.fs.read::<base::Cache>() {
            Ok(cache) if !cache.is_empty() => {
                log::warn!("{}, using cached copy", e);
                Ok(cache.0)
            }
            _ => Err(e),
        })
    }

    fn accept(&self, text: &str) {
        self.inner.accept(text);
        if let Err(e) = self.fs.write(&base::Cache(text.to_string())) {
            log::warn!(
                "failed to write '{}': {}",
                self.fs.path::<base::Cache>().display(),
                e
            );
        }
    }
}
