use crate::base;

/// File name of the ledger source in test repositories. Test configs point
/// their `source` key here.
pub const SOURCE_FILENAME: &str = "extrato.csv";

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    source: Option<String>,
    cache: Option<base::Cache>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the contents of the repo's ledger source file.
    pub fn with_source(mut self, s: &str) -> Self {
        self.source = Some(s.to_string());
        self
    }

    /// Sets repo's [`base::Cache`].
    pub fn with_cache(mut self, s: &str) -> Self {
        self.cache = Some(base::Cache(s.to_string()));
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        let source_path = fs.dir().join(SOURCE_FILENAME);
        Self {
            config: read!(base::Config),
            source: source_path
                .exists()
                .then(|| std::fs::read_to_string(source_path).unwrap()),
            cache: read!(base::Cache),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    source: Option<&'a str>,
    cache: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the contents of [`SOURCE_FILENAME`].
    pub fn with_source(mut self, s: &'a str) -> Self {
        self.source = Some(s);
        self
    }

    /// Sets repo's [`base::Cache`] file contents.
    pub fn with_cache(mut self, s: &'a str) -> Self {
        self.cache = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not
    /// a valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        if let Some(s) = self.source {
            std::fs::write(fs.dir().join(SOURCE_FILENAME), s).unwrap()
        }
        if let Some(s) = self.cache {
            std::fs::write(fs.path::<base::Cache>(), s).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.source {
            os = os.with_source(s);
        }
        if let Some(s) = self.cache {
            os = os.with_cache(s);
        }
        os
    }
}
