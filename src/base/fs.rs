use crate::base;

/// Application filesystem.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Serde: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Serde for base::Config {
    const FILENAME: &'static str = ".extrato.json";
}
impl Serde for Cache {
    const FILENAME: &'static str = ".extrato-cache.csv";
}

/// Source text saved by the last successful fetch. Empty when nothing has
/// been cached yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cache(pub String);

impl Cache {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cache {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for Cache {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Serde,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}
