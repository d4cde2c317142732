use std::path::{Path, PathBuf};

/// The lines of one log, read fully into memory.
pub type LogLines = std::vec::IntoIter<String>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("listing logs in {}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading log {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0:?} is not a file name inside the logs directory")]
    InvalidName(String),
}

/// Where server logs come from.
pub trait LogSource: Send + Sync {
    fn duplicate(&self) -> Box<dyn LogSource>;

    /// Names of all logs ending in `extension`, sorted.
    fn list(&self, extension: &str) -> Result<Vec<String>, StoreError>;

    fn load(&self, name: &str) -> Result<LogLines, StoreError>;
}

pub struct FileStore {
    folder: std::sync::Arc<PathBuf>,
}

impl FileStore {
    pub fn new<P>(folder: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            folder: std::sync::Arc::new(folder.into()),
        }
    }
}

impl LogSource for FileStore {
    fn duplicate(&self) -> Box<dyn LogSource> {
        Box::new(Self {
            folder: self.folder.clone(),
        })
    }

    fn list(&self, extension: &str) -> Result<Vec<String>, StoreError> {
        let list_err = |source| StoreError::List {
            path: self.folder.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(self.folder.as_path()).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if !entry.file_type().map_err(list_err)?.is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) if name.ends_with(extension) => names.push(name),
                Ok(_) => {}
                Err(name) => {
                    tracing::warn!(?name, "Skipping log with a non UTF-8 name");
                }
            };
        }

        names.sort();
        Ok(names)
    }

    #[tracing::instrument(skip(self))]
    fn load(&self, name: &str) -> Result<LogLines, StoreError> {
        if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
            return Err(StoreError::InvalidName(name.to_owned()));
        }

        let path = self.folder.join(name);
        let raw = std::fs::read(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;

        // Player names are not guaranteed to be valid UTF-8
        let content = String::from_utf8_lossy(&raw);
        let lines: Vec<String> = content.lines().map(str::to_owned).collect();

        tracing::debug!(lines = lines.len(), "Loaded log");

        Ok(lines.into_iter())
    }
}
