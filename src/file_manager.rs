use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes files underneath the output root of a migration.
#[derive(Debug, Clone)]
pub struct FileManager {
    base_dir: PathBuf,
}

impl FileManager {
    pub fn new(base_dir: &Path) -> Result<Self> {
        let base_dir = base_dir.to_path_buf();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", base_dir))?;

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves a forward-slash path relative to the output root.
    pub fn resolve(&self, relative_path: &str) -> PathBuf {
        let mut path = self.base_dir.clone();
        for segment in relative_path.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }

    /// Creates the parent directories of `relative_path` and returns its full path.
    pub fn prepare(&self, relative_path: &str) -> io::Result<PathBuf> {
        let path = self.resolve(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    /// Writes `content` to `relative_path`, replacing any existing file.
    pub fn save_file(&self, relative_path: &str, content: &[u8]) -> io::Result<PathBuf> {
        let path = self.prepare(relative_path)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(content)?;
        Ok(path)
    }
}
