use std::path::{Path, PathBuf};

/// Root of the media tree the fetcher populates and the dev servers mount.
#[derive(Debug, Clone)]
pub struct ContentPaths {
    pub base_dir: PathBuf,
}

impl ContentPaths {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn movies_dir(&self) -> PathBuf {
        self.base_dir.join("movies")
    }

    pub fn tv_shows_dir(&self) -> PathBuf {
        self.base_dir.join("tv-shows")
    }

    pub fn music_dir(&self) -> PathBuf {
        self.base_dir.join("music")
    }

    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.base_dir.join(relative)
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.movies_dir())?;
        std::fs::create_dir_all(self.tv_shows_dir())?;
        std::fs::create_dir_all(self.music_dir())?;
        Ok(())
    }
}
