use log::warn;
use rand::Rng;
use std::fs;
use std::path::PathBuf;

pub const START_IMAGE: &str = "spamek_start.png";

/// Lookup of the static images and GIFs the bot can attach to replies.
#[cfg_attr(test, mockall::automock)]
pub trait AssetProvider: Send + Sync {
    /// Path of the named image, or `None` when it is not on disk.
    fn image(&self, name: &str) -> Option<PathBuf>;

    /// Every available GIF, in a stable order.
    fn gifs(&self) -> Vec<PathBuf>;
}

/// Assets read from a single directory.
pub struct FsAssetProvider {
    dir: PathBuf,
}

impl FsAssetProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AssetProvider for FsAssetProvider {
    fn image(&self, name: &str) -> Option<PathBuf> {
        let path = self.dir.join(name);
        path.is_file().then_some(path)
    }

    fn gifs(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot list assets in {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut gifs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == "gif"))
            .collect();
        gifs.sort();
        gifs
    }
}

/// Source of uniform random picks, swappable so selection can be pinned in tests.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// An index in `0..len`. Callers never pass zero.
    fn pick_index(&self, len: usize) -> usize;
}

pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
