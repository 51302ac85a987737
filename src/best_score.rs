//! Best-score persistence
//!
//! A single integer stored as plain text: LocalStorage on the web, a small
//! file natively. Missing or corrupt data reads as zero.

use std::num::ParseIntError;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a best score could not be read or written
#[derive(Debug, Error)]
pub enum PersistError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored best score is not a valid integer: {0}")]
    Parse(#[from] ParseIntError),
    #[error("browser storage unavailable")]
    StorageUnavailable,
}

/// Highest score reached across games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u64,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pacman-high-score";

    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Strict decode of the stored text
    pub fn try_parse(text: &str) -> Result<Self, PersistError> {
        Ok(Self::new(text.trim().parse()?))
    }

    /// Decode the stored text, treating anything unreadable as zero
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_default()
    }

    pub fn encode(&self) -> String {
        self.value.to_string()
    }

    /// Raise the best score if `score` beats it. Returns true if it changed.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn try_load_from(path: &Path) -> Result<Self, PersistError> {
        let text = std::fs::read_to_string(path).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_parse(&text)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn try_save_to(&self, path: &Path) -> Result<(), PersistError> {
        std::fs::write(path, self.encode()).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from a file; missing or corrupt files read as zero
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(best) => {
                log::info!("Loaded best score {}", best.value);
                best
            }
            Err(PersistError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring stored best score: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &Path) {
        match self.try_save_to(path) {
            Ok(()) => log::debug!("Best score {} saved", self.value),
            Err(e) => log::warn!("Could not save best score: {}", e),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistError::StorageUnavailable)
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).map_err(|_| PersistError::StorageUnavailable));
        match stored {
            Ok(Some(text)) => {
                let best = Self::parse(&text);
                log::info!("Loaded best score {}", best.value);
                best
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let result = Self::storage().and_then(|s| {
            s.set_item(Self::STORAGE_KEY, &self.encode())
                .map_err(|_| PersistError::StorageUnavailable)
        });
        if let Err(e) = result {
            log::warn!("Could not save best score: {}", e);
        }
    }
}
