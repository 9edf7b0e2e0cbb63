//! Loading and saving the generated cache

use crate::error::{GencacheError, GencacheResult};
use crate::generated::schema::ProjectCache;
use crate::generated::GENERATED_CONFIG_PATH;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Handle owning the project cache of one invocation.
///
/// The first successful [`CacheStore::load`] reads the file; later calls
/// return the same in-memory instance until [`CacheStore::reset`]. A failed
/// load leaves the handle empty so the next call retries.
#[derive(Debug)]
pub struct CacheStore {
    path: PathBuf,
    override_profile: Option<String>,
    loaded: Option<ProjectCache>,
    writes_disabled: bool,
}

impl CacheStore {
    /// Create a store for the default project-relative path
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(GENERATED_CONFIG_PATH))
    }

    /// Create a store for a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            override_profile: None,
            loaded: None,
            writes_disabled: false,
        }
    }

    /// Set the profile override applied on every load
    pub fn with_override_profile(mut self, profile: Option<String>) -> Self {
        self.override_profile = profile;
        self
    }

    /// Get the configured path, possibly relative
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path the cache is read from and written to.
    ///
    /// Relative paths resolve against the current working directory at the
    /// time of the call.
    pub fn resolved_path(&self) -> GencacheResult<PathBuf> {
        if self.path.is_absolute() {
            return Ok(self.path.clone());
        }

        let cwd = std::env::current_dir()
            .map_err(|e| GencacheError::io("getting current directory", e))?;
        Ok(cwd.join(&self.path))
    }

    /// Whether a cache instance is held
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Load the cache, reading the file only on first use
    pub async fn load(&mut self) -> GencacheResult<&mut ProjectCache> {
        let cache = match self.loaded.take() {
            Some(cache) => cache,
            None => {
                let path = self.resolved_path()?;
                load_from_path(&path, self.override_profile.as_deref()).await?
            }
        };
        Ok(self.loaded.insert(cache))
    }

    /// Install a fixture instead of reading from disk.
    ///
    /// The store counts as loaded afterwards and never writes to disk again.
    pub fn set_test_fixture(&mut self, cache: ProjectCache) {
        self.loaded = Some(cache);
        self.writes_disabled = true;
    }

    /// Drop the held instance so the next load reads the file again
    pub fn reset(&mut self) {
        self.loaded = None;
    }

    /// Write the held instance to disk.
    ///
    /// Does nothing when writes are disabled by a fixture or when nothing
    /// has been loaded.
    pub async fn save(&mut self) -> GencacheResult<()> {
        if self.writes_disabled {
            debug!("Skipping cache save, writes disabled");
            return Ok(());
        }

        let path = self.resolved_path()?;
        match self.loaded {
            Some(ref mut cache) => save_to_path(cache, &path).await,
            None => {
                debug!("Skipping cache save, nothing loaded");
                Ok(())
            }
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a cache from a specific file, independent of any store.
///
/// A missing file yields an empty cache. The override profile replaces any
/// override read from the file, and the profile in effect always ends up
/// with an entry.
pub async fn load_from_path(
    path: &Path,
    override_profile: Option<&str>,
) -> GencacheResult<ProjectCache> {
    let mut cache = match fs::read_to_string(path).await {
        Ok(content) => {
            debug!("Loading generated cache from {}", path.display());
            parse(&content).map_err(|e| GencacheError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No generated cache at {}, starting empty", path.display());
            ProjectCache::new()
        }
        Err(e) => {
            return Err(GencacheError::io(
                format!("reading generated cache from {}", path.display()),
                e,
            ))
        }
    };

    cache.apply_override_profile(override_profile);
    cache.get_active();
    Ok(cache)
}

/// Parse a cache document. An empty document is an empty cache.
fn parse(content: &str) -> Result<ProjectCache, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ProjectCache::new());
    }
    serde_yaml::from_str(content)
}

/// Write a cache to a specific file, replacing its previous content
pub async fn save_to_path(cache: &mut ProjectCache, path: &Path) -> GencacheResult<()> {
    cache.get_active();

    let content = serde_yaml::to_string(cache).map_err(GencacheError::Encode)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| GencacheError::CacheDirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
    }

    fs::write(path, content)
        .await
        .map_err(|e| GencacheError::io(format!("writing generated cache to {}", path.display()), e))?;

    info!("Generated cache saved to {}", path.display());
    Ok(())
}
