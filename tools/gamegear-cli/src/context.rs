//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use gamegear_sdk::prelude::*;
use tracing::debug;

use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["gamegear.toml", ".gamegear.toml", "gamegear.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from config file.
    ///
    /// Without an explicit path, the working directory and its parents are
    /// searched. A relative data directory is taken relative to the config
    /// file, or to the working directory when there is none.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let found = match config_path {
            Some(path) => Some(resolve(&cwd, Path::new(path))),
            None => find_config(&cwd),
        };

        let config = match found {
            Some(path) => {
                let config = StorefrontConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                debug!(path = %path.display(), "Loaded config");
                config.with_base_dir(&base)
            }
            None => StorefrontConfig::default().with_base_dir(&cwd),
        };

        Ok(Self { config, output })
    }

    /// Open the storefront over the on-disk store.
    ///
    /// Each CLI run is a new process, so the cart is always persisted.
    pub fn open_storefront(&self) -> Result<Storefront<FileStore>> {
        let mut config = self.config.clone();
        config.cart.persist = true;

        let path = config.storage.store_path();
        self.output.debug(&format!("Using store {}", path.display()));
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open store {}", path.display()))?;

        Ok(Storefront::new(config, store))
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
