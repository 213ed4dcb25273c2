//! Key-value storage for the GameGear storefront.
//!
//! Holds the small amount of state that outlives a page load: the signed-in
//! user record and, optionally, the cart. Values are JSON strings under
//! plain string keys.
//!
//! # Example
//!
//! ```rust
//! use gamegear_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     dark_mode: bool,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("prefs", &Prefs { dark_mode: true }).unwrap();
//!
//! let prefs: Option<Prefs> = cache.get("prefs").unwrap();
//! assert_eq!(prefs, Some(Prefs { dark_mode: true }));
//!
//! cache.delete("prefs").unwrap();
//! assert!(!cache.exists("prefs").unwrap());
//! ```

mod error;
mod file;
mod kv;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
