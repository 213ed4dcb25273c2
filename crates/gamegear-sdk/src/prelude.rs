//! Prelude for convenient imports.
//!
//! ```rust
//! use gamegear_sdk::prelude::*;
//! ```

pub use crate::{ConfigError, Storefront, StorefrontConfig};

pub use gamegear_auth::{AuthError, AuthEvent, AuthService, AuthSettings, User};
pub use gamegear_cache::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
pub use gamegear_commerce::prelude::*;
