//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - The logger handle passed to the probers
//! - DNS resolver
//! - Crypto provider for TLS
//! - Environment variables from a `.env` file

mod logger;
mod resolver;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use logger::{init_logger_with, ProbeLogger};
pub use resolver::{init_resolver, resolver_opts};

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. This must be called before
/// any TLS connections are established.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}

/// Loads environment variables from a `.env` file, if one exists.
///
/// Looks in the current directory first, then next to the executable.
/// `RUST_LOG` is the only variable read from the environment.
pub fn load_env() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}
