//! Logger setup for the editor binary.
//!
//! Uses the [`log`] facade with [`env_logger`] as the backend. When `RUST_LOG`
//! is set it takes precedence; otherwise `level` is applied to this crate only:
//!
//! ```sh
//! $> RUST_LOG=blockgraph=debug blockgraph
//! ```

use log::LevelFilter;

/// Install the global logger. Calling it twice is harmless (the second call is ignored).
pub fn init(level: LevelFilter) {
    let filter = format!("{}={}", env!("CARGO_CRATE_NAME"), level.as_str().to_ascii_lowercase());
    let env = env_logger::Env::default().default_filter_or(filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
