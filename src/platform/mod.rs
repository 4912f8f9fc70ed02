//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (host timestamps in milliseconds)
//! - Input events (keyboard, pointer, touch -> intents)
//! - Storage (LocalStorage on web, files on native)
//! - Logger setup

pub mod input;
pub mod storage;
pub mod time;

pub use input::{InputMapper, Key, RawInput};
pub use time::now_ms;

/// Install the platform logger. A second call keeps the first logger.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("Logger already installed: {e}");
    }
}

/// Install the platform logger. A second call keeps the first logger.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("Logger already installed: {e}");
    }
}
