pub mod config;
pub mod content;
pub mod hover;
pub mod logging;
pub mod rain;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
