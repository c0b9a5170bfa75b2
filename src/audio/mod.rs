pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod playback;
pub mod progress;
pub mod state;
pub mod subscription;
pub mod traits;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;
