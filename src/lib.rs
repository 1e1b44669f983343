pub mod app;
pub mod buffer;
pub mod codec;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod outline;
pub mod theme;
pub mod viewport;
pub mod wrap;

pub use error::{Error, Result};
