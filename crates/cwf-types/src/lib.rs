//! Foundation types for the custom watchface engine.
//!
//! Shared by every crate in the workspace: the RGBA `Color` type with its
//! string codecs, the error taxonomy, and the host configuration file.

pub mod color;
pub mod config;
pub mod error;

pub use color::Color;
pub use config::WatchfaceConfig;
pub use error::{CwfError, Result};
