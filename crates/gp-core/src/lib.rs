//! Shared types and configuration for glyphpage.
//!
//! Holds the character grid handed over by the conversion pipeline, the
//! color helpers used by the exporters and the export configuration.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;

pub use color::BackgroundColor;
pub use config::ExportConfig;
pub use error::CoreError;
pub use frame::{AsciiCell, AsciiGrid};
