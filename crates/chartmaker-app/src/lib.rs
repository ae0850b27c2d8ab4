//! chartmaker-app - Application state and configuration for Chart Maker
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! chart-maker state container: rows of title/value pairs, chart type
//! selection, and presentation flags, all changed only through [`Message`]s.
//! It also loads `.chartmaker/config.toml`.

pub mod config;
pub mod handler;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use message::{Message, RowAction};
pub use process::process_message;
pub use state::{ChartMakerState, FullScreenPresentation};
