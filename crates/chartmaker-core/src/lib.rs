//! # chartmaker-core - Core Domain Types
//!
//! Foundation crate for Chart Maker. Provides fruit emoji annotation, chart
//! domain types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing, toml).
//!
//! ## Public API
//!
//! ### Fruit Emoji Annotation (`emoji`)
//! - [`add_fruit_emojis()`] - Append emojis after whole-word fruit names
//! - [`contains_enhanceable_fruits()`] - Check whether annotation would change text
//! - [`FruitAnnotator`] - Annotator over a custom or configured table
//! - [`FruitEntry`] - A `(name, emoji)` table row
//!
//! ### Domain Types (`types`)
//! - [`ChartDataPoint`] - A labeled value row
//! - [`ChartType`] - Bar, line, or pie presentation
//! - [`FocusableField`] - Which text field holds keyboard focus
//! - [`RowId`] - Row identity
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use chartmaker_core::prelude::*;
//! ```

pub mod emoji;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use emoji::{
    add_fruit_emojis, contains_enhanceable_fruits, default_annotator, default_entries,
    shared_default_annotator, FruitAnnotator, FruitEntry, DEFAULT_FRUITS,
};
pub use error::{Error, Result, ResultExt};
pub use types::{ChartDataPoint, ChartType, FocusableField, RowId};
