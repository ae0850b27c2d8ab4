//! Chart Maker Library
//!
//! Command implementations and headless output for the `chartmaker` binary.
//! Domain logic lives in `chartmaker-core`; state and config in
//! `chartmaker-app`.

pub mod cli;
pub mod headless;
