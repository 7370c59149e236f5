//! Game Menu Library
//!
//! Exposes the catalog decoding, caching, fetching and navigation layers so
//! the binary and the integration tests share one implementation.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod loader;
pub mod logging;
pub mod nav;
pub mod ui;
