//! Data-driven reforge content and its loaders.
//!
//! This crate reads the display configuration and definition catalogs
//! from files:
//! - Display configuration (data-driven via TOML)
//! - Target categories (data-driven via RON)
//! - Reforge definitions (data-driven via RON)
//! - Reforge stone definitions (data-driven via RON)
//!
//! All loaders use reforge-core types directly with serde for RON/TOML
//! deserialization; the loaded bundle is consumed through
//! [`DisplayContent::env`] and never mutated afterwards.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, DisplayContent, ReforgeLoader, StoneLoader, TargetLoader,
};
