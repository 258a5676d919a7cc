//! # DropMod Library
//!
//! This library exposes the DropMod app modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod error;

// Re-export dropmod_core for convenience
pub use dropmod_core;
