//! # Storage Module
//!
//! Storage traits and the in-memory implementation behind them. Nothing is
//! written to disk; every run starts from the configured seed.

pub mod traits;
pub mod memory;

pub use memory::MemoryConnection;
pub use traits::*;
