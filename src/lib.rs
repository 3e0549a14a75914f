//! Moontest - Dispatch the MoonBit test runner against core suite files.
//!
//! This library provides the core functionality for the moontest CLI tool.

pub mod config;
pub mod dispatch;
pub mod runner;
pub mod util;
