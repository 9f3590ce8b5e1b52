//! Command-line interface for the minimax engine
//!
//! This module provides the `decide`, `play` and `verify` commands and the
//! shared output helpers they print with.

pub mod commands;
pub mod output;
