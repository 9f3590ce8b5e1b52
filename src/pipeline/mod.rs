//! Agents and match play
//!
//! This module provides:
//! - Agent implementations for the [`Agent`] port
//! - A match runner that plays agents against each other

pub mod agents;
pub mod matches;

pub use agents::{MinimaxAgent, RandomAgent, create_agent};
pub use matches::{MatchConfig, MatchResult, MatchRunner};

pub use crate::ports::{Agent, AgentKind};
