//! Ports (trait boundaries) between the search core and its callers.

pub mod agent;

pub use agent::{Agent, AgentKind};
