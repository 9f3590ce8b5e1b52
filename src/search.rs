//! Adversarial search: successor generation, terminal evaluation and minimax

pub mod config;
pub mod minimax;
pub mod reference;
pub mod successors;
pub mod terminal;

pub use config::{SearchConfig, Selection};
pub use minimax::{Decision, Minimax, decide, max_value, min_value};
pub use reference::{VerificationReport, negamax, reachable_positions, reference_value, verify_all};
pub use successors::successors;
pub use terminal::{DRAW, LOSS, Perspective, Role, Utility, WIN, is_terminal, utility};
