//! Mandala rules.
//!
//! - `color`: the Rule of Color predicates
//! - `actions`: validation and execution of the four actions
//! - `destruction`: the claim sub-phase after a mandala completes
//! - `scoring`: cup scoring and winner resolution
//! - `legal`: advisory enumeration of legal actions
//! - `invariants`: whole-state integrity checks
//! - `engine`: the `RulesEngine` trait tying these together

pub mod actions;
pub mod color;
pub mod destruction;
pub mod engine;
pub mod invariants;
pub mod legal;
pub mod scoring;

pub use color::{can_play_color_to_field, can_play_color_to_mountain, is_mandala_complete};
pub use engine::{MandalaRules, RulesEngine};
pub use invariants::{check_invariants, InvariantViolation};
pub use legal::{valid_actions, ValidActions};
pub use scoring::{calculate_score, get_winner, score, GameResult};
