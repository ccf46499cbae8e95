//! Defense system - Resistances, penetration and target profiles

mod resistance;
mod target;

pub use resistance::{effective_resistance, mitigate, mitigate_against, resistance_multiplier};
pub use target::{DamageReduction, TargetProfile, TargetSpec};

/// Defense calculation constants
pub mod constants {
    /// Resistance at which damage taken is halved
    pub const RESISTANCE_CONSTANT: f64 = 100.0;
}
