//! DoT (Damage over Time) system

mod active;
pub mod tick;
mod types;

pub use active::ActiveDot;
pub use tick::{apply_dot, process_tick, DotApplication, DotTick};
pub use types::{DotSpec, DotStacking};
