//! Domain model and pure computation for race nutrition plans.

pub mod nutrition;
pub mod time;
pub mod totals;
