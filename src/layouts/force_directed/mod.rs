mod algorithm;
mod eades;

pub use algorithm::ForceAlgorithm;
pub use eades::{Eades, EadesState};
