pub mod circular;
pub mod force_directed;
pub mod random;

mod layout;
pub use force_directed::{Eades, EadesState, ForceAlgorithm};
pub use layout::{AnimatedState, LayoutState};
