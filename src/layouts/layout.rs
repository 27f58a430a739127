use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Serializable state of a layout. Lets a host persist and restore a
/// simulation between sessions.
pub trait LayoutState: Serialize + DeserializeOwned + Clone + Default + Debug {}

/// Optional hooks for animated/simulated layout states.
/// Implement on your layout state to allow the engine to pause the simulation
/// and to read the last average displacement metric.
pub trait AnimatedState {
    fn is_running(&self) -> bool;
    fn set_running(&mut self, v: bool);

    /// Average per-vertex displacement from the last simulation iteration (canvas units).
    fn last_avg_displacement(&self) -> Option<f64> {
        None
    }
    /// Store average displacement metric. Default: no-op.
    fn set_last_avg_displacement(&mut self, _v: Option<f64>) {}

    /// Retrieve current total iteration count.
    fn step_count(&self) -> u64 {
        0
    }

    /// Set total iteration count.
    fn set_step_count(&mut self, _v: u64) {}
}
