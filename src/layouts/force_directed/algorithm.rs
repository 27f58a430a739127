use ndarray::ArrayView2;

use crate::{
    elements::VertexState,
    layouts::{AnimatedState, LayoutState},
    GraphModel, SettingsCanvas,
};

/// A pluggable force-directed algorithm interface decoupled from the engine boilerplate.
///
/// The algorithm operates on per-vertex state confined to a canvas and advances the
/// layout by exactly one iteration per `step` call.
pub trait ForceAlgorithm: Default {
    type State: LayoutState + AnimatedState;

    /// Construct from a state value (typically restored from a previous session).
    fn from_state(state: Self::State) -> Self;

    /// Advance the simulation by one iteration. `adjacency` is the symmetric
    /// similarity matrix of `g`, `vertices` is indexed like its rows.
    fn step(
        &mut self,
        g: &GraphModel,
        adjacency: ArrayView2<'_, f64>,
        vertices: &mut [VertexState],
        canvas: &SettingsCanvas,
    );

    /// Return current state to be stored by the host.
    fn state(&self) -> Self::State;

    fn state_mut(&mut self) -> &mut Self::State;
}
