use serde::{Deserialize, Serialize};

use crate::Vector2D;

/// Per-vertex simulation state, addressed by vertex index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexState {
    pub position: Vector2D,
    pub velocity: Vector2D,

    /// Frozen in place. Rendered with a thicker outline.
    pub locked: bool,
    /// Position is owned by an external caller, the simulation skips the vertex.
    pub dragging: bool,
    /// Carried for interface completeness, not consulted by the simulation.
    pub paused: bool,
}

impl VertexState {
    pub fn new(position: Vector2D) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Whether the force integration may move this vertex.
    pub fn is_free(&self) -> bool {
        !self.locked && !self.dragging
    }
}
