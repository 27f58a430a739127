use std::f64::consts::FRAC_PI_6;

use serde::{Deserialize, Serialize};

use crate::Vector2D;

const ARROW_LENGTH: f64 = 10.;

/// What a renderer needs to draw one vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSnapshot {
    pub position: Vector2D,
    pub label: String,
    pub locked: bool,
    pub dragging: bool,
}

/// Read-only copy of everything drawable at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub vertices: Vec<VertexSnapshot>,
    pub edges: Vec<(usize, usize)>,
    pub directed: bool,
    pub vertex_radius: f64,
}

impl RenderSnapshot {
    /// Segment endpoints of every edge.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vector2D, Vector2D)> + '_ {
        self.edges
            .iter()
            .map(|&(u, v)| (self.vertices[u].position, self.vertices[v].position))
    }

    /// Arrow heads for every edge, empty for undirected graphs.
    pub fn arrow_heads(&self) -> Vec<[Vector2D; 3]> {
        if !self.directed {
            return Vec::new();
        }
        self.edge_segments()
            .map(|(from, to)| arrow_head(from, to, self.vertex_radius))
            .collect()
    }
}

/// Triangle of an arrow pointing from `from` to `to`: the tip sits on the
/// boundary of the target vertex circle, the two barbs spread by 30 degrees.
pub fn arrow_head(from: Vector2D, to: Vector2D, radius: f64) -> [Vector2D; 3] {
    let delta = to - from;
    let len = delta.norm();
    let dir = if len == 0. {
        Vector2D::new(1., 0.)
    } else {
        delta / len
    };

    let tip = to - dir * radius;
    [
        tip,
        tip - dir.rotate(-FRAC_PI_6) * ARROW_LENGTH,
        tip - dir.rotate(FRAC_PI_6) * ARROW_LENGTH,
    ]
}
