use serde::{Deserialize, Serialize};

use crate::Vector2D;

/// Canvas the layout is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsCanvas {
    pub width: f64,
    pub height: f64,

    /// Radius of a drawn vertex. Used for clamping and hit testing.
    pub vertex_radius: f64,
}

impl Default for SettingsCanvas {
    fn default() -> Self {
        Self {
            width: 800.,
            height: 600.,
            vertex_radius: 20.,
        }
    }
}

impl SettingsCanvas {
    pub fn new(width: f64, height: f64, vertex_radius: f64) -> Self {
        Self {
            width,
            height,
            vertex_radius,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vertex_radius(mut self, radius: f64) -> Self {
        self.vertex_radius = radius;
        self
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Restricts `p` to the drawable area. Locked vertices get two extra units
    /// of padding.
    pub fn clamp_inside(&self, p: Vector2D, locked: bool) -> Vector2D {
        let r = self.vertex_radius;
        let pad = if locked { 2. } else { 0. };

        let x = p.x.max(r + 1. + pad).min(self.width - r - 3. - pad);
        let y = p.y.max(r + 1. + pad).min(self.height - r - 3. - pad);

        Vector2D::new(x, y)
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2., self.height / 2.)
    }
}

/// Constants of the Eades spring embedder with acceleration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSimulation {
    /// Spring strength.
    pub c1: f64,
    /// Base of the spring rest length. The vertex and edge counts are added to it.
    pub c2: f64,
    /// Repulsion between non-adjacent vertices.
    pub c3: f64,
    /// Force to velocity factor.
    pub c4: f64,
    /// Wall repulsion.
    pub c5: f64,

    /// Velocity damping coefficient.
    pub damping: f64,
    /// Distance floor.
    pub epsilon: f64,
}

impl Default for SettingsSimulation {
    fn default() -> Self {
        Self {
            c1: 20.,
            c2: 100.,
            c3: 50_000.,
            c4: 0.3,
            c5: 100_000.,
            damping: 0.2,
            epsilon: 1e-6,
        }
    }
}

impl SettingsSimulation {
    pub fn with_spring(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    pub fn with_repulsion(mut self, c3: f64) -> Self {
        self.c3 = c3;
        self
    }

    pub fn with_wall_repulsion(mut self, c5: f64) -> Self {
        self.c5 = c5;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }
}

/// How the engine drives the simulation and grows the vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsEngine {
    /// Iterations run by a single `step` call.
    pub iterations_per_step: usize,

    /// Newly added vertices spawn inside a disk of this fraction of the smaller canvas side.
    pub spawn_radius_factor: f64,
}

impl Default for SettingsEngine {
    fn default() -> Self {
        Self {
            iterations_per_step: 2,
            spawn_radius_factor: 0.12,
        }
    }
}

impl SettingsEngine {
    pub fn with_iterations_per_step(mut self, iterations: usize) -> Self {
        self.iterations_per_step = iterations;
        self
    }

    pub fn with_spawn_radius_factor(mut self, factor: f64) -> Self {
        self.spawn_radius_factor = factor;
        self
    }
}

/// Tolerances of the inertia bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsSpectrum {
    /// Values closer to zero than this are treated as zero pivots.
    pub zero_tolerance: f64,
    /// Intervals narrower than this are emitted as a cluster.
    pub interval_tolerance: f64,
}

impl Default for SettingsSpectrum {
    fn default() -> Self {
        Self {
            zero_tolerance: 1e-9,
            interval_tolerance: 1e-6,
        }
    }
}
