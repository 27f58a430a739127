use log::trace;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use super::algorithm::ForceAlgorithm;
use crate::{
    elements::VertexState,
    layouts::{AnimatedState, LayoutState},
    GraphModel, SettingsCanvas, SettingsSimulation, Vector2D,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EadesState {
    pub is_running: bool,
    pub params: SettingsSimulation,
    pub step_count: u64,
    pub last_avg_displacement: Option<f64>,
}

impl LayoutState for EadesState {}

impl Default for EadesState {
    fn default() -> Self {
        EadesState {
            is_running: true,
            params: SettingsSimulation::default(),
            step_count: 0,
            last_avg_displacement: None,
        }
    }
}

impl EadesState {
    pub fn with_params(params: SettingsSimulation) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }
}

impl AnimatedState for EadesState {
    fn is_running(&self) -> bool {
        self.is_running
    }

    fn set_running(&mut self, v: bool) {
        self.is_running = v;
    }

    fn last_avg_displacement(&self) -> Option<f64> {
        self.last_avg_displacement
    }

    fn set_last_avg_displacement(&mut self, v: Option<f64>) {
        self.last_avg_displacement = v;
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn set_step_count(&mut self, v: u64) {
        self.step_count = v;
    }
}

/// Eades spring embedder with acceleration.
///
/// Adjacent vertices are pulled together by a logarithmic spring, every other
/// pair repels with an inverse square law, the four canvas walls push vertices
/// back inside and velocity is damped. Forces are integrated into velocities,
/// velocities into positions.
#[derive(Debug, Default)]
pub struct Eades {
    state: EadesState,
    // Reusable force buffer to avoid per-iteration allocations
    scratch_force: Vec<Vector2D>,
}

impl ForceAlgorithm for Eades {
    type State = EadesState;

    fn from_state(state: Self::State) -> Self {
        Self {
            state,
            scratch_force: Vec::new(),
        }
    }

    fn step(
        &mut self,
        g: &GraphModel,
        adjacency: ArrayView2<'_, f64>,
        vertices: &mut [VertexState],
        canvas: &SettingsCanvas,
    ) {
        if vertices.is_empty() {
            return;
        }

        let params = &self.state.params;
        // All forces are computed from the same snapshot before anything moves.
        self.scratch_force.clear();
        self.scratch_force.resize(vertices.len(), Vector2D::ZERO);

        let rest_length = params.c2 + (g.n() + g.edge_count()) as f64;
        compute_pair_forces(
            adjacency,
            vertices,
            &mut self.scratch_force,
            rest_length,
            params,
        );
        compute_wall_forces(vertices, &mut self.scratch_force, canvas, params);
        compute_damping(vertices, &mut self.scratch_force, params.damping);

        let avg = apply_forces(vertices, &self.scratch_force, canvas, params.c4);

        let step = self.state.step_count() + 1;
        self.state.set_step_count(step);
        self.state.set_last_avg_displacement(Some(avg));
        trace!("eades iteration {step} avg displacement {avg:.4}");
    }

    fn state(&self) -> Self::State {
        self.state.clone()
    }

    fn state_mut(&mut self) -> &mut Self::State {
        &mut self.state
    }
}

/// Springs between adjacent vertices and repulsion between the rest.
pub(crate) fn compute_pair_forces(
    adjacency: ArrayView2<'_, f64>,
    vertices: &[VertexState],
    forces: &mut [Vector2D],
    rest_length: f64,
    params: &SettingsSimulation,
) {
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let delta = vertices[j].position - vertices[i].position;
            let distance = delta.norm().max(params.epsilon);
            let unit = delta / distance;

            // force acting on i, j receives the opposite
            let f = if adjacency[[i, j]] == 0. {
                -unit * (params.c3 / (distance * distance))
            } else {
                unit * (params.c1 * (distance / rest_length).ln())
            };
            forces[i] = forces[i] + f;
            forces[j] = forces[j] - f;
        }
    }
}

/// Inverse square push away from the four canvas borders.
pub(crate) fn compute_wall_forces(
    vertices: &[VertexState],
    forces: &mut [Vector2D],
    canvas: &SettingsCanvas,
    params: &SettingsSimulation,
) {
    for (v, f) in vertices.iter().zip(forces.iter_mut()) {
        let p = v.position;
        let walls = [
            Vector2D::new(0., p.y),
            Vector2D::new(canvas.width, p.y),
            Vector2D::new(p.x, 0.),
            Vector2D::new(p.x, canvas.height),
        ];

        for w in walls {
            let delta = w - p;
            let distance = delta.norm().max(params.epsilon);
            let unit = delta / distance;
            *f = *f - unit * (params.c5 / (distance * distance));
        }
    }
}

pub(crate) fn compute_damping(vertices: &[VertexState], forces: &mut [Vector2D], damping: f64) {
    for (v, f) in vertices.iter().zip(forces.iter_mut()) {
        *f = *f - v.velocity * damping;
    }
}

/// Integrates forces and returns the average displacement over all vertices.
///
/// Dragged vertices ignore forces, locked and dragged vertices end with zero
/// velocity and keep their position.
pub(crate) fn apply_forces(
    vertices: &mut [VertexState],
    forces: &[Vector2D],
    canvas: &SettingsCanvas,
    c4: f64,
) -> f64 {
    let mut total = 0.;
    for (v, &f) in vertices.iter_mut().zip(forces) {
        if !v.dragging {
            v.velocity = v.velocity + f * c4;
        }
        if !v.is_free() {
            v.velocity = Vector2D::ZERO;
            continue;
        }

        let next = canvas.clamp_inside(v.position + v.velocity, v.locked);
        if !next.is_finite() {
            continue;
        }
        total += next.distance(v.position);
        v.position = next;
    }

    total / vertices.len() as f64
}
