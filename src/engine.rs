use log::debug;
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    elements::VertexState,
    error::{Error, Result},
    layouts::{circular, random, AnimatedState, Eades, ForceAlgorithm},
    GraphModel, SettingsCanvas, SettingsEngine, Vector2D,
};

/// Owns per-vertex layout state for the current [`GraphModel`] and runs the
/// force-directed simulation on it.
///
/// Vertex state is a flat vector indexed like the graph's vertices. It is
/// always exactly `graph.n()` long, [`LayoutEngine::rebuild`] migrates it when
/// the topology changes.
///
/// The random source used for placing new vertices is injected, pass a seeded
/// generator through [`LayoutEngine::with_rng`] for reproducible layouts.
#[derive(Debug)]
pub struct LayoutEngine<A = Eades, R = StdRng>
where
    A: ForceAlgorithm,
    R: Rng,
{
    graph: GraphModel,
    adjacency: Array2<f64>,
    vertices: Vec<VertexState>,

    canvas: SettingsCanvas,
    settings: SettingsEngine,

    alg: A,
    rng: R,
}

impl LayoutEngine {
    /// Creates an engine seeded from the operating system.
    pub fn new(graph: GraphModel, canvas: SettingsCanvas) -> Self {
        Self::with_rng(graph, canvas, StdRng::from_os_rng())
    }
}

impl<A, R> LayoutEngine<A, R>
where
    A: ForceAlgorithm,
    R: Rng,
{
    /// Creates an engine with vertices placed on the initial polygon.
    pub fn with_rng(graph: GraphModel, canvas: SettingsCanvas, rng: R) -> Self {
        let mut engine = Self {
            adjacency: graph.adjacency(),
            graph,
            vertices: Vec::new(),
            canvas,
            settings: SettingsEngine::default(),
            alg: A::default(),
            rng,
        };
        engine.reset();
        engine
    }

    pub fn with_settings(mut self, settings: SettingsEngine) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_algorithm(mut self, alg: A) -> Self {
        self.alg = alg;
        self
    }

    /// Places every vertex on the initial polygon and clears velocities and flags.
    pub fn reset(&mut self) {
        self.vertices = circular::polygon(&self.canvas, self.graph.n())
            .into_iter()
            .map(VertexState::new)
            .collect();
    }

    /// Adopts `graph` as the current topology.
    ///
    /// Vertices below the previous vertex count keep their state verbatim, new
    /// vertices spawn at a random point near the canvas center with zero
    /// velocity and cleared flags. Trailing state is dropped when the vertex
    /// count shrinks.
    pub fn rebuild(&mut self, graph: GraphModel) {
        let old_n = self.vertices.len();
        let new_n = graph.n();
        debug!("rebuilding layout: {old_n} -> {new_n} vertices");

        self.vertices.truncate(new_n);
        let center = self.canvas.center();
        let radius = self.canvas.min_side() * self.settings.spawn_radius_factor;
        for _ in old_n..new_n {
            let p = random::point_in_disk(&mut self.rng, center, radius);
            self.vertices.push(VertexState::new(p));
        }

        self.adjacency = graph.adjacency();
        self.graph = graph;
    }

    /// One animation tick: runs the configured number of iterations unless
    /// the simulation is stopped.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }
        self.run_iterations(self.settings.iterations_per_step);
    }

    /// Runs `k` synchronous force iterations, also when the simulation is stopped.
    pub fn run_iterations(&mut self, k: usize) {
        if self.vertices.is_empty() {
            return;
        }
        for _ in 0..k {
            self.alg.step(
                &self.graph,
                self.adjacency.view(),
                &mut self.vertices,
                &self.canvas,
            );
        }
    }

    /// Moves vertex `i` to the clamped point and stops it.
    pub fn set_position(&mut self, i: usize, x: f64, y: f64) -> Result<()> {
        let p = self.canvas.clamp_inside(Vector2D::new(x, y), false);
        let v = self.vertex_mut(i)?;
        v.position = p;
        v.velocity = Vector2D::ZERO;
        Ok(())
    }

    /// Flips the locked flag of vertex `i` and returns the new value. A vertex
    /// that becomes locked is pulled into the tighter locked bounds.
    pub fn toggle_locked(&mut self, i: usize) -> Result<bool> {
        let canvas = self.canvas;
        let v = self.vertex_mut(i)?;
        v.locked = !v.locked;
        if v.locked && !v.dragging {
            v.position = canvas.clamp_inside(v.position, true);
        }
        Ok(v.locked)
    }

    pub fn set_dragging(&mut self, i: usize, dragging: bool) -> Result<()> {
        self.vertex_mut(i)?.dragging = dragging;
        Ok(())
    }

    pub fn set_paused(&mut self, i: usize, paused: bool) -> Result<()> {
        self.vertex_mut(i)?.paused = paused;
        Ok(())
    }

    /// Topmost vertex whose center is closer than the vertex radius to `(x, y)`.
    /// Later vertices are drawn on top, so the scan runs from the last index.
    pub fn find_vertex_at(&self, x: f64, y: f64) -> Option<usize> {
        let p = Vector2D::new(x, y);
        self.vertices
            .iter()
            .rposition(|v| p.distance(v.position) < self.canvas.vertex_radius)
    }

    /// Changes the canvas size and pulls every free vertex back inside it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas = self.canvas.with_size(width, height);
        for v in self.vertices.iter_mut().filter(|v| !v.dragging) {
            v.position = self.canvas.clamp_inside(v.position, v.locked);
        }
    }

    pub fn vertex(&self, i: usize) -> Result<&VertexState> {
        let len = self.vertices.len();
        self.vertices
            .get(i)
            .ok_or(Error::VertexOutOfRange { index: i, len })
    }

    fn vertex_mut(&mut self, i: usize) -> Result<&mut VertexState> {
        let len = self.vertices.len();
        self.vertices
            .get_mut(i)
            .ok_or(Error::VertexOutOfRange { index: i, len })
    }

    pub fn vertices(&self) -> &[VertexState] {
        &self.vertices
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector2D> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn canvas(&self) -> &SettingsCanvas {
        &self.canvas
    }

    pub fn settings(&self) -> &SettingsEngine {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.alg.state().is_running()
    }

    pub fn set_running(&mut self, running: bool) {
        self.alg.state_mut().set_running(running);
    }

    /// Total number of force iterations run so far.
    pub fn step_count(&self) -> u64 {
        self.alg.state().step_count()
    }

    pub fn last_avg_displacement(&self) -> Option<f64> {
        self.alg.state().last_avg_displacement()
    }

    pub fn algorithm(&self) -> &A {
        &self.alg
    }
}
