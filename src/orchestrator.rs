use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadSpectrumComputed, PayloadTopologyRebuilt, PayloadVertexDragEnd,
    PayloadVertexDragStart, PayloadVertexLock, PayloadVertexMove,
};
use crate::{
    error::Result,
    snapshot::{RenderSnapshot, VertexSnapshot},
    spectral::{format_spectrum, SpectralSolver},
    GraphModel, LayoutEngine, SettingsCanvas, SettingsEngine, SettingsSpectrum,
};

/// Decimal places used by [`Orchestrator::spectrum_panel`].
pub const SPECTRUM_PRECISION: usize = 4;

/// Owns a [`LayoutEngine`] and a [`SpectralSolver`] for the same graph and
/// keeps them in sync.
///
/// This is the single entry point for a host: it forwards topology changes to
/// both halves, routes interaction requests to the engine and hands read-only
/// snapshots to a renderer. Everything runs on the caller's thread.
pub struct Orchestrator<R: Rng = StdRng> {
    engine: LayoutEngine<crate::Eades, R>,
    solver: SpectralSolver,
    show_spectrum: bool,

    #[cfg(feature = "events")]
    events_sink: Option<Box<dyn EventSink>>,
}

impl Orchestrator {
    /// Creates an orchestrator whose new vertices are placed from OS entropy.
    pub fn initialize(graph: GraphModel, width: f64, height: f64, vertex_radius: f64) -> Self {
        Self::with_rng(
            graph,
            SettingsCanvas::new(width, height, vertex_radius),
            StdRng::from_os_rng(),
        )
    }
}

impl<R: Rng> Orchestrator<R> {
    pub fn with_rng(graph: GraphModel, canvas: SettingsCanvas, rng: R) -> Self {
        let solver = SpectralSolver::new(&graph);
        Self {
            engine: LayoutEngine::with_rng(graph, canvas, rng),
            solver,
            show_spectrum: false,

            #[cfg(feature = "events")]
            events_sink: None,
        }
    }

    pub fn with_engine_settings(mut self, settings: SettingsEngine) -> Self {
        self.engine = self.engine.with_settings(settings);
        self
    }

    pub fn with_spectrum_settings(mut self, settings: SettingsSpectrum) -> Self {
        self.solver = self.solver.with_settings(settings);
        self
    }

    #[cfg(feature = "events")]
    /// Supply a sink that will receive interaction and lifecycle events.
    /// Works with `crossbeam::channel::Sender<Event>`, closures `Fn(Event)`, or custom implementations.
    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.events_sink = Some(sink);
        self
    }

    /// Replaces the topology. Layout state of surviving vertices is kept, the
    /// cached spectrum is dropped.
    pub fn rebuild(&mut self, graph: GraphModel) {
        #[cfg(feature = "events")]
        let old_n = self.engine.graph().n();

        self.solver.set_graph(&graph);
        self.engine.rebuild(graph);

        #[cfg(feature = "events")]
        self.publish_event(Event::TopologyRebuilt(PayloadTopologyRebuilt {
            old_n,
            new_n: self.engine.graph().n(),
            edges: self.engine.graph().edge_count(),
        }));
    }

    /// Switches arrow rendering. Topology and spectrum are unaffected.
    pub fn set_directed(&mut self, directed: bool) {
        if self.engine.graph().directed() == directed {
            return;
        }
        let graph = self.engine.graph().clone().with_directed(directed);
        self.engine.rebuild(graph);
    }

    /// One animation tick.
    pub fn step(&mut self) {
        self.engine.step();
    }

    pub fn run_iterations(&mut self, k: usize) {
        self.engine.run_iterations(k);
    }

    pub fn set_running(&mut self, running: bool) {
        self.engine.set_running(running);
    }

    pub fn find_vertex_at(&self, x: f64, y: f64) -> Option<usize> {
        self.engine.find_vertex_at(x, y)
    }

    pub fn set_position(&mut self, i: usize, x: f64, y: f64) -> Result<()> {
        self.engine.set_position(i, x, y)?;

        #[cfg(feature = "events")]
        {
            let p = self.engine.vertex(i)?.position;
            self.publish_event(Event::VertexMove(PayloadVertexMove {
                id: i,
                new_pos: p.into(),
            }));
        }
        Ok(())
    }

    pub fn toggle_locked(&mut self, i: usize) -> Result<bool> {
        let locked = self.engine.toggle_locked(i)?;
        debug!("vertex {i} locked: {locked}");

        #[cfg(feature = "events")]
        self.publish_event(Event::VertexLockToggled(PayloadVertexLock { id: i, locked }));
        Ok(locked)
    }

    pub fn set_dragging(&mut self, i: usize, dragging: bool) -> Result<()> {
        #[cfg(feature = "events")]
        let was = self.engine.vertex(i)?.dragging;

        self.engine.set_dragging(i, dragging)?;

        #[cfg(feature = "events")]
        match (was, dragging) {
            (false, true) => {
                self.publish_event(Event::VertexDragStart(PayloadVertexDragStart { id: i }));
            }
            (true, false) => {
                self.publish_event(Event::VertexDragEnd(PayloadVertexDragEnd { id: i }));
            }
            _ => {}
        }
        Ok(())
    }

    /// Ascending eigenvalues of the adjacency matrix. Computed on first
    /// request after a topology change, cached afterwards.
    pub fn compute_spectrum(&mut self) -> &[f64] {
        #[cfg(feature = "events")]
        {
            let before = self.solver.recomputations();
            self.solver.compute();
            if self.solver.recomputations() != before {
                let eigenvalues = self.solver.cache().eigenvalues.clone();
                self.publish_event(Event::SpectrumComputed(PayloadSpectrumComputed {
                    eigenvalues,
                }));
            }
        }
        self.solver.compute()
    }

    pub fn show_spectrum(&self) -> bool {
        self.show_spectrum
    }

    pub fn set_show_spectrum(&mut self, show: bool) {
        self.show_spectrum = show;
    }

    pub fn toggle_show_spectrum(&mut self) -> bool {
        self.show_spectrum = !self.show_spectrum;
        self.show_spectrum
    }

    /// Formatted eigenvalues when the spectrum is shown, `None` otherwise.
    pub fn spectrum_panel(&mut self) -> Option<Vec<String>> {
        if !self.show_spectrum {
            return None;
        }
        Some(format_spectrum(self.compute_spectrum(), SPECTRUM_PRECISION))
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let g = self.engine.graph();
        RenderSnapshot {
            vertices: self
                .engine
                .vertices()
                .iter()
                .enumerate()
                .map(|(i, v)| VertexSnapshot {
                    position: v.position,
                    label: g.label(i),
                    locked: v.locked,
                    dragging: v.dragging,
                })
                .collect(),
            edges: g.edges().to_vec(),
            directed: g.directed(),
            vertex_radius: self.engine.canvas().vertex_radius,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.resize(width, height);
    }

    /// Back to the initial polygon. The spectrum is unaffected.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn engine(&self) -> &LayoutEngine<crate::Eades, R> {
        &self.engine
    }

    pub fn solver(&self) -> &SpectralSolver {
        &self.solver
    }

    pub fn graph(&self) -> &GraphModel {
        self.engine.graph()
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = &self.events_sink {
            sink.send(event);
        }
    }
}
