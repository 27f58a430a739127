mod elements;
mod engine;
mod error;
mod graph;
mod import;
mod orchestrator;
mod settings;
mod snapshot;
mod vector;

pub mod layouts;
pub mod spectral;

pub use self::elements::VertexState;
pub use self::engine::LayoutEngine;
pub use self::error::{Error, Result};
pub use self::graph::{from_stable_graph, GraphModel};
pub use self::import::{EdgeListImport, GraphImport, JsonMinimalImport};
pub use self::layouts::{AnimatedState, Eades, EadesState, ForceAlgorithm, LayoutState};
pub use self::orchestrator::{Orchestrator, SPECTRUM_PRECISION};
pub use self::settings::{SettingsCanvas, SettingsEngine, SettingsSimulation, SettingsSpectrum};
pub use self::snapshot::{arrow_head, RenderSnapshot, VertexSnapshot};
pub use self::spectral::{format_spectrum, SpectralSolver};
pub use self::vector::Vector2D;

#[cfg(feature = "events")]
pub mod events;
