use std::time::Duration;

use instant::Instant;
use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::bisection::adjacency_spectrum;
use crate::{GraphModel, SettingsSpectrum};

/// Last computed spectrum and whether it still matches the matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectrumCache {
    /// Ascending, with multiplicity.
    pub eigenvalues: Vec<f64>,
    pub valid: bool,
}

/// Memoized eigenvalue solver for the adjacency matrix of the current graph.
///
/// [`SpectralSolver::compute`] runs the inertia bisection only when the cache
/// is invalid. Any topology change has to go through
/// [`SpectralSolver::set_graph`], which invalidates it.
#[derive(Debug, Clone, Default)]
pub struct SpectralSolver {
    matrix: Array2<f64>,
    settings: SettingsSpectrum,
    cache: SpectrumCache,

    recomputations: u64,
    last_duration: Option<Duration>,
}

impl SpectralSolver {
    pub fn new(g: &GraphModel) -> Self {
        Self {
            matrix: g.adjacency(),
            ..Default::default()
        }
    }

    pub fn with_settings(mut self, settings: SettingsSpectrum) -> Self {
        self.settings = settings;
        self.invalidate();
        self
    }

    /// Adopts the adjacency matrix of `g` and drops the cached spectrum.
    pub fn set_graph(&mut self, g: &GraphModel) {
        self.matrix = g.adjacency();
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.cache.valid = false;
    }

    /// Ascending eigenvalues of the adjacency matrix, with multiplicity.
    pub fn compute(&mut self) -> &[f64] {
        if !self.cache.valid {
            debug!("computing spectrum of {} vertices", self.matrix.nrows());
            let started = Instant::now();

            self.cache.eigenvalues = adjacency_spectrum(self.matrix.view(), &self.settings);
            self.cache.valid = true;

            self.recomputations += 1;
            self.last_duration = Some(started.elapsed());
        }
        &self.cache.eigenvalues
    }

    pub fn cache(&self) -> &SpectrumCache {
        &self.cache
    }

    pub fn is_valid(&self) -> bool {
        self.cache.valid
    }

    /// How many times the spectrum was actually derived from the matrix.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Wall time of the last recomputation.
    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }
}

/// Fixed-point rendering of a spectrum, one string per eigenvalue.
pub fn format_spectrum(eigenvalues: &[f64], precision: usize) -> Vec<String> {
    eigenvalues
        .iter()
        .map(|&v| {
            let s = format!("{v:.precision$}");
            // tiny negative values would print as "-0.0000"
            match s.strip_prefix('-') {
                Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
                _ => s,
            }
        })
        .collect()
}
