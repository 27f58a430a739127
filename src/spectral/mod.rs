//! Eigenvalues of the symmetric adjacency matrix by inertia bisection.
//!
//! For a shift `m` the numbers of negative, zero and positive diagonal
//! entries of any congruent diagonal form of `A - mI` equal the numbers of
//! eigenvalues of `A` below, at and above `m`. Bisecting `[-(n + 1), n + 1)`
//! with these counts isolates every eigenvalue without computing eigenvectors.

mod bisection;
mod inertia;
mod solver;

pub use bisection::{adjacency_spectrum, eigenvalues_in};
pub use inertia::{inertia, Inertia};
pub use solver::{format_spectrum, SpectralSolver, SpectrumCache};
