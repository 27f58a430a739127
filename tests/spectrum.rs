use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use graph_spectra::{
    spectral::{adjacency_spectrum, eigenvalues_in},
    EdgeListImport, GraphImport, GraphModel, Orchestrator, SettingsCanvas, SettingsSpectrum,
    SpectralSolver,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn assert_spectrum(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a, e, epsilon = 1e-5);
    }
}

fn spectrum(g: &GraphModel) -> Vec<f64> {
    SpectralSolver::new(g).compute().to_vec()
}

#[test]
fn empty_graph_has_empty_spectrum() {
    assert!(spectrum(&GraphModel::new(0)).is_empty());
}

#[test]
fn single_edge() {
    let g = GraphModel::from_edges(2, [(0, 1)]).unwrap();
    assert_spectrum(&spectrum(&g), &[-1., 1.]);
}

#[test]
fn six_cycle_has_repeated_eigenvalues() {
    let g = EdgeListImport::default()
        .import("0 1\n1 2\n2 3\n3 4\n4 5\n5 0\n")
        .unwrap();
    assert_spectrum(&spectrum(&g), &[-2., -1., -1., 1., 1., 2.]);
}

#[test]
fn path_matches_closed_form() {
    let n = 7;
    let g = GraphModel::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap();

    let mut expected: Vec<f64> = (1..=n)
        .map(|k| 2. * (PI * k as f64 / (n + 1) as f64).cos())
        .collect();
    expected.sort_by(f64::total_cmp);

    assert_spectrum(&spectrum(&g), &expected);
}

#[test]
fn complete_graph() {
    let n = 5;
    let edges = (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v)));
    let g = GraphModel::from_edges(n, edges).unwrap();
    assert_spectrum(&spectrum(&g), &[-1., -1., -1., -1., 4.]);
}

#[test]
fn direction_does_not_change_spectrum() {
    let g = GraphModel::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
    let directed = g.clone().with_directed(true);
    assert_eq!(spectrum(&g), spectrum(&directed));
}

#[test]
fn random_graphs_have_traceless_sorted_spectra() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1, 3, 9, 16] {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random::<f64>() < 0.35 {
                    edges.push((u, v));
                }
            }
        }
        let g = GraphModel::from_edges(n, edges).unwrap();
        let m = g.edge_count() as f64;
        let eig = spectrum(&g);

        assert_eq!(eig.len(), n);
        assert!(eig.windows(2).all(|w| w[0] <= w[1]), "{eig:?}");
        // trace(A) = 0 and trace(A^2) = 2m
        assert_abs_diff_eq!(eig.iter().sum::<f64>(), 0., epsilon = 1e-4);
        assert_abs_diff_eq!(eig.iter().map(|x| x * x).sum::<f64>(), 2. * m, epsilon = 1e-4);
    }
}

#[test]
fn interval_search_agrees_with_full_spectrum() {
    let g = GraphModel::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap();
    let a = g.adjacency();
    let settings = SettingsSpectrum::default();

    let full = adjacency_spectrum(a.view(), &settings);
    let positive = eigenvalues_in(a.view(), 0.5, 6., &settings);

    assert_spectrum(&positive, &full[3..]);
}

#[test]
fn orchestrator_memoizes_until_rebuild() {
    let g = GraphModel::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    let mut o = Orchestrator::with_rng(
        g,
        SettingsCanvas::default(),
        StdRng::seed_from_u64(0),
    );

    o.compute_spectrum();
    o.compute_spectrum();
    o.run_iterations(5);
    o.toggle_locked(0).unwrap();
    o.set_position(1, 100., 100.).unwrap();
    o.compute_spectrum();
    assert_eq!(o.solver().recomputations(), 1);

    let grown = o.graph().with_vertex(None).with_edge(2, 3).unwrap();
    o.rebuild(grown);
    // path on four vertices, +-golden ratio and +-its inverse
    let phi = (1. + 5f64.sqrt()) / 2.;
    assert_spectrum(o.compute_spectrum(), &[-phi, 1. - phi, phi - 1., phi]);
    assert_eq!(o.solver().recomputations(), 2);
}

#[test]
fn looped_edge_list_keeps_top_eigenvalue() {
    let g = EdgeListImport::default().import("a a\nb b\na b\n").unwrap();
    assert_spectrum(&spectrum(&g), &[0., 2.]);
}
