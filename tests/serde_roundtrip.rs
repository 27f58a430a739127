use graph_spectra::{
    EadesState, GraphModel, Orchestrator, RenderSnapshot, SettingsCanvas, SettingsSimulation,
    VertexState, Vector2D,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_serialize_deserialize_graph_model() {
    let g = GraphModel::from_edges(3, [(0, 1), (1, 2)])
        .expect("valid edges")
        .with_labels(vec!["a".into(), "b".into(), "c".into()])
        .expect("one label per vertex")
        .with_directed(true);

    let json = serde_json::to_string(&g).expect("serialize graph");
    let g2: GraphModel = serde_json::from_str(&json).expect("deserialize graph");

    assert_eq!(g2, g);
    assert_eq!(g2.adjacency(), g.adjacency());
    assert_eq!(g2.label(2), "c");
}

#[test]
fn test_serialize_deserialize_vertex_state() {
    let v = VertexState {
        position: Vector2D::new(2f64.sqrt() * 310., 40. / 3.),
        velocity: Vector2D::new(-1., 0.1 + 0.2),
        locked: true,
        dragging: false,
        paused: true,
    };

    let json = serde_json::to_string(&v).expect("serialize vertex");
    let v2: VertexState = serde_json::from_str(&json).expect("deserialize vertex");

    assert_eq!(v2, v);
    assert!(!v2.is_free());
}

#[test]
fn test_serialize_deserialize_layout_state() {
    let mut state = EadesState::with_params(SettingsSimulation::default().with_damping(0.5));
    state.step_count = 17;
    state.last_avg_displacement = Some(0.75);

    let json = serde_json::to_string(&state).expect("serialize state");
    let state2: EadesState = serde_json::from_str(&json).expect("deserialize state");

    assert_eq!(state2.params, state.params);
    assert_eq!(state2.step_count, 17);
    assert_eq!(state2.last_avg_displacement, Some(0.75));
    assert!(state2.is_running);
}

#[test]
fn test_serialize_deserialize_snapshot() {
    let g = GraphModel::from_edges(4, [(0, 1), (1, 2), (2, 3)]).expect("valid edges");
    let mut o = Orchestrator::with_rng(
        g,
        SettingsCanvas::new(640., 480., 12.),
        StdRng::seed_from_u64(11),
    );
    o.run_iterations(10);

    let snap = o.snapshot();
    let json = serde_json::to_string(&snap).expect("serialize snapshot");
    let snap2: RenderSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");

    assert_eq!(snap2, snap);
    assert_eq!(snap2.vertices.len(), 4);
}
