use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadVertexLock {
    pub id: usize,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadVertexDragStart {
    pub id: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadVertexDragEnd {
    pub id: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadVertexMove {
    pub id: usize,
    pub new_pos: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadTopologyRebuilt {
    pub old_n: usize,
    pub new_n: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSpectrumComputed {
    pub eigenvalues: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    VertexLockToggled(PayloadVertexLock),
    VertexDragStart(PayloadVertexDragStart),
    VertexDragEnd(PayloadVertexDragEnd),
    VertexMove(PayloadVertexMove),
    TopologyRebuilt(PayloadTopologyRebuilt),
    SpectrumComputed(PayloadSpectrumComputed),
}
