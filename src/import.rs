use std::collections::HashMap;

use log::warn;

use crate::{
    error::{Error, Result},
    GraphModel,
};

/// Abstraction for importing a graph from text.
pub trait GraphImport {
    /// Import a graph from the given text.
    fn import(&self, text: &str) -> Result<GraphModel>;
}

/// Vertex labels in order of first appearance.
#[derive(Debug, Default)]
struct LabelIndex {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelIndex {
    fn get_or_insert(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), i);
        i
    }

    fn into_graph(self, edges: Vec<(usize, usize)>, directed: bool) -> Result<GraphModel> {
        let n = self.labels.len();
        Ok(GraphModel::from_edges(n, edges)?
            .with_labels(self.labels)?
            .with_directed(directed))
    }
}

/// Plain text edge list.
///
/// One entry per non-blank line: a single token declares a vertex, two
/// whitespace separated tokens declare an edge between them. Vertices get
/// indices in order of first appearance and keep their token as label.
/// Lines with more tokens are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListImport {
    pub directed: bool,
}

impl GraphImport for EdgeListImport {
    fn import(&self, text: &str) -> Result<GraphModel> {
        let mut vertices = LabelIndex::default();
        let mut edges = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let parts: Vec<_> = line.split_whitespace().collect();
            match parts.as_slice() {
                [] => {}
                [v] => {
                    vertices.get_or_insert(v);
                }
                [u, v] => {
                    let u = vertices.get_or_insert(u);
                    let v = vertices.get_or_insert(v);
                    edges.push((u, v));
                }
                _ => warn!(
                    "skipping line {}: expected 1 or 2 tokens, got {}",
                    line_no + 1,
                    parts.len()
                ),
            }
        }

        vertices.into_graph(edges, self.directed)
    }
}

/// Default JSON importer: accepts two minimal forms:
/// 1) Edges-only array of pairs: [[a,b],[c,d],...]
/// 2) Object: {"nodes":[id...], "edges":[[a,b], ...], "directed": bool}
///
/// Ids are integers, self loops are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMinimalImport;

#[derive(serde::Deserialize)]
struct JsonGraphMinimal {
    #[serde(default)]
    nodes: Vec<i64>,
    #[serde(default)]
    edges: Vec<(i64, i64)>,
    #[serde(default)]
    directed: Option<bool>,
}

impl GraphImport for JsonMinimalImport {
    fn import(&self, text: &str) -> Result<GraphModel> {
        // Parse JSON value first to support either array or object forms.
        let v: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| Error::Import(format!("invalid json: {e}")))?;

        let parsed: JsonGraphMinimal = if v.is_array() {
            let edges = serde_json::from_value(v)
                .map_err(|e| Error::Import(format!("edge must be [a,b] of integers: {e}")))?;
            JsonGraphMinimal {
                nodes: Vec::new(),
                edges,
                directed: Some(true),
            }
        } else {
            serde_json::from_value(v).map_err(|e| Error::Import(format!("schema error: {e}")))?
        };

        let mut vertices = LabelIndex::default();
        for id in &parsed.nodes {
            vertices.get_or_insert(&id.to_string());
        }
        let mut edges = Vec::with_capacity(parsed.edges.len());
        for (a, b) in parsed.edges {
            let a = vertices.get_or_insert(&a.to_string());
            let b = vertices.get_or_insert(&b.to_string());
            if a != b {
                edges.push((a, b));
            }
        }

        vertices.into_graph(edges, parsed.directed.unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_list_assigns_indices_by_first_appearance() {
        let g = EdgeListImport::default()
            .import("b a\n\n  c  \na c\nx y z\n")
            .unwrap();

        assert_eq!(g.labels(), &["b", "a", "c"]);
        assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
        assert!(!g.directed());
    }

    #[test]
    fn edge_list_cycle() {
        let g = EdgeListImport { directed: true }
            .import("0 1\n1 2\n2 3\n3 4\n4 5\n5 0")
            .unwrap();
        assert_eq!(g.n(), 6);
        assert_eq!(g.edge_count(), 6);
        assert!(g.directed());
    }

    #[test]
    fn empty_text_is_empty_graph() {
        let g = EdgeListImport::default().import("   \n\n").unwrap();
        assert_eq!(g.n(), 0);
    }

    #[test]
    fn json_edges_only() {
        let g = JsonMinimalImport.import("[[1, 2], [2, 3], [3, 3]]").unwrap();
        assert_eq!(g.n(), 3);
        assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
        assert!(g.directed());
    }

    #[test]
    fn json_object_with_isolated_nodes() {
        let g = JsonMinimalImport
            .import(r#"{"nodes":[10, 20, 30], "edges":[[30, 10]], "directed": false}"#)
            .unwrap();
        assert_eq!(g.labels(), &["10", "20", "30"]);
        assert_eq!(g.edges(), &[(2, 0)]);
        assert!(!g.directed());
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            JsonMinimalImport.import("{not json"),
            Err(Error::Import(_))
        ));
        assert!(matches!(
            JsonMinimalImport.import("[[1, 2, 3]]"),
            Err(Error::Import(_))
        ));
    }
}
