//! The graph abstraction the Pregel driver operates on: a vertex relation
//! and an edge relation under a canonical column-naming scheme.

pub mod constants;
mod graph;

pub use graph::Graph;

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn chain_graph() -> Graph {
        let nodes = df! {
            "id" => [1i64, 2, 3, 4, 5],
        }
        .unwrap()
        .lazy();
        let edges = df! {
            "src" => [1i64, 2, 3, 4],
            "dst" => [2i64, 3, 4, 5],
        }
        .unwrap()
        .lazy();
        Graph::new(nodes, edges, false, "id", "src", "dst", None).unwrap()
    }

    #[test]
    fn renames_to_canonical_columns() {
        let g = chain_graph();
        let schema = g.nodes().collect_schema().unwrap();
        assert!(schema.get(constants::ID).is_some());
        let schema = g.edges().collect_schema().unwrap();
        assert!(schema.get(constants::SRC).is_some());
        assert!(schema.get(constants::DST).is_some());
    }

    #[test]
    fn counts_nodes_and_edges() {
        let g = chain_graph();
        assert_eq!(g.num_nodes().unwrap(), 5);
        assert_eq!(g.num_edges().unwrap(), 4);
    }

    #[test]
    fn rejects_missing_id_column() {
        let nodes = df! { "node_id" => [1i64, 2] }.unwrap().lazy();
        let edges = df! { "src" => [1i64], "dst" => [2i64] }.unwrap().lazy();
        let err = Graph::new(nodes, edges, false, "id", "src", "dst", None).unwrap_err();
        assert!(matches!(err, crate::errors::SchemaError::MissingColumn(_)));
    }

    #[test]
    fn set_directed_is_builder_style() {
        let g = chain_graph().set_directed(true);
        assert!(g.directed());
    }
}
