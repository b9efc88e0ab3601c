use std::f64::consts::PI;

use crate::types::Position;
use crate::InteractionGraph;

/// Position the nodes evenly on the unit circle.
///
/// The result is indexed by node ID. Node `i` of `n` is placed at the angle
/// `2π·i/n`, starting on the positive x-axis and going counter-clockwise. A
/// graph with a single node has it at the center.
pub fn circular_layout(graph: &InteractionGraph) -> Vec<Position> {
    let n = graph.node_count();
    if n == 1 {
        return vec![Position::default()];
    }
    (0..n)
        .map(|i| {
            let theta = 2.0 * PI * (i as f64) / (n as f64);
            Position {
                x: theta.cos(),
                y: theta.sin(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example_graphs::create_simulation_graph;

    fn assert_close(expected: (f64, f64), actual: Position) {
        assert!(
            (expected.0 - actual.x).abs() < 1e-9 && (expected.1 - actual.y).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn empty_graph() {
        assert!(circular_layout(&InteractionGraph::new()).is_empty());
    }

    #[test]
    fn single_node_in_center() {
        let mut g = InteractionGraph::new();
        g.add_node("alone");
        assert_eq!(vec![Position { x: 0.0, y: 0.0 }], circular_layout(&g));
    }

    #[test]
    fn four_nodes_on_axes() {
        let g = create_simulation_graph();
        let pos = circular_layout(&g);
        assert_eq!(4, pos.len());
        assert_close((1.0, 0.0), pos[0]);
        assert_close((0.0, 1.0), pos[1]);
        assert_close((-1.0, 0.0), pos[2]);
        assert_close((0.0, -1.0), pos[3]);
    }

    #[test]
    fn all_nodes_on_unit_circle() {
        let mut g = InteractionGraph::new();
        for i in 0..17 {
            g.add_node(&format!("n{}", i));
        }
        for p in circular_layout(&g) {
            assert!(((p.x * p.x + p.y * p.y) - 1.0).abs() < 1e-9);
        }
    }
}
