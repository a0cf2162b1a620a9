//! Structural checks over a finished maze
//!
//! Open cells (anything but walls) become nodes of an undirected graph, with
//! edges between orthogonally adjacent open cells.

use std::collections::HashMap;

use itertools::Itertools;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::grid::{Cell, Grid, Position};

/// Summary of a maze layout
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MazeStats {
    /// Cells that are not walls
    pub open_cells: usize,
    /// Open cells with a single open neighbour, endpoints excluded
    pub dead_ends: usize,
    /// Steps on the shortest way from start to end, if connected
    pub shortest_path: Option<usize>,
}

impl MazeStats {
    /// Print report
    pub fn print_report(&self) {
        println!("Open cells: {}", self.open_cells);
        println!("Dead ends: {}", self.dead_ends);
        match self.shortest_path {
            Some(steps) => println!("The shortest path is {steps} steps."),
            None => println!("The end cannot be reached from the start."),
        }
    }
}

/// Analyze the grid
pub fn analyze(grid: &Grid) -> MazeStats {
    let (graph, nodes) = build_graph(grid);

    let dead_ends = graph
        .node_indices()
        .filter(|n| graph.neighbors(*n).count() == 1)
        .filter(|n| matches!(grid[graph[*n]], Cell::Path))
        .count();

    let shortest_path = grid
        .find(Cell::Start)
        .zip(grid.find(Cell::End))
        .and_then(|(start, end)| {
            let (a, b) = (nodes[&start], nodes[&end]);
            dijkstra(&graph, a, Some(b), |_| 1usize).get(&b).copied()
        });

    MazeStats {
        open_cells: graph.node_count(),
        dead_ends,
        shortest_path,
    }
}

/// Whether any 2x2 block consists of open cells only
pub fn has_open_block(grid: &Grid) -> bool {
    grid.iter_rows().tuple_windows().any(|(upper, lower)| {
        upper
            .iter()
            .zip(lower)
            .tuple_windows()
            .any(|((a, b), (c, d))| [a, b, c, d].iter().all(|cell| cell.is_open()))
    })
}

/// Graph of open cells; node weights are the cell positions
fn build_graph(
    grid: &Grid,
) -> (
    Graph<Position, (), Undirected>,
    HashMap<Position, NodeIndex>,
) {
    let mut graph = Graph::new_undirected();
    let mut nodes = HashMap::new();

    for (pos, cell) in grid.cells() {
        if cell.is_open() {
            nodes.insert(pos, graph.add_node(pos));
        }
    }
    // Only right and down, because graph is undirected
    for (&pos, &node_a) in &nodes {
        let right = Position::new(pos.row, pos.col + 1);
        let down = Position::new(pos.row + 1, pos.col);
        for neighbour in [right, down] {
            if let Some(&node_b) = nodes.get(&neighbour) {
                graph.add_edge(node_a, node_b, ());
            }
        }
    }
    (graph, nodes)
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyze, has_open_block, MazeStats};
    use crate::render::parse;

    #[test]
    fn stats_of_small_maze() {
        let text = concat!(
            "  ■  ■  ■  ■  ■  ■\n",
            "  ■           E  ■\n",
            "  ■     ■     ■  ■\n",
            "  ■  S  ■  ■  ■  ■\n",
            "  ■  ■  ■  ■  ■  ■\n",
        );
        let stats = analyze(&parse(text).unwrap());
        assert_eq!(
            stats,
            MazeStats {
                open_cells: 7,
                dead_ends: 1,
                shortest_path: Some(5),
            }
        );
    }

    #[test]
    fn disconnected_end() {
        let text = concat!(
            "  ■  ■  ■  ■  ■\n",
            "  ■  S  ■  E  ■\n",
            "  ■  ■  ■  ■  ■\n",
        );
        let stats = analyze(&parse(text).unwrap());
        assert_eq!(stats.open_cells, 2);
        assert_eq!(stats.shortest_path, None);
    }

    #[test]
    fn detects_open_block() {
        let open = concat!(
            "  ■  ■  ■  ■\n",
            "  ■  S     ■\n",
            "  ■     E  ■\n",
            "  ■  ■  ■  ■\n",
        );
        assert!(has_open_block(&parse(open).unwrap()));

        let closed = concat!(
            "  ■  ■  ■  ■\n",
            "  ■  S     ■\n",
            "  ■  ■  E  ■\n",
            "  ■  ■  ■  ■\n",
        );
        assert!(!has_open_block(&parse(closed).unwrap()));
    }
}
