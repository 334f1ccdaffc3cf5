//! Shortest-route search from entry to exit

use std::collections::VecDeque;

use anyhow::bail;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::grid::{Cell, Grid, Point};

/// Breadth-first shortest-path search over a generated grid.
pub struct PathSolver;

impl PathSolver {
    /// Find the shortest route from `entry` to `exit`.
    ///
    /// Both points are logical cell coordinates; the search itself runs
    /// over single grid steps, so walls and stamp cells block it
    /// naturally. Returns `Ok(Some(route))` with the route in grid
    /// coordinates, inclusive of both the entry and exit positions, or
    /// `Ok(None)` when the exit is unreachable. An unreachable exit is
    /// an expected outcome for imperfect mazes, not an error; only
    /// out-of-range points produce `Err`.
    pub fn solve(grid: &Grid, entry: Point, exit: Point) -> anyhow::Result<Option<Vec<Point>>> {
        for (point, name) in [(entry, "entry"), (exit, "exit")] {
            if point.x >= grid.width() || point.y >= grid.height() {
                bail!(
                    "{} point ({},{}) is outside the {}x{} maze",
                    name,
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                );
            }
        }

        let (graph, nodes) = Self::build_graph(grid);
        let e = entry.to_grid();
        let g = exit.to_grid();
        let (start, goal) = match (nodes[e.y][e.x], nodes[g.y][g.x]) {
            (Some(start), Some(goal)) => (start, goal),
            // Entry or exit buried under a wall or the stamp.
            _ => return Ok(None),
        };

        Ok(Self::breadth_first(&graph, start, goal))
    }

    /// Overlay a found route onto the grid.
    ///
    /// Only Road cells are rewritten, so the entry and exit markers
    /// survive. The overlay is ephemeral: a route is recomputed on
    /// demand and a marked grid should not be solved again.
    pub fn mark_route(grid: &mut Grid, route: &[Point]) {
        for point in route {
            if grid.at(point.x, point.y) == Cell::Road {
                grid.set(point.x, point.y, Cell::Route);
            }
        }
    }

    /// Build the adjacency graph of passable grid cells.
    ///
    /// Node weights are the original `(x, y)` grid coordinates; only
    /// positive-delta neighbors are examined because the graph is
    /// undirected.
    fn build_graph(grid: &Grid) -> (Graph<(usize, usize), (), Undirected>, Vec<Vec<Option<NodeIndex>>>) {
        let w = grid.grid_width();
        let h = grid.grid_height();
        let mut graph = Graph::new_undirected();
        let mut nodes: Vec<Vec<Option<NodeIndex>>> =
            (0..h).map(|_| (0..w).map(|_| None).collect()).collect();

        for y in 0..h {
            for x in 0..w {
                if !Self::passable(grid.at(x, y)) {
                    continue;
                }
                let node_a = Self::get_or_create_node(x, y, &mut nodes, &mut graph);
                for (dx, dy) in [(1, 0), (0, 1)] {
                    let x1 = x + dx;
                    let y1 = y + dy;
                    if x1 < w && y1 < h && Self::passable(grid.at(x1, y1)) {
                        let node_b = Self::get_or_create_node(x1, y1, &mut nodes, &mut graph);
                        graph.add_edge(node_a, node_b, ());
                    }
                }
            }
        }
        (graph, nodes)
    }

    fn passable(cell: Cell) -> bool {
        matches!(cell, Cell::Road | Cell::Entry | Cell::Exit)
    }

    /// Get node index from the `nodes` matrix, or create a new node.
    fn get_or_create_node(
        x: usize,
        y: usize,
        nodes: &mut [Vec<Option<NodeIndex>>],
        graph: &mut Graph<(usize, usize), (), Undirected>,
    ) -> NodeIndex {
        if let Some(node) = nodes[y][x] {
            node
        } else {
            let node = graph.add_node((x, y));
            nodes[y][x] = Some(node);
            node
        }
    }

    /// Breadth-first search with reached-from pointers per node.
    ///
    /// The route is reconstructed by walking the pointers back from the
    /// goal once it is dequeued.
    fn breadth_first(
        graph: &Graph<(usize, usize), (), Undirected>,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> Option<Vec<Point>> {
        let mut reached = vec![false; graph.node_count()];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
        let mut queue = VecDeque::new();

        reached[start.index()] = true;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            if node == goal {
                let mut route = vec![];
                let mut current = Some(node);
                while let Some(n) = current {
                    let (x, y) = graph[n];
                    route.push(Point::new(x, y));
                    current = prev[n.index()];
                }
                route.reverse();
                return Some(route);
            }
            for neighbor in graph.neighbors(node) {
                if !reached[neighbor.index()] {
                    reached[neighbor.index()] = true;
                    prev[neighbor.index()] = Some(node);
                    queue.push_back(neighbor);
                }
            }
        }
        None
    }
}
