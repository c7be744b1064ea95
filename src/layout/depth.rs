use super::align::AlignFn;
use super::error::{LayoutError, Result};
use super::{Extent, SankeyGraph};

/// Layers the graph and maps each node to its column band.
///
/// Returns the number of columns.
pub(super) fn compute_node_depths(
    graph: &mut SankeyGraph,
    align: &AlignFn,
    extent: &Extent,
    node_width: f64,
) -> Result<usize> {
    if graph.nodes.is_empty() {
        graph.levels = 0;
        return Ok(0);
    }

    let levels = sweep(graph, Direction::Forward)?;
    sweep(graph, Direction::Backward)?;

    // A lone `xPos: 0` pin does not replace the layered level count.
    let max_fixed = graph.nodes.iter().filter_map(|node| node.fixed_column()).max();
    let levels = match max_fixed {
        Some(fixed) if fixed > 0 => fixed + 1,
        _ => levels,
    };
    let last = (levels - 1) as f64;
    let kx = if levels > 1 {
        (extent.width() - node_width) / last
    } else {
        0.0
    };

    let view: &SankeyGraph = graph;
    let columns: Vec<usize> = view
        .nodes
        .iter()
        .map(|node| match node.fixed_column() {
            Some(fixed) if fixed > 0 => fixed.min(levels - 1),
            _ => align(view, node, levels).floor().clamp(0.0, last) as usize,
        })
        .collect();
    for (node, column) in graph.nodes.iter_mut().zip(columns) {
        node.column = column;
        node.x0 = extent.x0 + column as f64 * kx;
        node.x1 = node.x0 + node_width;
    }

    graph.levels = levels;
    tracing::debug!(levels, kx, "assigned node depths");
    Ok(levels)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Frontier sweep along outgoing (forward) or incoming (backward) links.
///
/// Every node starts in the first frontier; a node keeps the last level it
/// was seen at, which is its longest distance from the sources (or sinks).
fn sweep(graph: &mut SankeyGraph, direction: Direction) -> Result<usize> {
    let count = graph.nodes.len();
    let mut current: Vec<usize> = (0..count).collect();
    let mut level = 0;
    while !current.is_empty() {
        if level == count {
            return Err(LayoutError::CircularLink);
        }
        let mut seen = vec![false; count];
        let mut next = Vec::new();
        for &idx in &current {
            let node = &mut graph.nodes[idx];
            match direction {
                Direction::Forward => match node.fixed_column() {
                    Some(fixed) if level == 0 => node.depth = fixed,
                    Some(_) => {
                        tracing::warn!(node = %node.key, level, "pinned node out of range");
                    }
                    None => node.depth = level,
                },
                Direction::Backward => node.height = level,
            }

            let node = &graph.nodes[idx];
            let neighbors = match direction {
                Direction::Forward => &node.source_links,
                Direction::Backward => &node.target_links,
            };
            for &link_idx in neighbors {
                let link = &graph.links[link_idx];
                let other = match direction {
                    Direction::Forward => link.target,
                    Direction::Backward => link.source,
                };
                if !seen[other] {
                    seen[other] = true;
                    next.push(other);
                }
            }
        }
        current = next;
        level += 1;
    }
    Ok(level)
}
