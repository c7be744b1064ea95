use super::{Extent, SankeyGraph};

const ALPHA_DECAY: f64 = 0.99;

/// Vertical placement: proportional stacking, then `iterations` rounds of
/// barycenter relaxation, each pass followed by collision resolution.
pub(super) fn compute_node_breadths(
    graph: &mut SankeyGraph,
    extent: &Extent,
    padding: f64,
    iterations: usize,
) {
    let mut columns = graph.columns();
    if columns.is_empty() {
        graph.ky = 0.0;
        return;
    }

    initialize_node_breadths(graph, &columns, extent, padding);
    resolve_collisions(graph, &mut columns, extent, padding);
    let mut alpha = 1.0;
    for round in 0..iterations {
        alpha *= ALPHA_DECAY;
        relax_right_to_left(graph, &columns, alpha);
        resolve_collisions(graph, &mut columns, extent, padding);
        relax_left_to_right(graph, &columns, alpha);
        resolve_collisions(graph, &mut columns, extent, padding);
        tracing::trace!(round, alpha, "relaxed node breadths");
    }
}

/// Picks the scale of the tightest column and stacks every column from the top.
fn initialize_node_breadths(
    graph: &mut SankeyGraph,
    columns: &[Vec<usize>],
    extent: &Extent,
    padding: f64,
) {
    let ky = columns
        .iter()
        .filter_map(|column| {
            let total: f64 = column.iter().map(|&idx| graph.nodes[idx].value).sum();
            (total > 0.0).then(|| {
                (extent.height() - (column.len() - 1) as f64 * padding) / total
            })
        })
        .fold(f64::INFINITY, f64::min);
    let ky = if ky.is_finite() && ky > 0.0 { ky } else { 0.0 };

    for column in columns {
        let mut y = extent.y0;
        for &idx in column {
            let node = &mut graph.nodes[idx];
            node.y0 = y;
            node.y1 = y + node.value * ky;
            y = node.y1 + padding;
        }
    }
    for link in &mut graph.links {
        link.width = link.value * ky;
    }
    graph.ky = ky;
    tracing::debug!(ky, columns = columns.len(), "initialized node breadths");
}

fn relax_left_to_right(graph: &mut SankeyGraph, columns: &[Vec<usize>], alpha: f64) {
    for column in columns {
        for &idx in column {
            let node = &graph.nodes[idx];
            let Some(center) = weighted_center(graph, &node.target_links, |link| link.source)
            else {
                continue;
            };
            let dy = (center - node.center()) * alpha;
            graph.nodes[idx].shift(dy);
        }
    }
}

fn relax_right_to_left(graph: &mut SankeyGraph, columns: &[Vec<usize>], alpha: f64) {
    for column in columns.iter().rev() {
        for &idx in column {
            let node = &graph.nodes[idx];
            let Some(center) = weighted_center(graph, &node.source_links, |link| link.target)
            else {
                continue;
            };
            let dy = (center - node.center()) * alpha;
            graph.nodes[idx].shift(dy);
        }
    }
}

/// Value-weighted mean center of the nodes at the far end of `links`.
fn weighted_center(
    graph: &SankeyGraph,
    links: &[usize],
    far_end: impl Fn(&super::Link) -> usize,
) -> Option<f64> {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for &idx in links {
        let link = &graph.links[idx];
        weighted += graph.nodes[far_end(link)].center() * link.value;
        total += link.value;
    }
    (total > 0.0).then(|| weighted / total)
}

/// Pushes overlapping nodes down, then pulls an overflowing column back up
/// from the bottom.
fn resolve_collisions(
    graph: &mut SankeyGraph,
    columns: &mut [Vec<usize>],
    extent: &Extent,
    padding: f64,
) {
    for column in columns.iter_mut() {
        column.sort_by(|&a, &b| graph.nodes[a].y0.total_cmp(&graph.nodes[b].y0));

        let mut y = extent.y0;
        for &idx in column.iter() {
            let node = &mut graph.nodes[idx];
            let dy = y - node.y0;
            if dy > 0.0 {
                node.shift(dy);
            }
            y = node.y1 + padding;
        }

        let dy = y - padding - extent.y1;
        let Some(&last) = column.last() else {
            continue;
        };
        if dy > 0.0 {
            let node = &mut graph.nodes[last];
            node.shift(-dy);
            y = node.y0;

            for &idx in column.iter().rev().skip(1) {
                let node = &mut graph.nodes[idx];
                let dy = node.y1 + padding - y;
                if dy > 0.0 {
                    node.shift(-dy);
                }
                y = node.y0;
            }
        }
    }
}
