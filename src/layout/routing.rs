use std::cmp::Ordering;

use super::{Link, Node, SankeyGraph};

/// Orders each node's links by the breadth of the node at the other end and
/// stacks their bands down the node's faces.
pub(super) fn compute_link_breadths(graph: &mut SankeyGraph) {
    let orders = link_orders(&graph.nodes, &graph.links);
    let SankeyGraph { nodes, links, .. } = graph;

    for (node, (outgoing, incoming)) in nodes.iter_mut().zip(orders) {
        node.source_links = outgoing;
        node.target_links = incoming;

        let mut y = node.y0;
        for &idx in &node.source_links {
            let link = &mut links[idx];
            link.y0 = y + link.width / 2.0;
            y += link.width;
        }
        let mut y = node.y0;
        for &idx in &node.target_links {
            let link = &mut links[idx];
            link.y1 = y + link.width / 2.0;
            y += link.width;
        }
    }
}

fn link_orders(nodes: &[Node], links: &[Link]) -> Vec<(Vec<usize>, Vec<usize>)> {
    nodes
        .iter()
        .map(|node| {
            let mut outgoing = node.source_links.clone();
            outgoing.sort_by(|&a, &b| by_breadth(nodes, &links[a], &links[b], |l| l.target));
            let mut incoming = node.target_links.clone();
            incoming.sort_by(|&a, &b| by_breadth(nodes, &links[a], &links[b], |l| l.source));
            (outgoing, incoming)
        })
        .collect()
}

fn by_breadth(nodes: &[Node], a: &Link, b: &Link, end: impl Fn(&Link) -> usize) -> Ordering {
    nodes[end(a)]
        .y0
        .total_cmp(&nodes[end(b)].y0)
        .then_with(|| a.index.cmp(&b.index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::SankeyInput;
    use crate::layout::{compute_node_links, key_by_name};

    // s fans out to a, b, c; the targets are stacked bottom to top.
    fn fan() -> SankeyGraph {
        let mut input = SankeyInput::new();
        input.link("s", "a", 1.0).link("s", "b", 2.0).link("s", "c", 3.0);
        let mut graph = compute_node_links(input.nodes, input.links, key_by_name).unwrap();
        for (idx, y0) in [(0, 10.0), (1, 80.0), (2, 40.0), (3, 0.0)] {
            graph.nodes[idx].y0 = y0;
            graph.nodes[idx].y1 = y0 + 6.0;
        }
        for link in &mut graph.links {
            link.width = link.value;
        }
        graph
    }

    #[test]
    fn outgoing_links_follow_target_order() {
        let mut graph = fan();
        compute_link_breadths(&mut graph);
        assert_eq!(graph.nodes[0].source_links, vec![2, 1, 0]);
        // Bands stack from the top of `s` at 10: c 10..13, b 13..15, a 15..16.
        assert_eq!(graph.links[2].y0, 11.5);
        assert_eq!(graph.links[1].y0, 14.0);
        assert_eq!(graph.links[0].y0, 15.5);
        // Each target has a single incoming link centered in its own top band.
        assert_eq!(graph.links[0].y1, 80.5);
        assert_eq!(graph.links[2].y1, 1.5);
    }

    #[test]
    fn ties_keep_link_order() {
        let mut graph = fan();
        for idx in 1..4 {
            graph.nodes[idx].y0 = 0.0;
        }
        compute_link_breadths(&mut graph);
        assert_eq!(graph.nodes[0].source_links, vec![0, 1, 2]);
    }

    #[test]
    fn rerouting_is_idempotent() {
        let mut graph = fan();
        compute_link_breadths(&mut graph);
        let first = graph.links.clone();
        compute_link_breadths(&mut graph);
        assert_eq!(graph.links, first);
    }
}
