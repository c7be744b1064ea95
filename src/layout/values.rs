use super::SankeyGraph;

/// A node is as tall as the heavier of its two faces.
pub(super) fn compute_node_values(graph: &mut SankeyGraph) {
    let SankeyGraph { nodes, links, .. } = graph;
    for node in nodes.iter_mut() {
        let outgoing: f64 = node.source_links.iter().map(|&idx| links[idx].value).sum();
        let incoming: f64 = node.target_links.iter().map(|&idx| links[idx].value).sum();
        node.value = outgoing.max(incoming);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::SankeyInput;
    use crate::layout::{compute_node_links, key_by_name};

    #[test]
    fn value_is_the_larger_face() {
        let mut input = SankeyInput::new();
        input
            .link("a", "c", 5.0)
            .link("b", "c", 5.0)
            .link("c", "d", 3.0)
            .link("a", "d", 1.0);
        let mut graph = compute_node_links(input.nodes, input.links, key_by_name).unwrap();
        compute_node_values(&mut graph);
        let values: Vec<f64> = graph.nodes.iter().map(|node| node.value).collect();
        assert_eq!(values, vec![6.0, 10.0, 5.0, 4.0]);
    }

    #[test]
    fn isolated_node_has_zero_value() {
        let mut input = SankeyInput::new();
        input.ensure_node("alone");
        let mut graph = compute_node_links(input.nodes, input.links, key_by_name).unwrap();
        compute_node_values(&mut graph);
        assert_eq!(graph.nodes[0].value, 0.0);
    }
}
