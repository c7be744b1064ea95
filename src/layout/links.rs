use std::collections::HashMap;

use crate::ir::{Endpoint, LinkInput, NodeInput, NodeKey};

use super::error::{LayoutError, Result};
use super::{Link, Node, SankeyGraph};

/// Builds the graph and wires `source_links` / `target_links`.
///
/// Endpoints given as identifiers are resolved through `node_id`; when two
/// nodes share a key the later one wins.
pub(super) fn compute_node_links(
    nodes: Vec<NodeInput>,
    links: Vec<LinkInput>,
    node_id: impl Fn(&NodeInput, usize) -> NodeKey,
) -> Result<SankeyGraph> {
    let mut graph = SankeyGraph {
        nodes: nodes
            .into_iter()
            .enumerate()
            .map(|(index, data)| {
                let key = node_id(&data, index);
                Node::new(index, key, data)
            })
            .collect(),
        links: Vec::with_capacity(links.len()),
        levels: 0,
        ky: 0.0,
    };

    let node_by_id: HashMap<NodeKey, usize> = graph
        .nodes
        .iter()
        .map(|node| (node.key.clone(), node.index))
        .collect();
    let find = |endpoint: &Endpoint| -> Result<usize> {
        match endpoint {
            Endpoint::Node(idx) if *idx < graph.nodes.len() => Ok(*idx),
            Endpoint::Node(idx) => Err(LayoutError::MissingNode {
                id: NodeKey::Index(*idx),
            }),
            Endpoint::Id(key) => node_by_id
                .get(key)
                .copied()
                .ok_or_else(|| LayoutError::MissingNode { id: key.clone() }),
        }
    };

    let mut resolved = Vec::with_capacity(links.len());
    for (index, link) in links.into_iter().enumerate() {
        let source = find(&link.source)?;
        let target = find(&link.target)?;
        resolved.push(Link {
            index,
            source,
            target,
            value: link.value.max(0.0),
            width: 0.0,
            y0: 0.0,
            y1: 0.0,
            attrs: link.attrs,
        });
    }

    for link in resolved {
        graph.nodes[link.source].source_links.push(link.index);
        graph.nodes[link.target].target_links.push(link.index);
        graph.links.push(link);
    }
    tracing::debug!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "indexed sankey graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::key_by_name;

    fn named(names: &[&str]) -> Vec<NodeInput> {
        names.iter().map(|name| NodeInput::named(name)).collect()
    }

    #[test]
    fn indexes_nodes_and_links_by_position() {
        let links = vec![
            LinkInput::new(NodeKey::Index(0), NodeKey::Index(1), 2.0),
            LinkInput::new(NodeKey::Index(0), NodeKey::Index(2), 1.0),
        ];
        let graph = compute_node_links(named(&["a", "b", "c"]), links, |_, idx| {
            NodeKey::Index(idx)
        })
        .unwrap();
        assert_eq!(graph.nodes[0].source_links, vec![0, 1]);
        assert!(graph.nodes[0].target_links.is_empty());
        assert_eq!(graph.nodes[1].target_links, vec![0]);
        assert_eq!(graph.nodes[2].target_links, vec![1]);
        assert_eq!(graph.links[1].index, 1);
        assert_eq!(graph.links[1].target, 2);
    }

    #[test]
    fn resolves_names_and_direct_references() {
        let links = vec![
            LinkInput::new("a", Endpoint::Node(1), 1.0),
            LinkInput::new(Endpoint::Node(1), "c", 1.0),
        ];
        let graph = compute_node_links(named(&["a", "b", "c"]), links, key_by_name).unwrap();
        assert_eq!((graph.links[0].source, graph.links[0].target), (0, 1));
        assert_eq!((graph.links[1].source, graph.links[1].target), (1, 2));
    }

    #[test]
    fn missing_identifier_is_an_error() {
        let links = vec![LinkInput::new("a", "zed", 1.0)];
        let err = compute_node_links(named(&["a"]), links, key_by_name).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingNode {
                id: NodeKey::from("zed")
            }
        );
        assert_eq!(err.to_string(), "missing: zed");
    }

    #[test]
    fn out_of_range_reference_is_an_error() {
        let links = vec![LinkInput::new(Endpoint::Node(0), Endpoint::Node(5), 1.0)];
        let err = compute_node_links(named(&["a"]), links, |_, idx| NodeKey::Index(idx))
            .unwrap_err();
        assert_eq!(err, LayoutError::MissingNode { id: NodeKey::Index(5) });
    }

    #[test]
    fn duplicate_keys_resolve_to_the_last_node() {
        let links = vec![LinkInput::new("a", "b", 1.0)];
        let graph =
            compute_node_links(named(&["a", "b", "b"]), links, key_by_name).unwrap();
        assert_eq!(graph.links[0].target, 2);
        assert!(graph.nodes[1].target_links.is_empty());
    }

    #[test]
    fn negative_values_are_clamped() {
        let links = vec![LinkInput::new("a", "b", -4.0)];
        let graph = compute_node_links(named(&["a", "b"]), links, key_by_name).unwrap();
        assert_eq!(graph.links[0].value, 0.0);
    }
}
