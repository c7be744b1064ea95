//! Built-in column alignment policies.
//!
//! A policy maps a node and the level count to a column. The result is
//! floored and clamped to `0..levels` by the depth stage, so policies may
//! return values outside that range.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Node, SankeyGraph};

pub type AlignFn = Arc<dyn Fn(&SankeyGraph, &Node, usize) -> f64 + Send + Sync>;

/// As far left as the layering allows.
pub fn left(_graph: &SankeyGraph, node: &Node, _levels: usize) -> f64 {
    node.depth as f64
}

/// As far right as the layering allows.
pub fn right(_graph: &SankeyGraph, node: &Node, levels: usize) -> f64 {
    levels as f64 - 1.0 - node.height as f64
}

/// Like `left`, except that sinks are pushed to the last column.
pub fn justify(_graph: &SankeyGraph, node: &Node, levels: usize) -> f64 {
    if node.source_links.is_empty() {
        levels as f64 - 1.0
    } else {
        node.depth as f64
    }
}

/// Like `left`, except that sources sit one column before their nearest target.
pub fn center(graph: &SankeyGraph, node: &Node, _levels: usize) -> f64 {
    if !node.target_links.is_empty() {
        return node.depth as f64;
    }
    node.source_links
        .iter()
        .map(|&idx| graph.target_of(&graph.links[idx]).depth)
        .min()
        .map(|depth| depth as f64 - 1.0)
        .unwrap_or(0.0)
}

/// Names of the built-in policies, for config files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
    #[default]
    Justify,
}

impl Align {
    pub fn policy(self) -> AlignFn {
        match self {
            Align::Left => Arc::new(left),
            Align::Right => Arc::new(right),
            Align::Center => Arc::new(center),
            Align::Justify => Arc::new(justify),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::SankeyInput;
    use crate::layout::Sankey;

    // a -> b -> c, plus a late source x -> c and a short sink a -> y.
    fn graph() -> SankeyGraph {
        let mut input = SankeyInput::new();
        input
            .link("a", "b", 1.0)
            .link("b", "c", 1.0)
            .link("x", "c", 1.0)
            .link("a", "y", 1.0);
        Sankey::by_name().size([100.0, 100.0]).layout(&input).unwrap()
    }

    fn columns(graph: &SankeyGraph, policy: fn(&SankeyGraph, &Node, usize) -> f64) -> Vec<f64> {
        ["a", "b", "c", "x", "y"]
            .iter()
            .map(|name| {
                let node = graph.node(&(*name).into()).unwrap();
                policy(graph, node, graph.levels)
            })
            .collect()
    }

    #[test]
    fn left_uses_depth() {
        assert_eq!(columns(&graph(), left), vec![0.0, 1.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn right_uses_height() {
        assert_eq!(columns(&graph(), right), vec![0.0, 1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn justify_moves_sinks_to_the_end() {
        assert_eq!(columns(&graph(), justify), vec![0.0, 1.0, 2.0, 0.0, 2.0]);
    }

    #[test]
    fn center_moves_sources_next_to_targets() {
        assert_eq!(columns(&graph(), center), vec![0.0, 1.0, 2.0, 1.0, 1.0]);
    }
}
