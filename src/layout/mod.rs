pub mod align;
mod breadth;
mod depth;
pub(crate) mod error;
mod links;
mod routing;
pub(crate) mod types;
mod values;
pub use error::{LayoutError, Result};
pub use types::*;
use breadth::*;
use depth::*;
use links::*;
use routing::*;
use values::*;

use std::fmt;
use std::sync::Arc;

use crate::config::SankeyConfig;
use crate::ir::{LinkInput, NodeInput, NodeKey, SankeyInput};
use align::{Align, AlignFn};

pub type NodeIdFn = Arc<dyn Fn(&NodeInput, usize) -> NodeKey + Send + Sync>;
pub type NodesFn<T> = Arc<dyn Fn(&T) -> Vec<NodeInput> + Send + Sync>;
pub type LinksFn<T> = Arc<dyn Fn(&T) -> Vec<LinkInput> + Send + Sync>;

/// Keys a node by its position in the input collection.
pub fn key_by_index(_node: &NodeInput, index: usize) -> NodeKey {
    NodeKey::Index(index)
}

/// Keys a node by its `name`, falling back to its position.
pub fn key_by_name(node: &NodeInput, index: usize) -> NodeKey {
    match &node.name {
        Some(name) => NodeKey::Name(name.clone()),
        None => NodeKey::Index(index),
    }
}

/// A configured Sankey layout.
///
/// Setters consume and return the builder; getters are prefixed with `get_`.
pub struct Sankey<T = SankeyInput> {
    extent: Extent,
    node_width: f64,
    node_padding: f64,
    iterations: usize,
    node_id: NodeIdFn,
    align: AlignFn,
    nodes: NodesFn<T>,
    links: LinksFn<T>,
}

impl Sankey<SankeyInput> {
    pub fn new() -> Self {
        Self::with_accessors(|input: &SankeyInput| input.nodes.clone(), |input: &SankeyInput| {
            input.links.clone()
        })
    }

    /// Layout whose links refer to nodes by `name`.
    pub fn by_name() -> Self {
        Self::new().node_id(key_by_name)
    }

    pub fn from_config(config: &SankeyConfig) -> Self {
        Self::new().configure(config)
    }
}

impl Default for Sankey<SankeyInput> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sankey<T> {
    /// Layout over an arbitrary input type, with the given collection accessors.
    pub fn with_accessors(
        nodes: impl Fn(&T) -> Vec<NodeInput> + Send + Sync + 'static,
        links: impl Fn(&T) -> Vec<LinkInput> + Send + Sync + 'static,
    ) -> Self {
        let defaults = SankeyConfig::default();
        Self {
            extent: defaults.extent,
            node_width: defaults.node_width,
            node_padding: defaults.node_padding,
            iterations: defaults.iterations,
            node_id: Arc::new(key_by_index),
            align: defaults.align.policy(),
            nodes: Arc::new(nodes),
            links: Arc::new(links),
        }
    }

    /// Applies every option of `config`, including its named alignment.
    pub fn configure(mut self, config: &SankeyConfig) -> Self {
        self.extent = config.extent;
        self.node_width = config.node_width;
        self.node_padding = config.node_padding;
        self.iterations = config.iterations;
        self.align = config.align.policy();
        self
    }

    pub fn node_id(
        mut self,
        node_id: impl Fn(&NodeInput, usize) -> NodeKey + Send + Sync + 'static,
    ) -> Self {
        self.node_id = Arc::new(node_id);
        self
    }

    pub fn node_align(
        mut self,
        align: impl Fn(&SankeyGraph, &Node, usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.align = Arc::new(align);
        self
    }

    pub fn builtin_align(mut self, align: Align) -> Self {
        self.align = align.policy();
        self
    }

    pub fn node_width(mut self, width: f64) -> Self {
        self.node_width = width;
        self
    }

    pub fn node_padding(mut self, padding: f64) -> Self {
        self.node_padding = padding;
        self
    }

    pub fn nodes(mut self, nodes: impl Fn(&T) -> Vec<NodeInput> + Send + Sync + 'static) -> Self {
        self.nodes = Arc::new(nodes);
        self
    }

    pub fn links(mut self, links: impl Fn(&T) -> Vec<LinkInput> + Send + Sync + 'static) -> Self {
        self.links = Arc::new(links);
        self
    }

    pub fn size(mut self, [width, height]: [f64; 2]) -> Self {
        self.extent = Extent::from_size(width, height);
        self
    }

    pub fn extent(mut self, extent: impl Into<Extent>) -> Self {
        self.extent = extent.into();
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn get_node_id(&self) -> &NodeIdFn {
        &self.node_id
    }

    pub fn get_node_align(&self) -> &AlignFn {
        &self.align
    }

    pub fn get_node_width(&self) -> f64 {
        self.node_width
    }

    pub fn get_node_padding(&self) -> f64 {
        self.node_padding
    }

    pub fn get_nodes(&self) -> &NodesFn<T> {
        &self.nodes
    }

    pub fn get_links(&self) -> &LinksFn<T> {
        &self.links
    }

    pub fn get_size(&self) -> [f64; 2] {
        self.extent.size()
    }

    pub fn get_extent(&self) -> Extent {
        self.extent
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations
    }

    /// Runs every stage on a fresh graph built from `input`.
    pub fn layout(&self, input: &T) -> Result<SankeyGraph> {
        let mut graph =
            compute_node_links((self.nodes)(input), (self.links)(input), self.node_id.as_ref())?;
        compute_node_values(&mut graph);
        compute_node_depths(&mut graph, &self.align, &self.extent, self.node_width)?;
        compute_node_breadths(&mut graph, &self.extent, self.node_padding, self.iterations);
        compute_link_breadths(&mut graph);
        Ok(graph)
    }

    /// Recomputes link order and offsets from the current node positions.
    pub fn update(&self, graph: &mut SankeyGraph) {
        compute_link_breadths(graph);
    }
}

impl<T> Clone for Sankey<T> {
    fn clone(&self) -> Self {
        Self {
            extent: self.extent,
            node_width: self.node_width,
            node_padding: self.node_padding,
            iterations: self.iterations,
            node_id: Arc::clone(&self.node_id),
            align: Arc::clone(&self.align),
            nodes: Arc::clone(&self.nodes),
            links: Arc::clone(&self.links),
        }
    }
}

impl<T> fmt::Debug for Sankey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sankey")
            .field("extent", &self.extent)
            .field("node_width", &self.node_width)
            .field("node_padding", &self.node_padding)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}
