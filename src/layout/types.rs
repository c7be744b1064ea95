use serde::{Deserialize, Serialize};

use crate::ir::{NodeInput, NodeKey};

/// Layout bounds, serialized as `[[x0, y0], [x1, y1]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct Extent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Extent {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn size(&self) -> [f64; 2] {
        [self.width(), self.height()]
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::from_size(1.0, 1.0)
    }
}

impl From<[[f64; 2]; 2]> for Extent {
    fn from([[x0, y0], [x1, y1]]: [[f64; 2]; 2]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

impl From<Extent> for [[f64; 2]; 2] {
    fn from(extent: Extent) -> Self {
        [[extent.x0, extent.y0], [extent.x1, extent.y1]]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub index: usize,
    pub key: NodeKey,
    pub data: NodeInput,
    /// Forward layer, or the pinned column.
    pub depth: usize,
    /// Backward layer, counted from the sinks.
    pub height: usize,
    /// Column after alignment and clamping.
    pub column: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub value: f64,
    /// Outgoing link indices, ordered by target breadth after routing.
    pub source_links: Vec<usize>,
    /// Incoming link indices, ordered by source breadth after routing.
    pub target_links: Vec<usize>,
}

impl Node {
    pub(crate) fn new(index: usize, key: NodeKey, data: NodeInput) -> Self {
        Self {
            index,
            key,
            data,
            depth: 0,
            height: 0,
            column: 0,
            x0: 0.0,
            x1: 0.0,
            y0: 0.0,
            y1: 0.0,
            value: 0.0,
            source_links: Vec::new(),
            target_links: Vec::new(),
        }
    }

    pub fn fixed_column(&self) -> Option<usize> {
        self.data.x_pos
    }

    pub fn center(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    pub fn shift(&mut self, dy: f64) {
        self.y0 += dy;
        self.y1 += dy;
    }

    pub fn label(&self) -> String {
        self.data
            .name
            .clone()
            .unwrap_or_else(|| self.key.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub index: usize,
    pub source: usize,
    pub target: usize,
    pub value: f64,
    /// Thickness, `value * ky`.
    pub width: f64,
    /// Center of the band where it leaves the source.
    pub y0: f64,
    /// Center of the band where it enters the target.
    pub y1: f64,
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SankeyGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    /// Column count used for the x mapping.
    pub levels: usize,
    /// Vertical scale shared by every column.
    pub ky: f64,
}

impl SankeyGraph {
    pub fn node(&self, key: &NodeKey) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.key == key)
    }

    pub fn source_of(&self, link: &Link) -> &Node {
        &self.nodes[link.source]
    }

    pub fn target_of(&self, link: &Link) -> &Node {
        &self.nodes[link.target]
    }

    /// Node indices grouped by shared `x0`, left to right, in node order.
    ///
    /// Distinct integer columns land in one band when `kx` is zero, so the
    /// band position is what groups them.
    pub fn columns(&self) -> Vec<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.nodes.len()).collect();
        order.sort_by(|&a, &b| self.nodes[a].x0.total_cmp(&self.nodes[b].x0));

        let mut columns: Vec<Vec<usize>> = Vec::new();
        let mut band: Option<f64> = None;
        for idx in order {
            let x0 = self.nodes[idx].x0;
            if band != Some(x0) {
                columns.push(Vec::new());
                band = Some(x0);
            }
            if let Some(column) = columns.last_mut() {
                column.push(idx);
            }
        }
        columns
    }
}
