use crate::layout::Extent;
use crate::layout::align::Align;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyConfig {
    pub node_width: f64,
    pub node_padding: f64,
    pub extent: Extent,
    pub iterations: usize,
    pub align: Align,
}

impl Default for SankeyConfig {
    fn default() -> Self {
        Self {
            node_width: 24.0,
            node_padding: 8.0,
            extent: Extent::default(),
            iterations: 32,
            align: Align::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    node_width: Option<f64>,
    node_padding: Option<f64>,
    /// Shorthand for an extent anchored at the origin.
    size: Option<[f64; 2]>,
    extent: Option<Extent>,
    iterations: Option<usize>,
    align: Option<Align>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<SankeyConfig> {
    let Some(path) = path else {
        return Ok(SankeyConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Overlays a JSON5 document on the defaults. `extent` wins over `size`.
pub fn parse_config(contents: &str) -> anyhow::Result<SankeyConfig> {
    let parsed: ConfigFile = json5::from_str(contents)?;
    let mut config = SankeyConfig::default();

    if let Some(v) = parsed.node_width {
        config.node_width = v;
    }
    if let Some(v) = parsed.node_padding {
        config.node_padding = v;
    }
    if let Some([width, height]) = parsed.size {
        config.extent = Extent::from_size(width, height);
    }
    if let Some(v) = parsed.extent {
        config.extent = v;
    }
    if let Some(v) = parsed.iterations {
        config.iterations = v;
    }
    if let Some(v) = parsed.align {
        config.align = v;
    }
    Ok(config)
}
