use crate::ir::NodeKey;
use crate::layout::SankeyGraph;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub levels: usize,
    pub ky: f64,
    pub nodes: Vec<NodeDump>,
    pub links: Vec<LinkDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub index: usize,
    pub key: NodeKey,
    pub name: String,
    pub depth: usize,
    pub height: usize,
    pub column: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub value: f64,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct LinkDump {
    pub index: usize,
    pub source: NodeKey,
    pub target: NodeKey,
    pub value: f64,
    pub width: f64,
    pub y0: f64,
    pub y1: f64,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl LayoutDump {
    pub fn from_graph(graph: &SankeyGraph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| NodeDump {
                index: node.index,
                key: node.key.clone(),
                name: node.label(),
                depth: node.depth,
                height: node.height,
                column: node.column,
                x0: node.x0,
                x1: node.x1,
                y0: node.y0,
                y1: node.y1,
                value: node.value,
                attrs: node.data.attrs.clone(),
            })
            .collect();

        let links = graph
            .links
            .iter()
            .map(|link| LinkDump {
                index: link.index,
                source: graph.source_of(link).key.clone(),
                target: graph.target_of(link).key.clone(),
                value: link.value,
                width: link.width,
                y0: link.y0,
                y1: link.y1,
                attrs: link.attrs.clone(),
            })
            .collect();

        LayoutDump {
            levels: graph.levels,
            ky: graph.ky,
            nodes,
            links,
        }
    }
}

pub fn write_layout_dump(path: &Path, graph: &SankeyGraph) -> anyhow::Result<()> {
    let file = File::create(path)?;
    write_layout_dump_to(BufWriter::new(file), graph)
}

pub fn write_layout_dump_to(mut writer: impl Write, graph: &SankeyGraph) -> anyhow::Result<()> {
    let dump = LayoutDump::from_graph(graph);
    serde_json::to_writer_pretty(&mut writer, &dump)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
