use crate::config::load_config;
use crate::ir::SankeyInput;
use crate::layout::align::Align;
use crate::layout::{Extent, Sankey};
use crate::layout_dump::{write_layout_dump, write_layout_dump_to};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sankey", version, about = "Sankey diagram layout engine")]
pub struct Args {
    /// Input graph JSON ({"nodes": [...], "links": [...]}) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout JSON. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON5 file (nodeWidth, nodePadding, extent, iterations, align)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Relaxation rounds
    #[arg(long = "iterations")]
    pub iterations: Option<usize>,

    /// Column alignment policy
    #[arg(long = "align", value_enum)]
    pub align: Option<Align>,

    /// Resolve link endpoints by node name instead of position
    #[arg(long = "by-name")]
    pub by_name: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if args.width.is_some() || args.height.is_some() {
        let [width, height] = config.extent.size();
        config.extent = Extent::new(
            config.extent.x0,
            config.extent.y0,
            config.extent.x0 + args.width.unwrap_or(width),
            config.extent.y0 + args.height.unwrap_or(height),
        );
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(align) = args.align {
        config.align = align;
    }

    let raw = read_input(args.input.as_deref())?;
    let input: SankeyInput = serde_json::from_str(&raw).context("invalid graph JSON")?;

    let mut sankey = Sankey::from_config(&config);
    if args.by_name {
        sankey = sankey.node_id(crate::layout::key_by_name);
    }
    let graph = sankey.layout(&input)?;

    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &graph)?,
        None => write_layout_dump_to(io::stdout().lock(), &graph)?,
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
