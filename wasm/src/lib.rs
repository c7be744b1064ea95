use sankey_layout::{Align, LayoutDump, Sankey, SankeyInput};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SankeyLayoutOptions {
    width: Option<f64>,
    height: Option<f64>,
    node_width: Option<f64>,
    node_padding: Option<f64>,
    iterations: Option<usize>,
    align: Option<Align>,
    by_name: Option<bool>,
}

fn build_sankey(options: SankeyLayoutOptions) -> Sankey {
    let mut sankey = if options.by_name.unwrap_or(false) {
        Sankey::by_name()
    } else {
        Sankey::new()
    };

    let [width, height] = sankey.get_size();
    sankey = sankey.size([
        options.width.unwrap_or(width),
        options.height.unwrap_or(height),
    ]);
    if let Some(node_width) = options.node_width {
        sankey = sankey.node_width(node_width);
    }
    if let Some(node_padding) = options.node_padding {
        sankey = sankey.node_padding(node_padding);
    }
    if let Some(iterations) = options.iterations {
        sankey = sankey.iterations(iterations);
    }
    if let Some(align) = options.align {
        sankey = sankey.builtin_align(align);
    }
    sankey
}

fn layout_json(graph_json: &str, options: SankeyLayoutOptions) -> Result<String, String> {
    let input: SankeyInput = serde_json::from_str(graph_json).map_err(|error| error.to_string())?;
    let graph = build_sankey(options)
        .layout(&input)
        .map_err(|error| error.to_string())?;
    serde_json::to_string(&LayoutDump::from_graph(&graph)).map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn layout_sankey_json(graph_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<SankeyLayoutOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        SankeyLayoutOptions::default()
    };

    layout_json(graph_json, options).map_err(|error| JsValue::from_str(&error))
}
