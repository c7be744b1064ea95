#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{SankeyConfig, load_config, parse_config};
pub use ir::{Endpoint, LinkInput, NodeInput, NodeKey, SankeyInput};
pub use layout::align::{self, Align};
pub use layout::{
    Extent, LayoutError, Link, Node, SankeyGraph, Sankey, key_by_index, key_by_name,
};
pub use layout_dump::{LayoutDump, write_layout_dump};
