use crate::ir::NodeKey;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("missing: {id}")]
    MissingNode { id: NodeKey },
    #[error("circular link")]
    CircularLink,
}

pub type Result<T> = std::result::Result<T, LayoutError>;
