use crate::tree::NodeId;

/// Which child of a node a descent went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Towards smaller items.
    Left,
    /// Towards larger items.
    Right,
}

/// The ancestors visited on the way down from the root, each paired with the side the descent
/// took out of it. The last entry is the parent of the position being changed.
pub(crate) type Path = Vec<(NodeId, Side)>;
