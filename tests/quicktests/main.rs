//! Property tests comparing the tree against `std::collections::BTreeSet`.

mod invariants;
mod op;
mod tree;

pub(crate) use op::Op;
