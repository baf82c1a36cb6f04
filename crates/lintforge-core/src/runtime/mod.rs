//! Node.js runtime detection
//!
//! The generated configs need a Node.js recent enough for ESLint flat
//! configs. The check is advisory: it never stops generation.

pub mod check;

pub use check::{check_compatibility, check_node, node_advisory, RuntimeInfo, MIN_NODE_VERSION};
