mod compression;
mod insert;
pub mod node;
mod traversal;
mod tree;

pub use node::{ParamChild, RadixTreeNode};
pub use tree::RadixRegistry;
