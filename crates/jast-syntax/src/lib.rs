//! Arena-backed Java syntax tree.
//!
//! Nodes are 16-byte headers indexed by [`NodeIndex`]; kind-specific
//! payloads live in typed pools owned by [`NodeArena`]. Parent links are
//! wired at construction time and read through the arena, so structural
//! queries never chase pointers.

pub mod arena;
pub mod node;
pub mod syntax_kind;
pub mod walk;

pub use arena::NodeArena;
pub use node::{
    ExtendedNodeInfo, ModifierFlags, Node, NodeIndex, NodeList, PrimitiveTypeCode,
};
pub use syntax_kind::SyntaxKind;
pub use walk::{for_each_child, walk, WalkControl};
