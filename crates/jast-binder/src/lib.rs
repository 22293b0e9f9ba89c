//! Type table and bindings layered over the syntax tree.

pub mod binding;
pub mod types;

pub use binding::MethodBinding;
pub use types::{PrimitiveKind, TypeId, TypeKey, TypeTable};
