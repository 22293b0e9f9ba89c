//! Structural and binding queries over the arena-backed Java AST.
//!
//! Four query families live here:
//! - [`get_children`]: direct structural children in source order
//! - [`ascend`] and its instantiations [`find_enclosing_lambda`] and
//!   [`find_parent_method_declaration`]: bounded upward kind searches
//! - [`is_ancestor`]: strict parent-chain membership
//! - [`parameter_type_at`]: argument position to declared parameter
//!   type, varargs included
//!
//! All queries are read-only and total: absence comes back as an empty
//! list or `None`, never a panic, except where a caller breaks a stated
//! contract.

pub mod ancestry;
pub mod ascend;
pub mod children;
pub mod params;

pub use ancestry::is_ancestor;
pub use ascend::{
    ascend, find_enclosing_lambda, find_parent_method_declaration, MAX_TREE_WALK_ITERATIONS,
};
pub use children::get_children;
pub use params::parameter_type_at;
