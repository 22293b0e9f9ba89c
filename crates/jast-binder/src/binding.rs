//! Resolved method bindings.

use crate::types::TypeId;
use serde::{Deserialize, Serialize};

/// A resolved method: declared parameter types plus the varargs marker.
///
/// For a varargs method the last entry of `parameter_types` is the
/// declared array type of the variable-arity parameter, exactly as it
/// appears in the declaration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodBinding {
    pub name: String,
    pub parameter_types: Vec<TypeId>,
    pub return_type: TypeId,
    pub is_varargs: bool,
}

impl MethodBinding {
    pub fn new(
        name: &str,
        parameter_types: Vec<TypeId>,
        return_type: TypeId,
        is_varargs: bool,
    ) -> MethodBinding {
        MethodBinding {
            name: name.to_string(),
            parameter_types,
            return_type,
            is_varargs,
        }
    }

    pub fn declared_parameter_count(&self) -> usize {
        self.parameter_types.len()
    }
}
