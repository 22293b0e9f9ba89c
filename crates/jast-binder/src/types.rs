//! Interned type representation.
//!
//! Types are hash-consed: structurally equal keys intern to the same
//! [`TypeId`], so identity comparison is a `u32` compare and array
//! element lookup is a single pool read.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stable handle for an interned type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }
}

/// Structural key a type interns under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKey {
    Primitive(PrimitiveKind),
    /// Named reference type, keyed by qualified name.
    Named(Arc<str>),
    /// Array type over an already interned element.
    Array(TypeId),
}

/// Hash-consing table mapping [`TypeKey`]s to [`TypeId`]s.
#[derive(Default)]
pub struct TypeTable {
    keys: Vec<TypeKey>,
    ids: FxHashMap<TypeKey, u32>,
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Intern a key, returning the existing id when the key was seen
    /// before.
    pub fn intern(&mut self, key: TypeKey) -> TypeId {
        if let Some(&id) = self.ids.get(&key) {
            return TypeId(id);
        }
        let id = self.keys.len() as u32;
        self.keys.push(key.clone());
        self.ids.insert(key, id);
        TypeId(id)
    }

    pub fn primitive(&mut self, kind: PrimitiveKind) -> TypeId {
        self.intern(TypeKey::Primitive(kind))
    }

    pub fn named(&mut self, qualified_name: &str) -> TypeId {
        self.intern(TypeKey::Named(Arc::from(qualified_name)))
    }

    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        debug_assert!((element.0 as usize) < self.keys.len());
        self.intern(TypeKey::Array(element))
    }

    /// Look up the key behind an id.
    pub fn key(&self, id: TypeId) -> Option<&TypeKey> {
        self.keys.get(id.0 as usize)
    }

    /// Element type of an array type. `None` when `id` is not an array.
    pub fn element_type(&self, id: TypeId) -> Option<TypeId> {
        match self.key(id) {
            Some(TypeKey::Array(element)) => Some(*element),
            _ => None,
        }
    }

    /// Human-readable rendering, mainly for diagnostics and tests.
    pub fn display(&self, id: TypeId) -> String {
        match self.key(id) {
            Some(TypeKey::Primitive(kind)) => kind.name().to_string(),
            Some(TypeKey::Named(name)) => name.to_string(),
            Some(TypeKey::Array(element)) => format!("{}[]", self.display(*element)),
            None => format!("<invalid type #{}>", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut table = TypeTable::new();
        let a = table.named("java.lang.String");
        let b = table.named("java.lang.String");
        let c = table.named("java.lang.Object");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn element_type_unwraps_one_array_level() {
        let mut table = TypeTable::new();
        let int = table.primitive(PrimitiveKind::Int);
        let int_arr = table.array_of(int);
        let int_arr_arr = table.array_of(int_arr);

        assert_eq!(table.element_type(int_arr), Some(int));
        assert_eq!(table.element_type(int_arr_arr), Some(int_arr));
        assert_eq!(table.element_type(int), None);
    }

    #[test]
    fn type_keys_serialize_round_trip() {
        let key = TypeKey::Named(Arc::from("java.util.List"));
        let json = serde_json::to_string(&key).unwrap();
        let back: TypeKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn display_renders_nested_arrays() {
        let mut table = TypeTable::new();
        let s = table.named("java.lang.String");
        let arr = table.array_of(s);
        assert_eq!(table.display(arr), "java.lang.String[]");
    }
}
