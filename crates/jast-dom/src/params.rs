//! Mapping call argument positions to declared parameter types.

use jast_binder::{MethodBinding, TypeId, TypeTable};

/// Declared type of the parameter that receives the argument at
/// `argument_index`.
///
/// For a varargs method every argument at or past the variable-arity
/// position resolves to the element type of the last declared
/// parameter; a call site may pass any number of such arguments, so
/// indices beyond the declared count are valid there. For fixed-arity
/// methods the index must name a declared parameter. Anything else,
/// including negative indices and a varargs last parameter that is not
/// an array type, resolves to `None`.
pub fn parameter_type_at(
    method: &MethodBinding,
    types: &TypeTable,
    argument_index: i32,
) -> Option<TypeId> {
    let params = &method.parameter_types;
    if method.is_varargs && !params.is_empty() && argument_index >= params.len() as i32 - 1 {
        return types.element_type(params[params.len() - 1]);
    }
    if argument_index >= 0 && (argument_index as usize) < params.len() {
        return Some(params[argument_index as usize]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use jast_binder::PrimitiveKind;

    fn fixed_method(types: &mut TypeTable) -> MethodBinding {
        let int = types.primitive(PrimitiveKind::Int);
        let string = types.named("java.lang.String");
        let boolean = types.primitive(PrimitiveKind::Boolean);
        let void = types.primitive(PrimitiveKind::Void);
        MethodBinding::new("f", vec![int, string, boolean], void, false)
    }

    #[test]
    fn fixed_arity_maps_directly() {
        let mut types = TypeTable::new();
        let method = fixed_method(&mut types);
        let string = types.named("java.lang.String");
        assert_eq!(parameter_type_at(&method, &types, 1), Some(string));
    }

    #[test]
    fn fixed_arity_rejects_out_of_range() {
        let mut types = TypeTable::new();
        let method = fixed_method(&mut types);
        assert_eq!(parameter_type_at(&method, &types, 3), None);
        assert_eq!(parameter_type_at(&method, &types, -1), None);
    }

    #[test]
    fn varargs_tail_resolves_to_element_type() {
        let mut types = TypeTable::new();
        let string = types.named("java.lang.String");
        let object = types.named("java.lang.Object");
        let object_arr = types.array_of(object);
        let void = types.primitive(PrimitiveKind::Void);
        let method = MethodBinding::new("g", vec![string, object_arr], void, true);

        assert_eq!(parameter_type_at(&method, &types, 0), Some(string));
        assert_eq!(parameter_type_at(&method, &types, 1), Some(object));
        assert_eq!(parameter_type_at(&method, &types, 2), Some(object));
        assert_eq!(parameter_type_at(&method, &types, 7), Some(object));
    }

    #[test]
    fn resolution_is_stable_across_repeated_calls() {
        let mut types = TypeTable::new();
        let method = fixed_method(&mut types);
        assert_eq!(method.declared_parameter_count(), 3);
        for index in -1..=3 {
            assert_eq!(
                parameter_type_at(&method, &types, index),
                parameter_type_at(&method, &types, index)
            );
        }
    }

    #[test]
    fn varargs_with_no_parameters_resolves_nothing() {
        let mut types = TypeTable::new();
        let void = types.primitive(PrimitiveKind::Void);
        let method = MethodBinding::new("h", vec![], void, true);
        assert_eq!(parameter_type_at(&method, &types, 0), None);
    }

    #[test]
    fn varargs_last_parameter_must_be_an_array() {
        let mut types = TypeTable::new();
        let int = types.primitive(PrimitiveKind::Int);
        let void = types.primitive(PrimitiveKind::Void);
        // Malformed binding: varargs flag set but last parameter is
        // not an array type.
        let method = MethodBinding::new("k", vec![int], void, true);
        assert_eq!(parameter_type_at(&method, &types, 0), None);
    }
}
